/// Password hashing - bcrypt with a per-hash random salt
use chirpy_core::ChirpyError;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;
/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Hash a password with the given bcrypt cost
///
/// Only fails if the hasher itself fails (e.g. the OS cannot provide a salt).
pub fn hash_password(password: &str, cost: u32) -> Result<String, ChirpyError> {
    bcrypt::hash(password, cost).map_err(|e| ChirpyError::Hashing(e.to_string()))
}

/// Verify a password against a stored hash
///
/// `Ok(false)` means the password does not match; `Err` means the stored hash
/// could not be used at all.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ChirpyError> {
    bcrypt::verify(password, hash).map_err(|e| ChirpyError::Hashing(e.to_string()))
}
