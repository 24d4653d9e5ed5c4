/// Authentication service - JWT issuing and validation
use chirpy_core::{ChirpyError, Rejection, UserId};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Lifetime of every access token, in seconds
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    refresh_token_expiration: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: TokenKind, // Issuer doubles as the token kind
    pub sub: String,    // Subject (user ID)
    pub iat: i64,       // Issued at
    pub exp: i64,       // Expiration time
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl AuthService {
    pub fn new(secret: String, refresh_expiration_days: u64) -> Self {
        Self {
            secret,
            refresh_token_expiration: Duration::days(refresh_expiration_days as i64),
        }
    }

    /// Create an access token valid for one hour from `now`
    pub fn issue_access_token(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<String, ChirpyError> {
        self.create_token(
            user_id,
            TokenKind::Access,
            now,
            Duration::seconds(ACCESS_TOKEN_TTL_SECS),
        )
    }

    /// Create a refresh token using the configured lifetime
    pub fn issue_refresh_token(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<String, ChirpyError> {
        self.create_token(user_id, TokenKind::Refresh, now, self.refresh_token_expiration)
    }

    /// Verify signature and expiry and decode the claims
    ///
    /// Expiry is checked against `now` with no leeway.
    pub fn decode_claims(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, Rejection> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => Rejection::InvalidSignature,
                _ => Rejection::Malformed,
            }
        })?;

        let claims = token_data.claims;
        if now.timestamp() > claims.exp {
            return Err(Rejection::Expired);
        }
        Ok(claims)
    }

    /// Validate any correctly signed, unexpired token and return its subject
    ///
    /// Token kind is not checked here.
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, Rejection> {
        let claims = self.decode_claims(token, now)?;
        subject(&claims)
    }

    /// Exchange a refresh token for a new one-hour access token
    ///
    /// The refresh token itself is neither extended nor rotated.
    pub fn refresh(&self, token: &str, now: DateTime<Utc>) -> Result<String, ChirpyError> {
        let claims = self.decode_claims(token, now)?;
        if claims.iss != TokenKind::Refresh {
            return Err(Rejection::InvalidIssuer.into());
        }
        let user_id = subject(&claims)?;
        self.issue_access_token(user_id, now)
    }

    fn create_token(
        &self,
        user_id: UserId,
        kind: TokenKind,
        now: DateTime<Utc>,
        expiration: Duration,
    ) -> Result<String, ChirpyError> {
        let exp = now + expiration;

        let claims = Claims {
            iss: kind,
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
            .map_err(|e| ChirpyError::Hashing(format!("token signing failed: {e}")))
    }
}

fn subject(claims: &Claims) -> Result<UserId, Rejection> {
    claims.sub.parse().map_err(|_| Rejection::Malformed)
}

/// Extract the token from an `Authorization` header value
///
/// The value must be exactly `Bearer <token>`.
pub fn bearer_token(header: Option<&str>) -> Result<&str, Rejection> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(Rejection::MissingCredential),
    };

    match header.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(char::is_whitespace) => {
            Ok(token)
        }
        _ => Err(Rejection::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn auth() -> AuthService {
        AuthService::new("secret".to_string(), 60)
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_token_creation_and_validation() {
        let auth = auth();
        let user_id = UserId::new(123);

        let access_token = auth.issue_access_token(user_id, t0()).unwrap();
        assert_eq!(auth.validate(&access_token, t0()).unwrap(), user_id);

        let refresh_token = auth.issue_refresh_token(user_id, t0()).unwrap();
        assert_eq!(auth.validate(&refresh_token, t0()).unwrap(), user_id);
    }

    #[test]
    fn test_claims_carry_kind_and_lifetime() {
        let auth = auth();
        let token = auth.issue_access_token(UserId::new(1), t0()).unwrap();
        let claims = auth.decode_claims(&token, t0()).unwrap();

        assert_eq!(claims.iss, TokenKind::Access);
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, (t0() + Duration::hours(1)).timestamp());

        let token = auth.issue_refresh_token(UserId::new(1), t0()).unwrap();
        let claims = auth.decode_claims(&token, t0()).unwrap();
        assert_eq!(claims.iss, TokenKind::Refresh);
        assert_eq!(claims.exp, (t0() + Duration::days(60)).timestamp());
    }

    #[test]
    fn test_issuer_serializes_as_plain_kind() {
        let json = serde_json::to_value(TokenKind::Refresh).unwrap();
        assert_eq!(json, "refresh");
    }

    #[test]
    fn test_refresh_requires_refresh_kind() {
        let auth = auth();
        let user_id = UserId::new(9);

        let access_token = auth.issue_access_token(user_id, t0()).unwrap();
        let err = auth.refresh(&access_token, t0()).unwrap_err();
        assert!(matches!(err, ChirpyError::Rejected(Rejection::InvalidIssuer)));

        let refresh_token = auth.issue_refresh_token(user_id, t0()).unwrap();
        let new_access = auth.refresh(&refresh_token, t0()).unwrap();
        let claims = auth.decode_claims(&new_access, t0()).unwrap();
        assert_eq!(claims.iss, TokenKind::Access);
        assert_eq!(claims.sub, "9");
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(bearer_token(None), Err(Rejection::MissingCredential));
        assert_eq!(bearer_token(Some("")), Err(Rejection::MissingCredential));
        for bad in [
            "Bearer",
            "Bearer ",
            "bearer abc",
            "Basic abc",
            "Bearer  abc",
            "Bearer abc def",
            "Bearerabc",
            "ApiKey abc",
        ] {
            assert_eq!(
                bearer_token(Some(bad)),
                Err(Rejection::MalformedHeader),
                "{bad:?} should be malformed"
            );
        }
    }
}
