/// Server configuration
use crate::error::{Result, ServerError};
use crate::services::credentials::{MAX_COST, MIN_COST};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Root served under `/app/`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_refresh_token_days")]
    pub refresh_token_days: u64,

    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Shared key the payment provider presents on webhook calls
    #[serde(default)]
    pub polka_api_key: String,
}

impl ServerConfig {
    /// Load configuration from `.env`, file and environment
    pub fn load() -> Result<Self> {
        // A missing .env file is normal outside development.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ServerError::Config(format!("Failed to read .env: {e}")));
            }
        }

        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with CHIRPY_), e.g.
        // CHIRPY_AUTH__JWT_SECRET
        settings = settings.add_source(
            config::Environment::with_prefix("CHIRPY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set CHIRPY_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if !(MIN_COST..=MAX_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ServerError::Config(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_COST,
                MAX_COST,
                self.auth.bcrypt_cost
            )));
        }

        if self.auth.refresh_token_days == 0 {
            return Err(ServerError::Config(
                "refresh_token_days must be at least 1".to_string(),
            ));
        }

        if self.auth.polka_api_key.is_empty() {
            tracing::warn!("No Polka API key configured; upgrade webhooks will be refused");
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_path: default_database_path(),
        static_dir: default_static_dir(),
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("database.json")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        refresh_token_days: default_refresh_token_days(),
        bcrypt_cost: default_bcrypt_cost(),
        polka_api_key: String::new(),
    }
}

fn default_refresh_token_days() -> u64 {
    60
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}
