use std::env;

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub database: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            mongo_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "seatbook".to_string()),
        }
    }
}
