use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory the client bundle is served from.
    pub dir: String,
}

impl AppointmentConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix (port).
        let common = core_config::Config::load()?;

        Ok(AppointmentConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", "mongodb://localhost:27017"),
                database: get_env("MONGODB_DATABASE", "appointments_db"),
            },
            assets: AssetsConfig {
                dir: get_env("ASSETS_DIR", "public"),
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
