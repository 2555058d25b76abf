use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite:tasks.db?mode=rwc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Process configuration, read once from the environment at boot.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    pub environment: Environment,
    pub monitoring_endpoint: String,
    pub monitoring_api_key: String,
}

impl Settings {
    pub fn load() -> Result<Settings, String> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            Ok("development") | Err(_) => Environment::Development,
            Ok(other) => {
                return Err(format!(
                    "APP_ENV must be development or production, got {other}"
                ))
            }
        };

        Ok(Settings {
            port,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            environment,
            monitoring_endpoint: env::var("MONITORING_ENDPOINT").unwrap_or_default(),
            monitoring_api_key: env::var("MONITORING_API_KEY").unwrap_or_default(),
        })
    }
}
