use artmount_notification::EmailConfig;
use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::env;

pub const DEFAULT_SECRET_KEY: &str = "your-secret-key-change-this";

/// Plain environment variables and the setting each one overrides.
const ENV_OVERRIDES: [(&str, &str); 8] = [
    ("SECRET_KEY", "server.secret_key"),
    ("PORT", "server.port"),
    ("SMTP_SERVER", "email.smtp_server"),
    ("SMTP_PORT", "email.smtp_port"),
    ("SMTP_USERNAME", "email.smtp_username"),
    ("SMTP_PASSWORD", "email.smtp_password"),
    ("EMAIL_FROM", "email.from_address"),
    ("ADMIN_EMAIL", "email.admin_address"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub secret_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Plain environment variables (SMTP_USERNAME, ADMIN_EMAIL, etc.)
    /// 2. Prefixed environment variables (ARTMOUNT__EMAIL__SMTP_PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_from(config_path, env::vars().collect())
    }

    /// Same as [`Config::load`] with an explicit set of environment variables.
    pub fn load_from(
        config_path: Option<String>,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5001)?
            .set_default("server.secret_key", DEFAULT_SECRET_KEY)?
            .set_default("email.smtp_server", "smtp.gmail.com")?
            .set_default("email.smtp_port", 587)?
            .set_default(
                "email.smtp_username",
                artmount_notification::PLACEHOLDER_SMTP_USERNAME,
            )?
            .set_default(
                "email.smtp_password",
                artmount_notification::PLACEHOLDER_SMTP_PASSWORD,
            )?
            .set_default("email.from_address", "your-email@gmail.com")?
            .set_default("email.admin_address", "info@artmountacademy.com")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| vars.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ARTMOUNT")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        for (var, key) in ENV_OVERRIDES {
            if let Some(value) = vars.get(var) {
                builder = builder.set_override(key, value.as_str())?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        if self.email.is_configured() {
            self.email.validate()?;
        }
        Ok(())
    }

    pub fn has_default_secret_key(&self) -> bool {
        self.server.secret_key == DEFAULT_SECRET_KEY
    }
}
