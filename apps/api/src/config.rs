use anyhow::{Context, Result};

use crate::models::TemplateKind;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a present but invalid value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Template selected when the session starts.
    pub default_template: TemplateKind,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            default_template: TemplateKind::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            default_template: match lookup("DEFAULT_TEMPLATE") {
                Some(template) => template
                    .parse::<TemplateKind>()
                    .context("DEFAULT_TEMPLATE is invalid")?,
                None => defaults.default_template,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
