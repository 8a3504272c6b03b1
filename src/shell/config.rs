use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a valid number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `None` selects the in memory store.
    pub mongo: Option<MongoSettings>,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `HOST`                 | `0.0.0.0`     |
    /// | `PORT`                 | `3000`        |
    /// | `APP_ENV`              | `development` |
    /// | `MONGODB_URI`          | unset         |
    /// | `MONGODB_DB`           | `portfolio`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_number(&lookup, "PORT", 3000)?;
        let environment = lookup("APP_ENV")
            .map(|raw| Environment::parse(&raw))
            .unwrap_or(Environment::Development);
        let mongo = lookup("MONGODB_URI")
            .filter(|uri| !uri.trim().is_empty())
            .map(|uri| MongoSettings {
                uri,
                database: lookup("MONGODB_DB").unwrap_or_else(|| "portfolio".into()),
            });
        let request_timeout_secs = parse_number(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        Ok(Self {
            host,
            port,
            environment,
            mongo,
            request_timeout_secs,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
