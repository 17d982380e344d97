use std::str::FromStr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_NAME: &str = "fleet-operations";
const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,

    pub app_name: String,
    pub app_env: String,
    pub log_level: String,

    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins when set; otherwise a Postgres URL is composed from
    /// `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASS` and `DB_NAME`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required value present and parseable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let host = required(&lookup, "DB_HOST")?;
                let port: u16 = parsed(&lookup, "DB_PORT", DEFAULT_DB_PORT)?;
                let user = required(&lookup, "DB_USER")?;
                let pass = required(&lookup, "DB_PASS")?;
                let name = required(&lookup, "DB_NAME")?;

                postgres_url(&host, port, &user, &pass, &name)?
            }
        };

        Ok(Self {
            database_url,
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_env: lookup("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            log_level: lookup("APP_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed(&lookup, "PORT", DEFAULT_PORT)?,
            request_timeout_secs: parsed(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Composes a Postgres URL, percent-encoding the credentials and database name.
fn postgres_url(
    host: &str,
    port: u16,
    user: &str,
    pass: &str,
    name: &str,
) -> Result<String, ConfigError> {
    let invalid = |var: &str, value: &str| ConfigError::InvalidEnvVar {
        name: var.to_string(),
        value: value.to_string(),
    };

    let mut url = Url::parse(&format!("postgres://{}:{}", host, port))
        .map_err(|_| invalid("DB_HOST", host))?;
    url.set_username(user).map_err(|_| invalid("DB_USER", user))?;
    url.set_password(Some(pass)).map_err(|_| invalid("DB_PASS", pass))?;
    url.path_segments_mut()
        .map_err(|_| invalid("DB_HOST", host))?
        .push(name);

    Ok(url.into())
}

fn parsed<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
