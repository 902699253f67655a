//! Server configuration read from `INTAKE_*` environment variables.
//!
//! | variable                | default         |
//! |-------------------------|-----------------|
//! | `INTAKE_HOST`           | `127.0.0.1`     |
//! | `INTAKE_PORT`           | `8080`          |
//! | `INTAKE_DB_PATH`        | `intake.sqlite` |
//! | `INTAKE_SESSION_HOURS`  | `12`            |
//! | `INTAKE_MAX_BODY_MB`    | `10`            |
//! | `INTAKE_OPEN_BROWSER`   | `false`         |
//! | `INTAKE_ADMIN_EMAIL`    | unset           |
//! | `INTAKE_ADMIN_PASSWORD` | unset           |

use chrono::{Duration, Utc};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
    #[error("{0} is set but {1} is not")]
    Incomplete(&'static str, &'static str),
}

/// Account created at startup if no rep with that email exists yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedAccount {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub session_hours: i64,
    pub max_body_bytes: usize,
    pub open_browser: bool,
    pub seed_account: Option<SeedAccount>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("intake.sqlite"),
            session_hours: 12,
            max_body_bytes: 10 * 1024 * 1024,
            open_browser: false,
            seed_account: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to the
    /// defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let max_body_mb: usize = parse(&lookup, "INTAKE_MAX_BODY_MB", 10)?;

        let seed_account = match (
            lookup("INTAKE_ADMIN_EMAIL"),
            lookup("INTAKE_ADMIN_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(SeedAccount { email, password }),
            (Some(_), None) => {
                return Err(ConfigError::Incomplete(
                    "INTAKE_ADMIN_EMAIL",
                    "INTAKE_ADMIN_PASSWORD",
                ))
            }
            (None, Some(_)) => {
                return Err(ConfigError::Incomplete(
                    "INTAKE_ADMIN_PASSWORD",
                    "INTAKE_ADMIN_EMAIL",
                ))
            }
            (None, None) => None,
        };

        let session_hours: i64 = parse(&lookup, "INTAKE_SESSION_HOURS", defaults.session_hours)?;
        // Expiry is computed as `now + ttl` on every login, so the sum must fit.
        let representable = Duration::try_hours(session_hours)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .is_some();
        if session_hours <= 0 || !representable {
            return Err(ConfigError::Invalid {
                key: "INTAKE_SESSION_HOURS",
                value: session_hours.to_string(),
            });
        }

        let max_body_bytes = max_body_mb
            .checked_mul(1024 * 1024)
            .filter(|bytes| *bytes > 0)
            .ok_or_else(|| ConfigError::Invalid {
                key: "INTAKE_MAX_BODY_MB",
                value: max_body_mb.to_string(),
            })?;

        Ok(Self {
            host: lookup("INTAKE_HOST").unwrap_or(defaults.host),
            port: parse(&lookup, "INTAKE_PORT", defaults.port)?,
            db_path: lookup("INTAKE_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            session_hours,
            max_body_bytes,
            open_browser: parse_bool(&lookup, "INTAKE_OPEN_BROWSER", defaults.open_browser)?,
            seed_account,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn values_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("INTAKE_HOST", "0.0.0.0"),
            ("INTAKE_PORT", "9000"),
            ("INTAKE_DB_PATH", "/tmp/forms.sqlite"),
            ("INTAKE_MAX_BODY_MB", "2"),
            ("INTAKE_OPEN_BROWSER", "yes"),
            ("INTAKE_ADMIN_EMAIL", "admin@example.com"),
            ("INTAKE_ADMIN_PASSWORD", "changeme"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_path, PathBuf::from("/tmp/forms.sqlite"));
        assert_eq!(config.max_body_bytes, 2 * 1024 * 1024);
        assert!(config.open_browser);
        assert_eq!(
            config.seed_account,
            Some(SeedAccount {
                email: "admin@example.com".into(),
                password: "changeme".into()
            })
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            Config::from_lookup(lookup(&[("INTAKE_PORT", "eighty")])),
            Err(ConfigError::Invalid {
                key: "INTAKE_PORT",
                value: "eighty".into()
            })
        );
        assert!(Config::from_lookup(lookup(&[("INTAKE_SESSION_HOURS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("INTAKE_OPEN_BROWSER", "maybe")])).is_err());
    }

    #[test]
    fn out_of_range_limits_are_rejected() {
        assert_eq!(
            Config::from_lookup(lookup(&[("INTAKE_SESSION_HOURS", "10000000000")])),
            Err(ConfigError::Invalid {
                key: "INTAKE_SESSION_HOURS",
                value: "10000000000".into()
            })
        );
        let huge_mb = usize::MAX.to_string();
        assert_eq!(
            Config::from_lookup(lookup(&[("INTAKE_MAX_BODY_MB", huge_mb.as_str())])),
            Err(ConfigError::Invalid {
                key: "INTAKE_MAX_BODY_MB",
                value: huge_mb.clone()
            })
        );
        assert!(Config::from_lookup(lookup(&[("INTAKE_MAX_BODY_MB", "0")])).is_err());

        let config = Config::from_lookup(lookup(&[("INTAKE_SESSION_HOURS", "720")])).unwrap();
        assert_eq!(config.session_hours, 720);
    }

    #[test]
    fn half_configured_seed_account_is_an_error() {
        assert_eq!(
            Config::from_lookup(lookup(&[("INTAKE_ADMIN_EMAIL", "admin@example.com")])),
            Err(ConfigError::Incomplete("INTAKE_ADMIN_EMAIL", "INTAKE_ADMIN_PASSWORD"))
        );
    }
}
