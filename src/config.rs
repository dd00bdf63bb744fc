//! # Configuration
//!
//! Settings come from the environment. `main` first loads `var.env` with `dotenvy`
//! when the file exists, so local development can keep them in a file.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SALES_ADDR` | `127.0.0.1:4000` |
//! | `SECRET` | a development secret, with a warning |
//! | `TOKEN_TTL_SECS` | `36000` |
//! | `ACTOR_BUFFER` | `32` |

use crate::auth::DEFAULT_TOKEN_TTL;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4000);
pub const DEFAULT_ACTOR_BUFFER: usize = 32;
const DEV_SECRET: &str = "dev-secret-change-me";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub secret: String,
    pub token_ttl: Duration,
    pub actor_buffer: usize,
}

fn parse<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = parse("SALES_ADDR", lookup("SALES_ADDR"), DEFAULT_ADDR)?;

        let secret = match lookup("SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None => {
                warn!("SECRET not set; using insecure dev default");
                DEV_SECRET.to_string()
            }
        };

        let ttl_secs = parse("TOKEN_TTL_SECS", lookup("TOKEN_TTL_SECS"), DEFAULT_TOKEN_TTL.as_secs())?;

        let actor_buffer = parse("ACTOR_BUFFER", lookup("ACTOR_BUFFER"), DEFAULT_ACTOR_BUFFER)?;
        if actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "ACTOR_BUFFER",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            addr,
            secret,
            token_ttl: Duration::from_secs(ttl_secs),
            actor_buffer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:4000");
        assert_eq!(config.secret, DEV_SECRET);
        assert_eq!(config.token_ttl, Duration::from_secs(36_000));
        assert_eq!(config.actor_buffer, 32);
    }

    #[test]
    fn values_are_read() {
        let config = config(&[
            ("SALES_ADDR", "0.0.0.0:8080"),
            ("SECRET", "s3cret"),
            ("TOKEN_TTL_SECS", "60"),
            ("ACTOR_BUFFER", "4"),
        ])
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.token_ttl, Duration::from_secs(60));
        assert_eq!(config.actor_buffer, 4);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = config(&[("TOKEN_TTL_SECS", "ten hours")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "TOKEN_TTL_SECS", .. }));
        assert!(config(&[("ACTOR_BUFFER", "0")]).is_err());
        assert!(config(&[("SALES_ADDR", "nowhere")]).is_err());
    }
}
