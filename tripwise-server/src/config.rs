//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "TRIPWISE_ADDR";

/// Environment variable holding an optional jitter seed.
pub const SEED_VAR: &str = "TRIPWISE_SEED";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub addr: SocketAddr,

    /// Seed for ETA jitter. `None` draws fresh entropy per request.
    pub seed: Option<u64>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to [`ServerConfig::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(SEED_VAR) {
            let seed = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: SEED_VAR,
                value: value.clone(),
            })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn empty_environment_is_default() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn reads_addr_and_seed() {
        let config =
            ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "0.0.0.0:8080"), (SEED_VAR, " 42 ")]))
                .unwrap();
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_bad_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: ADDR_VAR,
                value: "localhost".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid TRIPWISE_ADDR: \"localhost\"");
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(ServerConfig::from_lookup(lookup(&[(SEED_VAR, "-1")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(SEED_VAR, "abc")])).is_err());
    }
}
