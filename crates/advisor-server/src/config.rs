//! Server Configuration

use std::net::SocketAddr;

use fund_advisor::{AdvisorError, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Settings read from the environment at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Allowed CORS origin (`CORS_ALLOW_ORIGIN`); `None` allows any
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| AdvisorError::Config(format!("BIND_ADDR is not a socket address: {raw_addr}")))?;

        let cors_origin = get("CORS_ALLOW_ORIGIN")
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty() && o != "*");

        Ok(Self { bind_addr, cors_origin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("CORS_ALLOW_ORIGIN", "https://funds.example.com"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.cors_origin.as_deref(), Some("https://funds.example.com"));
    }

    #[test]
    fn test_wildcard_origin_means_any() {
        let config = load(&[("CORS_ALLOW_ORIGIN", "*")]).unwrap();
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_bad_bind_addr() {
        let err = load(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
    }
}
