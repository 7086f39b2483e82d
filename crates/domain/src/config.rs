use serde::{Deserialize, Serialize};

/// Well-known public resolvers used when no server is given on the
/// command line.
pub const PUBLIC_DNS_SERVERS: &[&str] = &[
    "1.0.0.1",        // Cloudflare
    "1.1.1.1",        // Cloudflare
    "8.8.4.4",        // Google
    "8.8.8.8",        // Google
    "8.26.56.26",     // Comodo
    "8.20.247.20",    // Comodo
    "9.9.9.9",        // Quad9
    "64.6.64.6",      // Verisign
    "208.67.222.222", // OpenDNS
    "208.67.220.220", // OpenDNS
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,
    /// Round-trip budget for a single query, in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_upstream_servers() -> Vec<String> {
    PUBLIC_DNS_SERVERS.iter().map(|s| s.to_string()).collect()
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream_servers: default_upstream_servers(),
            query_timeout: default_query_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl ResolverConfig {
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dug.toml").exists() {
            Self::from_file("dug.toml")?
        } else if std::path::Path::new("/etc/dug/config.toml").exists() {
            Self::from_file("/etc/dug/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.query_timeout {
            self.query_timeout = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream_servers.is_empty() {
            return Err(ConfigError::Validation("No upstream servers".to_string()));
        }
        if self.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub query_timeout: Option<u64>,
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Configuration validation error: {0}")]
    Validation(String),
}
