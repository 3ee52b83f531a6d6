//! Server configuration parsing.

use serde::Deserialize;
use std::path::Path;

/// Server configuration loaded from TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Server settings.
    pub server: ServerConfig,
    /// Document store settings.
    pub database: DatabaseConfig,
    /// Token settings.
    pub auth: AuthConfig,
    /// Cross-origin settings.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server bind settings.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory with a static frontend bundle to serve, if any.
    #[serde(default)]
    pub static_path: Option<String>,
}

/// Document store configuration.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the store directory.
    pub path: String,
}

/// Token issuing configuration.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign session tokens.
    pub secret: String,
    /// Session token lifetime in seconds.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

fn default_token_ttl_secs() -> u64 {
    3600
}

/// Cross-origin resource sharing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Whether cross-origin requests are allowed at all.
    #[serde(default)]
    pub enabled: bool,
    /// Allowed origins; "*" allows any.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    /// Allowed methods.
    #[serde(default = "default_cors_methods")]
    pub allow_methods: Vec<String>,
    /// Allowed request headers.
    #[serde(default = "default_cors_headers")]
    pub allow_headers: Vec<String>,
    /// Whether credentialed requests are allowed.
    #[serde(default)]
    pub allow_credentials: bool,
    /// Preflight cache lifetime in seconds.
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_cors_headers() -> Vec<String> {
    ["content-type", "authorization"]
        .iter()
        .map(|h| h.to_string())
        .collect()
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allow_origins: Vec::new(),
            allow_methods: default_cors_methods(),
            allow_headers: default_cors_headers(),
            allow_credentials: false,
            max_age: default_cors_max_age(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info" or "bloglist=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
    /// Output destination: "stdout", "stderr", or a file path.
    #[serde(default = "default_log_output")]
    pub output: String,
    /// Whether to use ANSI colors on terminal output.
    #[serde(default = "default_log_color")]
    pub color: bool,
    /// Whether to include the event target in output.
    #[serde(default)]
    pub target: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

fn default_log_color() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
            output: default_log_output(),
            color: default_log_color(),
            target: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
bind = "127.0.0.1"
port = 3003

[database]
path = ".bloglist"

[auth]
secret = "change-me"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.server.port, 3003);
        assert_eq!(config.database.path, ".bloglist");
        assert_eq!(config.auth.secret, "change-me");
        assert_eq!(config.auth.token_ttl_secs, 3600);
        assert!(!config.cors.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bind_addr(), "127.0.0.1:3003");
    }

    #[test]
    fn test_parse_config_with_overrides() {
        let toml = r#"
[server]
bind = "0.0.0.0"
port = 80
static_path = "dist"

[database]
path = "/var/lib/bloglist"

[auth]
secret = "change-me"
token_ttl_secs = 86400

[cors]
enabled = true
allow_origins = ["http://localhost:5173"]

[logging]
level = "debug"
format = "json"
output = "stderr"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.server.static_path.as_deref(), Some("dist"));
        assert_eq!(config.auth.token_ttl_secs, 86400);
        assert!(config.cors.enabled);
        assert_eq!(config.cors.allow_origins, vec!["http://localhost:5173"]);
        // Untouched cors fields keep their defaults
        assert_eq!(config.cors.max_age, 3600);
        assert!(matches!(config.logging.format, LogFormat::Json));
    }
}
