//! Configuration loading and defaults.
//!
//! Configuration is resolved in order of precedence (highest wins):
//!
//! 1. **Environment variables** — `JOKED_TOKEN`, `JOKED_LISTEN`,
//!    `JOKED_UPSTREAM_URL`
//! 2. **Config file** — path via `--config <path>`, or `joked.toml` in CWD
//! 3. **Compiled defaults** — see each field's default value below
//!
//! The TOML file mirrors the struct hierarchy:
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:8787"
//!
//! [auth]
//! token = "your-secret-token"
//!
//! [upstream]
//! url = "https://api.chucknorris.io/jokes/random?category=dev"
//! connect_timeout_ms = 3000
//! request_timeout_ms = 5000
//!
//! [logging]
//! level = "info"
//! ```

use serde::Deserialize;
use std::path::Path;

/// Top-level configuration, deserialized from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (default `0.0.0.0:8787`).
    #[serde(default = "default_listen")]
    pub listen: String,
}

/// Authentication settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Pre-shared secret expected in the `token` request header. Override
    /// with `JOKED_TOKEN`. Defaults to the original deployment's value,
    /// which triggers a startup warning.
    #[serde(default = "default_token")]
    pub token: String,
}

impl AuthConfig {
    /// Whether the token is still the compiled default.
    pub fn is_default_token(&self) -> bool {
        self.token == default_token()
    }
}

/// Upstream joke API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Full URL of the joke endpoint, including any query string.
    /// Override with `JOKED_UPSTREAM_URL`.
    #[serde(default = "default_upstream_url")]
    pub url: String,
    /// TCP connect timeout in milliseconds (default 3 000).
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Total request timeout in milliseconds (default 5 000). The hosting
    /// environment enforces its own hard deadline; this just keeps a hung
    /// upstream from eating the whole invocation.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter level (default `info`). Overridden by `RUST_LOG` env var.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_listen() -> String {
    "0.0.0.0:8787".to_string()
}
fn default_token() -> String {
    "uspaaageyjtccfstuacmuyjqazwollym".to_string()
}
fn default_upstream_url() -> String {
    "https://api.chucknorris.io/jokes/random?category=dev".to_string()
}
fn default_connect_timeout_ms() -> u64 {
    3000
}
fn default_request_timeout_ms() -> u64 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: default_token(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with the precedence chain: env vars > file > defaults.
    ///
    /// If `path` is `Some`, reads that file (panics on failure). Otherwise looks
    /// for `joked.toml` in the current directory, falling back to compiled
    /// defaults.
    pub fn load(path: Option<&str>) -> Self {
        let mut config = if let Some(p) = path {
            let content = std::fs::read_to_string(p)
                .unwrap_or_else(|e| panic!("Failed to read config file {p}: {e}"));
            toml::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse config file {p}: {e}"))
        } else if Path::new("joked.toml").exists() {
            let content = std::fs::read_to_string("joked.toml").expect("Failed to read joked.toml");
            toml::from_str(&content).expect("Failed to parse joked.toml")
        } else {
            Config::default()
        };

        // Env var overrides
        if let Ok(token) = std::env::var("JOKED_TOKEN") {
            config.auth.token = token;
        }
        if let Ok(listen) = std::env::var("JOKED_LISTEN") {
            config.server.listen = listen;
        }
        if let Ok(url) = std::env::var("JOKED_UPSTREAM_URL") {
            config.upstream.url = url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.listen, "0.0.0.0:8787");
        assert_eq!(config.upstream.connect_timeout_ms, 3000);
        assert_eq!(config.upstream.request_timeout_ms, 5000);
        assert_eq!(config.logging.level, "info");
        assert!(config.auth.is_default_token());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [auth]
            token = "s3cret"

            [upstream]
            url = "http://localhost:9999/joke"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.token, "s3cret");
        assert!(!config.auth.is_default_token());
        assert_eq!(config.upstream.url, "http://localhost:9999/joke");
        // Unspecified fields in a present section still default
        assert_eq!(config.upstream.connect_timeout_ms, 3000);
        assert_eq!(config.server.listen, "0.0.0.0:8787");
    }
}
