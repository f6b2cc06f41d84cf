//! For reading application configuration.
//!
//! Values are read from, in increasing priority, the defaults in [`load_config`],
//! an optional `config.toml` and `APP_`-prefixed environment variables
//! (`APP_SERVER__HTTP_PORT=3000`).

use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Greeting configuration.
    pub greeting: GreetingConfig,
    /// Logging configuration.
    pub log: LogConfig,
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Server address.
    pub http_address: String,
    /// Server http port.
    pub http_port: u16,
    /// How long a request may take before it is aborted.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// The maximum number of requests handled at once.
    pub concurrency_limit: usize,
}

/// Greeting configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct GreetingConfig {
    /// Who to greet when no name is given.
    pub default_name: String,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LogConfig {
    /// The log filter, used when `RUST_LOG` is not set.
    pub level: String,
    /// Where to write JSON logs, if anywhere.
    pub directory: Option<String>,
}

/// Retrieve [`Config`] from the default configuration file.
#[tracing::instrument]
pub fn load_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .set_default("server.http_address", "127.0.0.1")?
        .set_default("server.http_port", 8080)?
        .set_default("server.request_timeout", "10s")?
        .set_default("server.concurrency_limit", 500)?
        .set_default("greeting.default_name", "World")?
        .set_default("log.level", "info,tower_http=debug,axum_hello=debug")?
        .add_source(config::File::with_name("config").required(false))
        .add_source(
            config::Environment::with_prefix("app")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::load_config;
    use std::time::Duration;

    #[test]
    fn defaults_are_loaded() {
        let config = load_config().unwrap();
        assert_eq!("World", config.greeting.default_name);
        assert_eq!(Duration::from_secs(10), config.server.request_timeout);
        assert!(config.server.concurrency_limit > 0);
    }

    #[test]
    fn environment_overrides_nested_keys() {
        std::env::set_var("APP_SERVER__HTTP_PORT", "3000");
        let config = load_config();
        std::env::remove_var("APP_SERVER__HTTP_PORT");
        assert_eq!(3000, config.unwrap().server.http_port);
    }
}
