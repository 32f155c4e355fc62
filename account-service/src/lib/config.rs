use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Process-wide signing secret, the trust root for every issued token.
    /// Has no default on purpose: a missing secret must abort startup.
    pub secret: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables, unprefixed, with `__` as the level
    ///    separator (JWT__SECRET, SERVER__PORT, DATABASE__URL)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// `jwt.secret` is intentionally absent from the default file, so a
    /// deployment without JWT__SECRET fails here instead of serving tokens
    /// signed with a known value.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    // Process environment is shared across the test binary; serialize the
    // tests that mutate it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_load_reads_secret_from_environment() {
        let _guard = ENV_LOCK.lock().unwrap();

        env::set_var("JWT__SECRET", "env_supplied_secret_32_bytes_long!");
        env::set_var("SERVER__PORT", "4555");
        env::set_var("DATABASE__URL", "postgresql://env-host:5432/accounts");

        let config = Config::load().expect("Failed to load config from environment");

        assert_eq!(config.jwt.secret, "env_supplied_secret_32_bytes_long!");
        assert_eq!(config.server.port, 4555);
        assert_eq!(config.database.url, "postgresql://env-host:5432/accounts");

        env::remove_var("JWT__SECRET");
        env::remove_var("SERVER__PORT");
        env::remove_var("DATABASE__URL");
    }

    #[test]
    fn test_load_without_secret_is_a_startup_error() {
        let _guard = ENV_LOCK.lock().unwrap();

        // The default file carries no jwt section, so with the variable
        // unset there is no secret anywhere
        env::remove_var("JWT__SECRET");

        assert!(Config::load().is_err());
    }
}
