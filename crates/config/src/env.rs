use financeiro_common::error::{FinanceiroError, FinanceiroResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Directory holding the built web client. When unset, no static
    /// assets are served.
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads the vars.
    ///
    /// `DATABASE_URL` defaults to an in-memory database, so a bare
    /// `cargo run` works without any environment set up.
    pub fn from_env() -> FinanceiroResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            database_url: get_var_or("DATABASE_URL", "sqlite::memory:"),
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "3001")
                .parse()
                .map_err(|e| FinanceiroError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            static_dir: env::var("STATIC_DIR").ok().map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_defaults_to_in_memory_database() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::remove_var("DATABASE_URL");
        env::remove_var("PORT");
        env::remove_var("STATIC_DIR");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.static_dir.is_none());
    }

    #[test]
    fn config_reads_overrides_from_env() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("DATABASE_URL", "sqlite://data.db");
        env::set_var("PORT", "4000");
        env::set_var("STATIC_DIR", "../client/dist");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.database_url, "sqlite://data.db");
        assert_eq!(cfg.port, 4000);
        assert_eq!(cfg.static_dir, Some(PathBuf::from("../client/dist")));

        env::remove_var("DATABASE_URL");
        env::remove_var("PORT");
        env::remove_var("STATIC_DIR");
    }

    #[test]
    fn config_rejects_a_non_numeric_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("PORT", "not-a-port");
        let result = AppConfig::from_env();
        assert!(result.is_err());
        env::remove_var("PORT");
    }

    #[test]
    fn bind_addr_formats_correctly() {
        let cfg = AppConfig {
            database_url: String::new(),
            host: "127.0.0.1".to_owned(),
            port: 3001,
            log_level: "debug".to_owned(),
            static_dir: None,
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3001");
    }
}
