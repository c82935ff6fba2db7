// src/config.rs

use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    /// Directory for the rolling log file. `None` disables file logging.
    pub log_dir: Option<String>,
    pub max_connections: u32,
    /// Insert the default trivia categories when the table is empty.
    pub seed_categories: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("BIND_ADDR must be a socket address, e.g. 0.0.0.0:3000");

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = match env::var("LOG_DIR") {
            Ok(dir) if dir.trim().is_empty() => None,
            Ok(dir) => Some(dir),
            Err(_) => Some("logs".to_string()),
        };

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let seed_categories = env::var("SEED_CATEGORIES")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            database_url,
            bind_addr,
            rust_log,
            log_dir,
            max_connections,
            seed_categories,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
