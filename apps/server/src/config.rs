use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Directory holding the SQLite database file.
    pub data_dir: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub environment: String,
    pub stock_api_key: String,
    /// Rate limiter bucket size; 0 disables rate limiting entirely.
    pub rate_limit_burst: u32,
    /// Interval at which one rate limiter token is replenished.
    pub rate_limit_replenish_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid SF_LISTEN_ADDR");
        let data_dir = std::env::var("SF_DATA_DIR").unwrap_or_else(|_| "./data".into());
        let cors_allow = std::env::var("SF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let environment = std::env::var("SF_ENV").unwrap_or_else(|_| "development".into());
        let stock_api_key = std::env::var("SF_STOCK_API_KEY").unwrap_or_default();
        // Bursts of 100 with one token back every 600ms, roughly 100
        // requests per minute per client.
        let rate_limit_burst: u32 = std::env::var("SF_RATE_LIMIT_BURST")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .unwrap_or(100);
        let rate_limit_replenish_ms: u64 = std::env::var("SF_RATE_LIMIT_REPLENISH_MS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .unwrap_or(600);
        Self {
            listen_addr,
            data_dir,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            environment,
            stock_api_key,
            rate_limit_burst,
            rate_limit_replenish_ms,
        }
    }
}
