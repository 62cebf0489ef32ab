use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL the category JSON sources hang off.
    pub data_base_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub sources_path: PathBuf,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub fetch_max_retries: u32,
    pub fetch_retry_backoff_base_secs: u64,
    pub geolocation_timeout_secs: u64,
    /// Maximum number of search matches handed to dropdown-style consumers.
    pub search_result_cap: usize,
}
