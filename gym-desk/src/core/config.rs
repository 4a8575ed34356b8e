use std::path::PathBuf;

/// Desk configuration
///
/// # Environment variables
///
/// Every setting can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | GYM_WORK_DIR | . | Directory holding the member files |
/// | REGULAR_DB_NAME | regular_members.txt | Regular member file name |
/// | PREMIUM_DB_NAME | premium_members.txt | Premium member file name |
/// | LOG_LEVEL | info | Log level filter |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// GYM_WORK_DIR=/data/gym LOG_LEVEL=debug cargo run -p gym-desk
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the member files
    pub work_dir: String,
    /// Regular member file name, relative to `work_dir`
    pub regular_db_name: String,
    /// Premium member file name, relative to `work_dir`
    pub premium_db_name: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Log directory; logs go to stderr when unset
    pub log_dir: Option<String>,
    /// Runtime environment: development | production
    pub environment: String,
}

pub const DEFAULT_REGULAR_DB_NAME: &str = "regular_members.txt";
pub const DEFAULT_PREMIUM_DB_NAME: &str = "premium_members.txt";

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("GYM_WORK_DIR").unwrap_or_else(|_| ".".into()),
            regular_db_name: std::env::var("REGULAR_DB_NAME")
                .unwrap_or_else(|_| DEFAULT_REGULAR_DB_NAME.into()),
            premium_db_name: std::env::var("PREMIUM_DB_NAME")
                .unwrap_or_else(|_| DEFAULT_PREMIUM_DB_NAME.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the working directory
    ///
    /// Mostly used by tests.
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    pub fn regular_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.regular_db_name)
    }

    pub fn premium_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.premium_db_name)
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
