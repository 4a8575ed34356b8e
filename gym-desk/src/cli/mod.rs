//! Command line interface for gym-desk
//!
//! - [`Cli`] - process arguments (with environment fallbacks)
//! - [`Shell`] - interactive command loop over the roster

mod commands;
mod shell;

pub use commands::{ShellCommand, ShellLine};
pub use shell::{Flow, Shell};

use clap::Parser;

use crate::core::Config;

#[derive(Parser, Debug)]
#[command(name = "gym-desk")]
#[command(about = "Front-desk member management for a gym", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the member files
    #[arg(short, long, env = "GYM_WORK_DIR")]
    pub work_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Write logs to daily rolling files in this directory
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<String>,

    /// Emit logs as JSON (always on in production)
    #[arg(long)]
    pub json_logs: bool,

    /// Start with an empty roster instead of loading the member files
    #[arg(long)]
    pub no_load: bool,
}

impl Cli {
    /// Apply command line overrides on top of the environment config
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.work_dir {
            config.work_dir = dir.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
    }

    /// Whether logs are written as JSON
    pub fn json_logs(&self, config: &Config) -> bool {
        self.json_logs || config.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["gym-desk", "--work-dir", "/tmp/gym", "--log-level", "debug"]);
        let mut config = Config::with_work_dir(".");
        cli.apply(&mut config);
        assert_eq!(config.work_dir, "/tmp/gym");
        assert_eq!(config.log_level, "debug");
        assert!(!cli.no_load);
    }

    #[test]
    fn test_json_logs_in_production() {
        let cli = Cli::parse_from(["gym-desk"]);
        let mut config = Config::with_work_dir(".");
        config.environment = "development".into();
        assert!(!cli.json_logs(&config));

        config.environment = "production".into();
        assert!(cli.json_logs(&config));

        let cli = Cli::parse_from(["gym-desk", "--json-logs"]);
        config.environment = "development".into();
        assert!(cli.json_logs(&config));
    }
}
