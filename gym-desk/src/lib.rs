//! Gym Desk - front-desk member management
//!
//! # Overview
//!
//! Keeps an in-memory roster of regular and premium gym members, applies
//! membership rules (attendance, loyalty points, plans, payments, discounts)
//! and persists the roster as two plain-text tables.
//!
//! # Module layout
//!
//! ```text
//! gym-desk/src/
//! ├── core/          # Configuration
//! ├── roster/        # Member collection, by-id operations, dues
//! ├── pricing/       # Loyalty discount rules
//! ├── storage/       # Pipe-table file format, two-file store
//! ├── cli/           # Process arguments and the interactive shell
//! ├── money.rs       # Decimal rounding helpers
//! └── utils/         # Logging, input validation
//! ```

pub mod cli;
pub mod core;
pub mod money;
pub mod pricing;
pub mod roster;
pub mod storage;
pub mod utils;

pub use cli::{Cli, Shell};
pub use core::Config;
pub use roster::{DuesReceipt, PaymentMethod, Roster};
pub use storage::{LoadReport, MemberStore, SaveReport};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Prepare the process: directories and logging
///
/// Call after `.env` has been read so the config sees its values.
pub fn setup_environment(config: &Config, json_logs: bool) -> AppResult<()> {
    std::fs::create_dir_all(&config.work_dir).map_err(|e| {
        AppError::storage_write(std::path::Path::new(&config.work_dir), &e)
    })?;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| AppError::storage_write(std::path::Path::new(dir), &e))?;
    }

    init_logger_with_file(Some(&config.log_level), json_logs, config.log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______                 ____            __
  / ____/_  ______ ___   / __ \___  _____/ /__
 / / __/ / / / __ `__ \ / / / / _ \/ ___/ //_/
/ /_/ / /_/ / / / / / // /_/ /  __(__  ) ,<
\____/\__, /_/ /_/ /_//_____/\___/____/_/|_|
     /____/
    "#
    );
}
