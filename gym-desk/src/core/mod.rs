//! Core module - configuration
//!
//! - [`Config`] - desk configuration loaded from the environment

pub mod config;

pub use config::Config;
