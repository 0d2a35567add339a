//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings loading and saving

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
