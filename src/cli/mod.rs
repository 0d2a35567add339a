//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod expense;
pub mod report;

pub use export::{handle_export_command, ExportFormat};
pub use expense::{handle_categories_command, handle_list_command, handle_recent_command, ListArgs};
pub use report::{handle_summary_command, SummaryArgs};
