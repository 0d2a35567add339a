//! TUI Dialogs module
//!
//! Modal dialogs drawn on top of the active view.

pub mod confirm;
pub mod expense;
pub mod filter;
pub mod help;
