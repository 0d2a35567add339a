//! Terminal User Interface module
//!
//! The application shell: a tab header, the expenses list or analytics view,
//! a status bar, and dialogs for adding, filtering and deleting expenses.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
