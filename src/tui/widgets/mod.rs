//! Custom TUI widgets

pub mod input;

pub use input::TextInput;
