//! Expense tracker - terminal expense tracking
//!
//! This library provides the core functionality for a small expense tracker:
//! recording expenses, listing them in the order they were recorded, and
//! summarising spending by category. Expenses live in memory for the
//! lifetime of the process; a session can be seeded from a JSON, YAML or CSV
//! file and exported back out.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, IDs)
//! - `storage`: In-memory expense repository
//! - `services`: Business logic, analytics and import
//! - `export`: JSON, YAML and CSV export
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: CLI command handlers
//! - `tui`: The interactive application shell
//!
//! # Example
//!
//! ```rust,ignore
//! use expenses::services::{ExpenseService, NewExpense};
//! use expenses::models::Money;
//! use expenses::storage::Storage;
//!
//! let storage = Storage::new();
//! let service = ExpenseService::new(&storage);
//! service.create(NewExpense::new("Обед", Money::from_major_minor(500, 0)))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
