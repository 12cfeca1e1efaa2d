//! Shared configuration, errors, and display types for Ledgerview.
//!
//! This crate provides what the core and the binary both need:
//! - Application-wide error types
//! - Configuration management
//! - Amount display formatting

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::AmountFormat;
