//! Shared types, errors, and configuration for Convertly.
//!
//! This crate provides common pieces used across the workspace:
//! - The `Category` enumeration of convertible unit groups
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogConfig, LogFormat, OutputConfig};
pub use error::{AppError, AppResult};
pub use types::Category;
