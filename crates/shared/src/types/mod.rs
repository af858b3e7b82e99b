//! Common types used across the workspace.

pub mod category;

pub use category::Category;
