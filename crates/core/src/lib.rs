//! Core conversion logic for Convertly.
//!
//! This crate contains the pure conversion engine with ZERO I/O dependencies.
//! Rate tables, formula dispatch, input parsing and result formatting live
//! here.
//!
//! # Modules
//!
//! - `convert` - Unit conversion engine and category catalog

pub mod convert;
