//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};

/// Convertly - convert quantities between units.
#[derive(Parser, Debug)]
#[command(name = "convertly")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a value between two units of a category
    Convert(ConvertArgs),

    /// List supported categories and their formulas
    Categories,

    /// List the units of a category
    Units(UnitsArgs),
}

/// Arguments for `convertly convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Category identifier (weight, length, currency, temperature, area)
    pub category: String,
    /// Source unit identifier
    pub from: String,
    /// Target unit identifier
    pub to: String,
    /// Value to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for `convertly units`.
#[derive(Args, Debug)]
pub struct UnitsArgs {
    /// Category identifier
    pub category: String,
}
