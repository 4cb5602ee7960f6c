//! Utils

use clap::Parser;

use crate::catalog::PackSizes;

/// Arguments for the packing examples
#[derive(Debug, Parser)]
pub struct ExamplePackArgs {
    /// Number of items ordered
    #[clap(short = 'x', long)]
    pub quantity: u64,

    /// Comma separated pack sizes, defaults to the standard catalog
    #[clap(short, long)]
    pub sizes: Option<PackSizes>,
}
