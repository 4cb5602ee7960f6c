//! Packing Config

use clap::Args;
use packing::catalog::PackSizes;

/// Pack catalog and order limit settings.
#[derive(Debug, Args)]
pub struct PackingConfig {
    /// Largest quantity accepted by the packing endpoints
    #[arg(long, env = "MAX_QUANTITY", default_value_t = 1_000_000_u64)]
    pub max_quantity: u64,

    /// Comma separated pack sizes active at startup
    #[arg(long, env = "PACK_SIZES", default_value = "5000,2000,1000,500,250")]
    pub pack_sizes: PackSizes,
}
