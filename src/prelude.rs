//! Packing prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{CatalogError, DEFAULT_PACK_SIZES, PackCatalog, PackSizes},
    engine::{correct, incorrect},
    packer::Packer,
    plan::PackingPlan,
    selection::PackSelection,
};
