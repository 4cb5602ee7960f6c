//! Extension traits

mod depot;
mod quantity;

pub(crate) use depot::DepotExt as _;
pub(crate) use quantity::QuantityExt as _;
