//! Packer

use std::sync::Arc;

use crate::{
    catalog::{CatalogError, PackCatalog, PackSizes},
    engine,
    plan::PackingPlan,
    selection::PackSelection,
};

/// Packing engine bound to a shared pack catalog.
///
/// Every operation snapshots the catalog once before computing, so a
/// concurrent replacement never mixes two catalogs in one result.
#[derive(Debug, Clone, Default)]
pub struct Packer {
    catalog: Arc<PackCatalog>,
}

impl Packer {
    /// Create a packer over a shared catalog.
    #[must_use]
    pub fn new(catalog: Arc<PackCatalog>) -> Self {
        Self { catalog }
    }

    /// Create a packer over its own catalog holding `sizes`.
    #[must_use]
    pub fn with_sizes(sizes: PackSizes) -> Self {
        Self::new(Arc::new(PackCatalog::new(sizes)))
    }

    /// Snapshot of the active pack sizes, largest first.
    #[must_use]
    pub fn sizes(&self) -> Arc<PackSizes> {
        self.catalog.current()
    }

    /// Replace the active pack sizes.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the sizes do not form a valid catalog; the
    /// previous sizes stay active.
    pub fn set_sizes(
        &self,
        sizes: impl IntoIterator<Item = u64>,
    ) -> Result<Arc<PackSizes>, CatalogError> {
        self.catalog.replace(sizes)
    }

    /// Optimal selection for `quantity`.
    #[must_use]
    pub fn correct(&self, quantity: u64) -> PackSelection {
        engine::correct(quantity, &self.catalog.current())
    }

    /// Naive candidates for `quantity` that differ from the optimal selection.
    #[must_use]
    pub fn incorrect(&self, quantity: u64) -> Vec<PackSelection> {
        engine::incorrect(quantity, &self.catalog.current())
    }

    /// Optimal selection and incorrect candidates from a single snapshot.
    #[must_use]
    pub fn plan(&self, quantity: u64) -> PackingPlan {
        let sizes = self.catalog.current();

        PackingPlan::new(
            quantity,
            engine::correct(quantity, &sizes),
            engine::incorrect(quantity, &sizes),
            sizes,
        )
    }
}
