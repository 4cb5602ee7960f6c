//! State

use std::sync::Arc;

use packing::packer::Packer;

use crate::config::packing::PackingConfig;

#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) packer: Packer,
    pub(crate) max_quantity: u64,
}

impl State {
    #[must_use]
    pub(crate) fn new(packer: Packer, max_quantity: u64) -> Self {
        Self {
            packer,
            max_quantity,
        }
    }

    #[must_use]
    pub(crate) fn from_config(config: &PackingConfig) -> Arc<Self> {
        Arc::new(Self::new(
            Packer::with_sizes(config.pack_sizes.clone()),
            config.max_quantity,
        ))
    }
}
