//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::Depot;
use tracing::error;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to API errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("{} missing from depot", type_name::<T>());

            ApiError::Internal
        })
    }
}
