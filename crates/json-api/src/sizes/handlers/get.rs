//! Get Pack Sizes Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

/// Active pack sizes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SizesData {
    /// Pack sizes, largest first
    pub sizes: Vec<u64>,
}

/// Pack Sizes Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SizesResponse {
    /// Always `true` for successful responses
    pub status: bool,

    /// The active pack sizes
    pub data: SizesData,
}

/// Get Pack Sizes Handler
///
/// Returns the pack sizes currently used to fulfil orders.
#[endpoint(tags("sizes"), summary = "Get Pack Sizes")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SizesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(SizesResponse {
        status: true,
        data: SizesData {
            sizes: state.packer.sizes().to_vec(),
        },
    }))
}
