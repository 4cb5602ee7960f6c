//! Set Pack Sizes Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError,
    extensions::*,
    observability,
    sizes::get::{SizesData, SizesResponse},
    state::State,
};

/// Set Pack Sizes Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetSizesRequest {
    /// New pack sizes, in any order
    #[serde(rename = "Sizes", alias = "sizes")]
    pub sizes: Vec<i64>,
}

impl SetSizesRequest {
    fn parse(payload: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(payload)
            .map_err(|_err| ApiError::bad_request("Invalid sizes format"))
    }

    fn into_sizes(self) -> Result<Vec<u64>, ApiError> {
        self.sizes
            .into_iter()
            .map(|size| {
                u64::try_from(size).map_err(|_err| {
                    ApiError::bad_request(format!("pack size {size} must be greater than zero"))
                })
            })
            .collect()
    }
}

/// Set Pack Sizes Handler
///
/// Replaces the active pack sizes. Invalid sizes leave the previous sizes in
/// place.
#[endpoint(tags("sizes"), summary = "Set Pack Sizes", request_body = SetSizesRequest)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SizesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let payload = req
        .payload()
        .await
        .map_err(|_err| ApiError::bad_request("Invalid sizes format"))?;

    let sizes = SetSizesRequest::parse(payload)?.into_sizes()?;

    let active = state.packer.set_sizes(sizes)?;

    observability::record_sizes(&active);

    Ok(Json(SizesResponse {
        status: true,
        data: SizesData {
            sizes: active.to_vec(),
        },
    }))
}
