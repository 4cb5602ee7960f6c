//! Incorrect Packs Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use packing::selection::PackSelection;

use crate::{errors::ApiError, extensions::*, observability, state::State};

/// Naive pack candidates for an order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IncorrectPacks {
    /// The quantity ordered
    pub ordered: u64,

    /// One single-size candidate per pack size, largest first, excluding the
    /// optimal packs
    pub packs: Vec<BTreeMap<u64, u64>>,
}

/// Incorrect Packs Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IncorrectResponse {
    /// Always `true` for successful responses
    pub status: bool,

    /// The naive candidates
    pub data: IncorrectPacks,
}

/// Incorrect Packs Handler
///
/// Returns deliberately sub-optimal candidates for comparison.
#[endpoint(tags("packs"), summary = "Incorrect Packs")]
pub(crate) async fn handler(
    x: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<IncorrectResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let ordered = x.into_quantity(state.max_quantity)?;

    observability::record_ordered(ordered);

    let packs = state
        .packer
        .incorrect(ordered)
        .into_iter()
        .map(PackSelection::into_inner)
        .collect();

    Ok(Json(IncorrectResponse {
        status: true,
        data: IncorrectPacks { ordered, packs },
    }))
}
