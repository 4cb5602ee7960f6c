//! Correct Packs Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, observability, state::State};

/// Optimal packs for an order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CorrectPacks {
    /// The quantity ordered
    pub ordered: u64,

    /// Number of packs keyed by pack size
    pub packs: BTreeMap<u64, u64>,
}

/// Correct Packs Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CorrectResponse {
    /// Always `true` for successful responses
    pub status: bool,

    /// The optimal packs
    pub data: CorrectPacks,
}

/// Correct Packs Handler
///
/// Returns the fewest packs, then fewest items, that fulfil the order.
#[endpoint(tags("packs"), summary = "Optimal Packs")]
pub(crate) async fn handler(
    x: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CorrectResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let ordered = x.into_quantity(state.max_quantity)?;

    observability::record_ordered(ordered);

    let packs = state.packer.correct(ordered);

    observability::record_selection(&packs);

    Ok(Json(CorrectResponse {
        status: true,
        data: CorrectPacks {
            ordered,
            packs: packs.into_inner(),
        },
    }))
}
