//! Liveness probe

use salvo::{oapi::ToSchema, prelude::*};
use serde::Serialize;

/// Liveness response, always `{"status": "ok"}` while the process serves requests
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct HealthResponse {
    status: String,
}

#[endpoint(tags("health"), summary = "Liveness probe")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
