//! API Errors

use salvo::{
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use packing::catalog::CatalogError;

/// Errors returned to API clients.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request was rejected before reaching the packing engine.
    #[error("{0}")]
    BadRequest(String),

    /// The server is misconfigured; details are logged where it happens.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Always `false` for errors
    pub status: bool,

    /// Reason the request failed
    pub message: String,
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(ErrorResponse {
            status: false,
            message: self.to_string(),
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Bad Request")
                .add_content("application/json", ErrorResponse::to_schema(components)),
        );

        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal Server Error")
                .add_content("application/json", ErrorResponse::to_schema(components)),
        );
    }
}
