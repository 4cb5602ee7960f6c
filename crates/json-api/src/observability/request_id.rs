//! Request IDs

use std::fmt;

use salvo::{Request, Response, http::header::HeaderValue};
use tracing::warn;
use uuid::Uuid;

/// Correlates a request with its log lines and its response.
///
/// Taken from the `x-request-id` header when the caller sent a non-blank one,
/// otherwise a fresh v7 UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestId(String);

impl RequestId {
    pub(super) const HEADER: &'static str = "x-request-id";

    pub(super) fn from_request(req: &Request) -> Self {
        req.header::<String>(Self::HEADER)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map_or_else(Self::generate, Self)
    }

    fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Echo the ID back on the response.
    pub(super) fn write_header(&self, res: &mut Response) {
        match HeaderValue::from_str(&self.0) {
            Ok(value) => {
                res.headers_mut().insert(Self::HEADER, value);
            }
            Err(source) => warn!(request_id = %self, "request id is not a valid header: {source}"),
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
