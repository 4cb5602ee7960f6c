//! Request logging middleware.

use std::time::{Duration, Instant};

use salvo::{http::StatusCode, prelude::*};
use tracing::{Instrument as _, error, field::Empty, info, warn};

use super::request_id::RequestId;

/// Wraps each request in a `packing.request` span and logs its completion.
///
/// Client errors are logged at `warn`, server errors at `error`, and requests
/// slower than the threshold get an extra `warn`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogger {
    slow_request_threshold: Duration,
}

impl RequestLogger {
    pub(crate) fn new(slow_request_threshold: Duration) -> Self {
        Self {
            slow_request_threshold,
        }
    }
}

#[handler]
impl RequestLogger {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();
        let request_id = RequestId::from_request(req);

        request_id.write_header(res);

        let span = tracing::info_span!(
            parent: None,
            "packing.request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.uri().path(),
            ordered = Empty,
            packs = Empty,
            shipped = Empty,
            sizes = Empty,
            status = Empty,
            duration_ms = Empty,
        );

        depot.inject(request_id);

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let status = res.status_code.unwrap_or(StatusCode::OK);

        span.record("status", status.as_u16());
        span.record("duration_ms", elapsed.as_millis());

        span.in_scope(|| {
            if status.is_server_error() {
                error!("request failed");
            } else if status.is_client_error() {
                warn!("request rejected");
            } else {
                info!("request completed");
            }

            if elapsed > self.slow_request_threshold {
                warn!(
                    threshold_ms = self.slow_request_threshold.as_millis(),
                    "slow request"
                );
            }
        });
    }
}
