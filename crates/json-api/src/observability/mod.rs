//! Structured logging for the packing API.
//!
//! Every request runs inside a `packing.request` span carrying its request ID.
//! Handlers fill in the order fields (`ordered`, `packs`, `shipped`, `sizes`)
//! so the completion event shows what was asked for and what was packed.

mod logging;
mod order;
mod request_id;
mod request_log;

pub(crate) use logging::init;
pub(crate) use order::{record_ordered, record_selection, record_sizes};
pub(crate) use request_log::RequestLogger;
