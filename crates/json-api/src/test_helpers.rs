//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use packing::{catalog::PackSizes, packer::Packer};

use crate::state::State;

pub(crate) const TEST_MAX_QUANTITY: u64 = 1_000_000;

pub(crate) fn state_with_sizes(sizes: PackSizes, max_quantity: u64) -> Arc<State> {
    Arc::new(State::new(Packer::with_sizes(sizes), max_quantity))
}

pub(crate) fn packing_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}
