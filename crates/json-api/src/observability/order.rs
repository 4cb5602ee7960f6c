//! Order fields on the current request span.

use tracing::{Span, field};

use packing::{catalog::PackSizes, selection::PackSelection};

/// Record the validated order quantity.
pub(crate) fn record_ordered(ordered: u64) {
    Span::current().record("ordered", ordered);
}

/// Record how many packs, and items, a selection ships.
pub(crate) fn record_selection(selection: &PackSelection) {
    let span = Span::current();

    span.record("packs", selection.total_packs());
    span.record("shipped", selection.total_items());
}

/// Record the pack sizes a request left active.
pub(crate) fn record_sizes(sizes: &PackSizes) {
    Span::current().record("sizes", field::display(sizes));
}
