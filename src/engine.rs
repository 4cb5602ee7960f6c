//! Packing Engine
//!
//! Pure functions computing pack selections for an ordered quantity against a
//! snapshot of pack sizes.
//!
//! [`correct`] fills the order greedily from the largest size down, tops up a
//! leftover remainder with one of the smallest packs, then runs a single
//! reconciliation pass merging groups of smaller packs into the next size up.
//! [`incorrect`] produces one naive single-size candidate per pack size, for
//! comparison against the optimal selection.

use tracing::debug;

use crate::{catalog::PackSizes, selection::PackSelection};

/// Optimal selection for `quantity` using the given sizes.
///
/// Never ships fewer items than ordered. A quantity of zero yields an empty
/// selection.
#[must_use]
pub fn correct(quantity: u64, sizes: &PackSizes) -> PackSelection {
    let mut selection = greedy(quantity, sizes);

    reconcile(&mut selection, sizes);

    debug!(
        quantity,
        packs = selection.total_packs(),
        items = selection.total_items(),
        "computed optimal selection"
    );

    selection
}

/// Naive single-size candidates for `quantity`, largest size first.
///
/// Each size contributes `{size: 1}` when it alone covers the order, otherwise
/// one pack more than the exact division. Candidates equal to the optimal
/// selection are left out.
#[must_use]
pub fn incorrect(quantity: u64, sizes: &PackSizes) -> Vec<PackSelection> {
    let optimal = correct(quantity, sizes);

    let candidates: Vec<_> = sizes
        .iter()
        .map(|&size| naive_candidate(quantity, size))
        .filter(|candidate| *candidate != optimal)
        .collect();

    debug!(
        quantity,
        candidates = candidates.len(),
        "computed incorrect candidates"
    );

    candidates
}

fn naive_candidate(quantity: u64, size: u64) -> PackSelection {
    if size >= quantity {
        PackSelection::single(size, 1)
    } else {
        PackSelection::single(size, (quantity / size).saturating_add(1))
    }
}

fn greedy(quantity: u64, sizes: &PackSizes) -> PackSelection {
    let mut selection = PackSelection::new();
    let mut remaining = quantity;

    for &size in sizes {
        if remaining == 0 {
            break;
        }

        let count = remaining / size;

        if count > 0 {
            selection.add(size, count);
            remaining %= size;
        }
    }

    if remaining > 0 {
        selection.add(sizes.smallest(), 1);
    }

    selection
}

/// Merge groups of smaller packs into the next size up.
///
/// Visits each adjacent pair once, smallest pair first. Merges made for one
/// pair feed into the next pair up, but the pass never repeats.
fn reconcile(selection: &mut PackSelection, sizes: &PackSizes) {
    for (large, small) in sizes.adjacent_pairs().rev() {
        let required = large.div_ceil(small);
        let have = selection.count(small);

        if have < required {
            continue;
        }

        let groups = have / required;

        selection.remove(small, groups * required);
        selection.add(large, groups);
    }
}
