//! Integration tests for optimal pack selection

use testresult::TestResult;

use packing::prelude::*;

fn assert_correct(packer: &Packer, ordered: u64, expected: &[(u64, u64)]) {
    let expected = expected
        .iter()
        .fold(PackSelection::new(), |mut selection, &(size, count)| {
            selection.add(size, count);
            selection
        });

    assert_eq!(packer.correct(ordered), expected, "correct({ordered})");
}

#[test]
fn default_catalog_fixtures() {
    let packer = Packer::default();

    let cases: &[(u64, &[(u64, u64)])] = &[
        (1, &[(250, 1)]),
        (23, &[(250, 1)]),
        (31, &[(250, 1)]),
        (53, &[(250, 1)]),
        (250, &[(250, 1)]),
        (500, &[(500, 1)]),
        (750, &[(500, 1), (250, 1)]),
        (1000, &[(1000, 1)]),
        (12_001, &[(5000, 2), (2000, 1), (250, 1)]),
        (4999, &[(2000, 2), (1000, 1)]),
        (5001, &[(5000, 1), (250, 1)]),
        (9999, &[(5000, 1), (2000, 2), (1000, 1)]),
        (10_000, &[(5000, 2)]),
        (500_000, &[(5000, 100)]),
        (12_500, &[(5000, 2), (2000, 1), (500, 1)]),
        (15_000, &[(5000, 3)]),
        (2250, &[(2000, 1), (250, 1)]),
        (3750, &[(2000, 1), (1000, 1), (500, 1), (250, 1)]),
    ];

    for &(ordered, expected) in cases {
        assert_correct(&packer, ordered, expected);
    }
}

#[test]
fn zero_quantity_yields_empty_selection() {
    let selection = Packer::default().correct(0);

    assert!(selection.is_empty());
    assert_eq!(selection.total_items(), 0);
}

#[test]
fn never_ships_fewer_than_ordered() {
    let packer = Packer::default();

    for ordered in (0..=20_000).chain((990_000..=1_000_000).step_by(97)) {
        let selection = packer.correct(ordered);

        assert!(
            selection.covers(ordered),
            "correct({ordered}) = {selection:?} ships too few items"
        );
    }
}

#[test]
fn selections_never_hold_zero_counts() {
    let packer = Packer::default();

    for ordered in 0..=6_000 {
        assert!(
            packer.correct(ordered).iter().all(|(_, count)| count > 0),
            "correct({ordered}) holds a zero count"
        );
    }
}

#[test]
fn maximum_quantity_completes() {
    let selection = Packer::default().correct(1_000_000);

    assert_eq!(selection, PackSelection::single(5000, 200));
}

#[test]
fn single_size_catalog_uses_ceiling_division() -> TestResult {
    let packer = Packer::default();

    packer.set_sizes([300])?;

    for ordered in [1, 299, 300, 301, 599, 600, 601, 1_000_000] {
        assert_eq!(
            packer.correct(ordered),
            PackSelection::single(300, ordered.div_ceil(300)),
            "correct({ordered})"
        );
    }

    Ok(())
}

#[test]
fn exact_multiple_yields_single_entry() {
    let packer = Packer::default();

    assert_eq!(packer.correct(2000), PackSelection::single(2000, 1));
    assert_eq!(packer.correct(25_000), PackSelection::single(5000, 5));
}

#[test]
fn out_of_order_replacement_is_sorted_before_use() -> TestResult {
    let packer = Packer::default();

    packer.set_sizes([250, 500, 1000, 2000, 5000])?;

    assert_correct(&packer, 12_001, &[(5000, 2), (2000, 1), (250, 1)]);
    assert_eq!(packer.sizes().as_slice(), &DEFAULT_PACK_SIZES);

    Ok(())
}

#[test]
fn custom_catalog_with_coprime_sizes() -> TestResult {
    let packer = Packer::default();

    packer.set_sizes([23, 31, 53])?;

    assert_correct(&packer, 263, &[(53, 4), (31, 1), (23, 1)]);
    assert_correct(&packer, 53, &[(53, 1)]);
    assert_correct(&packer, 1, &[(23, 1)]);

    Ok(())
}
