//! Partition properties of the band catalog.
//!
//! The classifier is a descending cascade of strict lower-bound
//! comparisons. These tests cross-check it against an independent binary
//! search over the sorted boundary table across a dense price sweep, and
//! pin down the exclusive/inclusive tie behavior at every boundary.

use bandalloc_core::{PriceBand, BANDS};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Independent reclassification: binary search over ascending exclusive
/// lower bounds. The matching band is the highest one whose lower bound
/// the price strictly exceeds.
fn classify_by_binary_search(price: Decimal) -> u8 {
    let lowers: Vec<Decimal> = BANDS.iter().map(|b| b.lower()).collect();
    let idx = lowers.partition_point(|&lower| price > lower);
    if idx == 0 {
        BANDS[0].id()
    } else {
        BANDS[idx - 1].id()
    }
}

#[test]
fn cascade_agrees_with_binary_search_on_dense_sweep() {
    // 0.00 to 1200.00 in 1-haléř steps, plus a tail into the open band.
    let step = dec!(0.01);
    let mut price = Decimal::ZERO;
    while price <= dec!(1200) {
        let cascade = PriceBand::classify(price).id();
        let bsearch = classify_by_binary_search(price);
        assert_eq!(cascade, bsearch, "divergence at price {price}");
        price += step;
    }

    for price in [dec!(3500), dec!(99999.99), dec!(1000000)] {
        assert_eq!(PriceBand::classify(price).id(), 16);
        assert_eq!(classify_by_binary_search(price), 16);
    }
}

#[test]
fn every_nonnegative_price_maps_to_exactly_one_band() {
    let mut price = Decimal::ZERO;
    while price <= dec!(1100) {
        let matching = BANDS
            .iter()
            .filter(|band| band.contains(price))
            .count();
        assert_eq!(matching, 1, "price {price} matched {matching} bands");
        price += dec!(0.25);
    }
}

#[test]
fn boundary_prices_fall_into_the_lower_band() {
    // Every interior boundary is inclusive on the lower band's upper edge.
    for pair in BANDS.windows(2) {
        let boundary = pair[0].upper().expect("interior band has an upper bound");
        assert_eq!(
            PriceBand::classify(boundary).id(),
            pair[0].id(),
            "price {boundary} should stay in band {}",
            pair[0].id()
        );
        assert_eq!(
            PriceBand::classify(boundary + dec!(0.01)).id(),
            pair[1].id(),
            "price just above {boundary} should advance to band {}",
            pair[1].id()
        );
    }
}

#[test]
fn negative_prices_fall_into_band_one() {
    for price in [dec!(-0.01), dec!(-10), dec!(-250)] {
        assert_eq!(PriceBand::classify(price).id(), 1);
    }
}
