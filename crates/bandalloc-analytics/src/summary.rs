//! Per-band aggregation of a record set.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use bandalloc_core::{BandSummary, SaleRecord};

/// Running per-band accumulator, kept at full precision.
struct BandAccumulator {
    unit_count: Decimal,
    turnover_total: Decimal,
    price_sum: Decimal,
    min_unit_price: Decimal,
    max_unit_price: Decimal,
    members: u64,
}

impl BandAccumulator {
    fn new(record: &SaleRecord) -> Self {
        Self {
            unit_count: record.count(),
            turnover_total: record.turnover(),
            price_sum: record.unit_price(),
            min_unit_price: record.unit_price(),
            max_unit_price: record.unit_price(),
            members: 1,
        }
    }

    fn push(&mut self, record: &SaleRecord) {
        self.unit_count += record.count();
        self.turnover_total += record.turnover();
        self.price_sum += record.unit_price();
        self.min_unit_price = self.min_unit_price.min(record.unit_price());
        self.max_unit_price = self.max_unit_price.max(record.unit_price());
        self.members += 1;
    }
}

/// Groups records by price band and aggregates per-band figures.
///
/// Bands with no member records are omitted entirely - there are no
/// zero-rows in the output. The result is sorted ascending by band id.
/// The observed price range and the mean are taken over member unit
/// prices, independent of the band's nominal boundaries.
///
/// An empty record slice yields an empty vector; whether that is
/// acceptable is decided at allocation time.
#[must_use]
pub fn summarize(records: &[SaleRecord]) -> Vec<BandSummary> {
    let mut groups: BTreeMap<u8, BandAccumulator> = BTreeMap::new();

    for record in records {
        let band_id = record.band().id();
        groups
            .entry(band_id)
            .and_modify(|acc| acc.push(record))
            .or_insert_with(|| BandAccumulator::new(record));
    }

    log::debug!("summarized {} records into {} bands", records.len(), groups.len());

    groups
        .into_iter()
        .map(|(band_id, acc)| {
            // The id came from classify, so the lookup cannot miss.
            let band = bandalloc_core::PriceBand::get(band_id)
                .unwrap_or(&bandalloc_core::BANDS[0]);
            BandSummary {
                band_id,
                label: band.label(),
                unit_count: acc.unit_count,
                turnover_total: acc.turnover_total,
                min_unit_price: acc.min_unit_price,
                max_unit_price: acc.max_unit_price,
                mean_unit_price: acc.price_sum / Decimal::from(acc.members),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(turnover: Decimal, count: Decimal) -> SaleRecord {
        SaleRecord::new(turnover, count, None).unwrap()
    }

    #[test]
    fn test_groups_by_band_ascending() {
        let records = vec![
            record(dec!(5000), dec!(2)),  // 2500 -> band 16
            record(dec!(50), dec!(10)),   // 5 -> band 1
            record(dec!(3000), dec!(20)), // 150 -> band 11
        ];
        let summaries = summarize(&records);

        let ids: Vec<u8> = summaries.iter().map(|s| s.band_id).collect();
        assert_eq!(ids, vec![1, 11, 16]);
    }

    #[test]
    fn test_empty_bands_are_omitted() {
        let summaries = summarize(&[record(dec!(100), dec!(4))]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].band_id, 4);
    }

    #[test]
    fn test_aggregates_within_a_band() {
        // Both records land in band 3 (unit prices 25 and 30).
        let records = vec![
            record(dec!(100), dec!(4)),
            record(dec!(300), dec!(10)),
        ];
        let summaries = summarize(&records);

        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.band_id, 3);
        assert_eq!(s.unit_count, dec!(14));
        assert_eq!(s.turnover_total, dec!(400));
        assert_eq!(s.min_unit_price, dec!(25));
        assert_eq!(s.max_unit_price, dec!(30));
        assert_eq!(s.mean_unit_price, dec!(27.5));
    }

    #[test]
    fn test_observed_range_is_independent_of_nominal_bounds() {
        // Band 15 spans (400, 1000] but members only reach 450..620.
        let records = vec![
            record(dec!(450), dec!(1)),
            record(dec!(620), dec!(1)),
        ];
        let summaries = summarize(&records);

        assert_eq!(summaries[0].band_id, 15);
        assert_eq!(summaries[0].min_unit_price, dec!(450));
        assert_eq!(summaries[0].max_unit_price, dec!(620));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(summarize(&[]).is_empty());
    }
}
