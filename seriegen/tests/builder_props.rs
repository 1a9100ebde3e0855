use chrono::NaiveDate;
use proptest::prelude::*;
use seriegen::{LabelRanges, Seriegen, ValueRange};

proptest! {
    #[test]
    fn builder_configurations_generate_full_tables(
        points in 2usize..=120,
        jitter in 0u32..=10,
        seed in any::<u64>(),
        labels in proptest::collection::btree_set(proptest::char::range('A', 'Z'), 1..6),
    ) {
        let mut ranges = LabelRanges::new();
        for (i, label) in labels.iter().enumerate() {
            let lo = i as f64 * 10.0;
            ranges.insert(*label, ValueRange::new(lo, lo + 5.0).unwrap());
        }

        let generator = Seriegen::builder()
            .anchor(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .points_per_label(points)
            .jitter_days(jitter)
            .seed(seed)
            .build()
            .unwrap();

        let table = generator.generate(&ranges).unwrap();
        prop_assert_eq!(table.len(), points * ranges.len());
        prop_assert_eq!(table.windows().len(), ranges.len());

        // Seeded generators are repeatable call after call.
        prop_assert_eq!(table, generator.generate(&ranges).unwrap());
    }
}
