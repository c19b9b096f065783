// File: crates/chart-core/tests/properties.rs
// Purpose: Property checks for parsing and scale ordering.

use proptest::prelude::*;
use race_chart_core::{build_scales, format_duration, normalize, parse_duration, Layout, RaceRecord};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_parse_is_minutes_and_seconds(m in 0u64..100_000, s in 0u64..1_000) {
        let ms = parse_duration(&format!("{m}:{s}")).unwrap();
        prop_assert_eq!(ms, m * 60_000 + s * 1_000);
        prop_assert_eq!(parse_duration(&format!("{m}:{s}")).unwrap(), ms);
    }

    #[test]
    fn prop_format_parses_back(m in 0u64..1_000, s in 0u64..60) {
        let text = format_duration(m * 60_000 + s * 1_000);
        prop_assert_eq!(&text, &format!("{m}:{s:02}"));
        prop_assert_eq!(parse_duration(&text).unwrap(), m * 60_000 + s * 1_000);
    }

    #[test]
    fn prop_without_colon_is_rejected(s in "[0-9a-z ]{0,8}") {
        prop_assert!(parse_duration(&s).is_err());
    }

    #[test]
    fn prop_faster_is_higher(
        entries in prop::collection::vec((1900i32..2100, 0u64..120, 0u64..60), 2..40),
    ) {
        let records = entries
            .iter()
            .enumerate()
            .map(|(i, (y, m, s))| RaceRecord::new(format!("r{i}"), "X", *y, format!("{m}:{s:02}")))
            .collect::<Vec<_>>();
        let recs = normalize(&records).unwrap();
        let layout = Layout::default();
        let scales = build_scales(&recs, layout).unwrap();
        for a in &recs {
            for b in &recs {
                if a.duration_millis() < b.duration_millis() {
                    prop_assert!(scales.y_px(a.duration_millis()) < scales.y_px(b.duration_millis()));
                }
                if a.year() < b.year() {
                    prop_assert!(scales.x_px(a.year()) < scales.x_px(b.year()));
                }
            }
            let (x, y) = scales.position(a);
            prop_assert!((60.0 - 1e-9..=940.0 + 1e-9).contains(&x));
            prop_assert!((60.0 - 1e-9..=440.0 + 1e-9).contains(&y));
            prop_assert_eq!(scales.position(a), (x, y));
        }
    }
}
