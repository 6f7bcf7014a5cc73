//! Property tests for pipeline invariants.
//!
//! 1. Merge keeps every row and sorts by date
//! 2. Full-span filter is the identity
//! 3. Filter output lies inside the bounds and is contiguous
//! 4. Series metrics align with their input length and warmup

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use stocklens_core::data::merge_sources;
use stocklens_core::metrics::{daily_return_percent, moving_average, volatility};
use stocklens_core::{filter_window, PriceRecord, TimeSeriesPipeline};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 6, 1).unwrap()
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_record() -> impl Strategy<Value = PriceRecord> {
    (0..400i64, 1.0..900.0_f64, 0u64..50_000_000).prop_map(|(offset, close, volume)| {
        PriceRecord {
            date: base() + Duration::days(offset),
            open: close,
            high: close * 1.02,
            low: close * 0.98,
            close,
            volume,
        }
    })
}

fn arb_source() -> impl Strategy<Value = Vec<PriceRecord>> {
    prop::collection::vec(arb_record(), 0..60)
}

proptest! {
    #[test]
    fn merge_keeps_all_rows_sorted(a in arb_source(), b in arb_source()) {
        let merged = merge_sources(vec![a.clone(), b.clone()]);
        prop_assert_eq!(merged.len(), a.len() + b.len());
        for pair in merged.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn full_span_filter_is_identity(a in arb_source(), b in arb_source()) {
        let pipeline = TimeSeriesPipeline::from_sources(vec![a, b]);
        if let Some((start, end)) = pipeline.span() {
            prop_assert_eq!(pipeline.window(start, end), pipeline.records());
        } else {
            prop_assert!(pipeline.is_empty());
        }
    }

    #[test]
    fn filter_respects_bounds(
        a in arb_source(),
        start in 0..400i64,
        len in -20..200i64,
    ) {
        let merged = merge_sources(vec![a]);
        let start = base() + Duration::days(start);
        let end = start + Duration::days(len);
        let window = filter_window(&merged, start, end);

        let expected = merged.iter().filter(|r| r.date >= start && r.date <= end).count();
        prop_assert_eq!(window.len(), expected);
        for r in window {
            prop_assert!(r.date >= start && r.date <= end);
        }
    }

    #[test]
    fn metrics_align_with_input(a in arb_source()) {
        let records = merge_sources(vec![a]);
        let n = records.len();

        let ma = moving_average(&records, 20);
        let ret = daily_return_percent(&records);
        let vol = volatility(&records, 20);
        prop_assert_eq!(ma.len(), n);
        prop_assert_eq!(ret.len(), n);
        prop_assert_eq!(vol.len(), n);

        for i in 0..n {
            prop_assert_eq!(ma[i].is_some(), i >= 19);
            prop_assert_eq!(ret[i].is_some(), i >= 1);
            prop_assert_eq!(vol[i].is_some(), i >= 20);
        }
    }

    #[test]
    fn render_twice_is_identical(a in arb_source(), b in arb_source()) {
        let pipeline = TimeSeriesPipeline::from_sources(vec![a, b]);
        let view = pipeline.default_view();
        prop_assert_eq!(pipeline.render(&view), pipeline.render(&view));
    }
}
