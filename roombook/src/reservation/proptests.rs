//! Property-based tests for `TimeSlot` overlap semantics.

use super::TimeSlot;
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap()
}

// Slots within one week, at minute resolution, always non-empty.
fn slot_strategy() -> impl Strategy<Value = TimeSlot> {
    (0i64..10_080, 1i64..600).prop_map(|(start, len)| {
        let start = base() + Duration::minutes(start);
        TimeSlot::new(start, start + Duration::minutes(len)).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn overlap_is_symmetric(a in slot_strategy(), b in slot_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn slot_overlaps_itself(a in slot_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    #[test]
    fn abutting_slots_never_overlap(a in slot_strategy(), len in 1i64..600) {
        let next = TimeSlot::new(a.end(), a.end() + Duration::minutes(len)).unwrap();
        prop_assert!(!a.overlaps(&next));
        prop_assert!(!next.overlaps(&a));
    }

    // Overlap iff some minute is covered by both slots.
    #[test]
    fn overlap_matches_shared_minute(a in slot_strategy(), b in slot_strategy()) {
        let latest_start = a.start().max(b.start());
        let shared = a.contains(latest_start) && b.contains(latest_start);
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    #[test]
    fn inverted_or_empty_slots_rejected(start in 0i64..10_080, back in 0i64..600) {
        let start = base() + Duration::minutes(start);
        prop_assert!(TimeSlot::new(start, start - Duration::minutes(back)).is_err());
    }
}
