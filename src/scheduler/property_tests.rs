//! Property-Based Tests for the Due-Check Evaluator
//!
//! Uses proptest to verify the frequency rules over the whole timestamp
//! space rather than hand-picked instants.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use proptest::prelude::*;

use crate::scheduler::Frequency;

// == Strategies ==
/// Generates arbitrary timestamps (days capped at 28 so every month is valid).
fn datetime_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(year, month, day, hour, minute, second)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, second)
                .unwrap()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Minute tasks fire on every tick, whatever the timestamp.
    #[test]
    fn prop_minute_always_due(now in datetime_strategy()) {
        prop_assert!(Frequency::Minute.is_due(now));
    }

    // Hour tasks fire exactly at the top of the hour.
    #[test]
    fn prop_hour_due_iff_minute_zero(now in datetime_strategy()) {
        prop_assert_eq!(Frequency::Hour.is_due(now), now.minute() == 0);
    }

    // Daily tasks fire exactly at midnight.
    #[test]
    fn prop_daily_due_iff_midnight(now in datetime_strategy()) {
        prop_assert_eq!(
            Frequency::Daily.is_due(now),
            now.hour() == 0 && now.minute() == 0
        );
    }

    // Weekly tasks fire exactly at Monday midnight.
    #[test]
    fn prop_weekly_due_iff_monday_midnight(now in datetime_strategy()) {
        prop_assert_eq!(
            Frequency::Weekly.is_due(now),
            now.weekday() == Weekday::Mon && now.hour() == 0 && now.minute() == 0
        );
    }

    // Monthly tasks fire exactly at midnight on the first.
    #[test]
    fn prop_monthly_due_iff_first_midnight(now in datetime_strategy()) {
        prop_assert_eq!(
            Frequency::Monthly.is_due(now),
            now.day() == 1 && now.hour() == 0 && now.minute() == 0
        );
    }

    // A coarser rule firing implies every finer rule also fires: any
    // Weekly or Monthly boundary is a Daily boundary, any Daily boundary
    // is an Hour boundary, and Minute fires always.
    #[test]
    fn prop_coarser_due_implies_finer_due(now in datetime_strategy()) {
        if Frequency::Monthly.is_due(now) || Frequency::Weekly.is_due(now) {
            prop_assert!(Frequency::Daily.is_due(now));
        }
        if Frequency::Daily.is_due(now) {
            prop_assert!(Frequency::Hour.is_due(now));
        }
        if Frequency::Hour.is_due(now) {
            prop_assert!(Frequency::Minute.is_due(now));
        }
    }

    // The rule ignores the seconds field: a tick landing mid-minute is
    // judged the same as one landing on the exact minute.
    #[test]
    fn prop_seconds_do_not_affect_due(now in datetime_strategy()) {
        let on_the_minute = now.with_second(0).unwrap();
        for frequency in [
            Frequency::Minute,
            Frequency::Hour,
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
        ] {
            prop_assert_eq!(frequency.is_due(now), frequency.is_due(on_the_minute));
        }
    }
}
