//! Table-driven recurrence cases against a fixed clock.
//!
//! Expected instants are written as local panel-timezone strings
//! (`America/Sao_Paulo`, constant -03:00 around the pinned dates).

use std::collections::BTreeSet;

use chrono::{NaiveDateTime, TimeZone};
use painel_engine::clock::{FixedClock, PANEL_TIMEZONE};
use painel_engine::recurrence::{ScheduleDescriptor, TimeOfDay, next_occurrences};

struct RecurrenceCase {
    name: &'static str,
    descriptor: ScheduleDescriptor,
    count: usize,
    /// Local panel time, "%Y-%m-%d %H:%M".
    now: &'static str,
    expected: &'static [&'static str],
}

fn weekdays(indices: &[u8]) -> BTreeSet<u8> {
    indices.iter().copied().collect()
}

fn local(text: &str) -> FixedClock {
    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").expect("valid case time");
    FixedClock(
        PANEL_TIMEZONE
            .from_local_datetime(&naive)
            .single()
            .expect("unambiguous case time"),
    )
}

fn cases() -> Vec<RecurrenceCase> {
    // 2026-03-10 is a Tuesday.
    vec![
        RecurrenceCase {
            name: "daily_time_still_ahead_today",
            descriptor: ScheduleDescriptor::daily(TimeOfDay::new(15, 0)),
            count: 3,
            now: "2026-03-10 12:00",
            expected: &["2026-03-10 15:00", "2026-03-11 15:00", "2026-03-12 15:00"],
        },
        RecurrenceCase {
            name: "daily_time_already_passed_today",
            descriptor: ScheduleDescriptor::daily(TimeOfDay::new(9, 0)),
            count: 3,
            now: "2026-03-10 12:00",
            expected: &["2026-03-11 09:00", "2026-03-12 09:00", "2026-03-13 09:00"],
        },
        RecurrenceCase {
            name: "daily_exact_instant_is_not_future",
            descriptor: ScheduleDescriptor::daily(TimeOfDay::new(12, 0)),
            count: 2,
            now: "2026-03-10 12:00",
            expected: &["2026-03-11 12:00", "2026-03-12 12:00"],
        },
        RecurrenceCase {
            name: "weekly_mon_wed_fri_from_tuesday",
            descriptor: ScheduleDescriptor::weekly(weekdays(&[1, 3, 5]), TimeOfDay::new(10, 0)),
            count: 4,
            now: "2026-03-10 12:00",
            expected: &[
                "2026-03-11 10:00",
                "2026-03-13 10:00",
                "2026-03-16 10:00",
                "2026-03-18 10:00",
            ],
        },
        RecurrenceCase {
            name: "weekly_same_weekday_later_today",
            descriptor: ScheduleDescriptor::weekly(weekdays(&[2]), TimeOfDay::new(18, 0)),
            count: 3,
            now: "2026-03-10 12:00",
            expected: &["2026-03-10 18:00", "2026-03-17 18:00", "2026-03-24 18:00"],
        },
        RecurrenceCase {
            name: "weekly_crosses_batch_boundary",
            descriptor: ScheduleDescriptor::weekly(weekdays(&[0]), TimeOfDay::new(8, 0)),
            count: 3,
            now: "2026-03-10 12:00",
            expected: &["2026-03-15 08:00", "2026-03-22 08:00", "2026-03-29 08:00"],
        },
        RecurrenceCase {
            name: "weekly_empty_set_short_circuits",
            descriptor: ScheduleDescriptor::weekly(weekdays(&[]), TimeOfDay::new(9, 0)),
            count: 5,
            now: "2026-03-10 12:00",
            expected: &[],
        },
        RecurrenceCase {
            name: "monthly_day_still_ahead_this_month",
            descriptor: ScheduleDescriptor::monthly(15, TimeOfDay::new(9, 0)),
            count: 3,
            now: "2026-03-10 12:00",
            expected: &["2026-03-15 09:00", "2026-04-15 09:00", "2026-05-15 09:00"],
        },
        RecurrenceCase {
            name: "monthly_day_already_passed_this_month",
            descriptor: ScheduleDescriptor::monthly(5, TimeOfDay::new(9, 0)),
            count: 3,
            now: "2026-03-10 12:00",
            expected: &["2026-04-05 09:00", "2026-05-05 09:00", "2026-06-05 09:00"],
        },
        RecurrenceCase {
            name: "monthly_day_31_clamps_to_28_through_february",
            descriptor: ScheduleDescriptor::monthly(31, TimeOfDay::new(9, 0)),
            count: 4,
            now: "2026-12-01 12:00",
            expected: &[
                "2026-12-28 09:00",
                "2027-01-28 09:00",
                "2027-02-28 09:00",
                "2027-03-28 09:00",
            ],
        },
        RecurrenceCase {
            name: "custom_rule_yields_nothing",
            descriptor: ScheduleDescriptor::custom("RRULE:FREQ=DAILY"),
            count: 10,
            now: "2026-03-10 12:00",
            expected: &[],
        },
    ]
}

#[test_log::test]
fn recurrence_case_table() {
    for case in cases() {
        let clock = local(case.now);
        let occurrences = next_occurrences(&case.descriptor, case.count, &clock);
        let formatted: Vec<String> = occurrences
            .iter()
            .map(|occurrence| occurrence.format("%Y-%m-%d %H:%M").to_string())
            .collect();
        assert_eq!(
            formatted, case.expected,
            "case {} produced unexpected occurrences",
            case.name
        );
        for occurrence in &occurrences {
            assert!(
                *occurrence > clock.0,
                "case {} produced a non-future occurrence",
                case.name
            );
        }
    }
}
