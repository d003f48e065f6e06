//! Recurrence expansion for schedule descriptors.
//!
//! Given a [`ScheduleDescriptor`] and a count, computes the next future
//! occurrences in the panel timezone. The engine never fails: degenerate
//! inputs degrade to defaults or empty results, and every branch makes
//! monotonic forward progress (daily/monthly advance at least one
//! day/month per step, weekly scans a bounded weekday set).

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, PANEL_TIMEZONE};

/// Abbreviated pt-BR weekday names, indexed 0=Sunday..6=Saturday.
const WEEKDAY_ABBREV: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Rendered in place of an absent descriptor or empty weekday list.
const MISSING_DESCRIPTION: &str = "—";

/// Wall-clock time of day in the panel timezone, 24h form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl TimeOfDay {
    /// Builds a time of day, degrading out-of-range values to the 09:00
    /// default rather than failing.
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Self {
        if hour > 23 || minute > 59 {
            Self::default()
        } else {
            Self { hour, minute }
        }
    }

    /// Parses "HH:MM" form input. Anything unparseable degrades to the
    /// 09:00 default.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let Some((hour, minute)) = input.split_once(':') else {
            return Self::default();
        };
        match (hour.trim().parse::<u8>(), minute.trim().parse::<u8>()) {
            (Ok(hour), Ok(minute)) if hour <= 23 && minute <= 59 => Self { hour, minute },
            _ => Self::default(),
        }
    }

    fn as_naive(self) -> NaiveTime {
        // Validated at construction; deserialized out-of-range values fall
        // back to the default here as well.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .or_else(|| NaiveTime::from_hms_opt(9, 0, 0))
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// How often a scheduled message fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    /// Advanced rule grammar. Unsupported: never expanded, yields no
    /// occurrences.
    Custom,
}

/// Immutable recurrence specification built from form input.
///
/// Exactly one of the frequency-specific fields is semantically active per
/// [`Frequency`] value; the fields for other frequencies are carried but
/// inert. `business_days_only` and `skip_holidays` are display-only flags
/// and never filter generated occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDescriptor {
    pub frequency: Frequency,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    /// Weekday indices, 0=Sunday..6=Saturday. Only meaningful for
    /// [`Frequency::Weekly`].
    #[serde(default)]
    pub weekdays: BTreeSet<u8>,
    /// Day of month, 1..=31. Only meaningful for [`Frequency::Monthly`];
    /// clamped to 28 when a date is computed so every month is valid.
    #[serde(default = "default_day_of_month")]
    pub day_of_month: u8,
    #[serde(default)]
    pub business_days_only: bool,
    #[serde(default)]
    pub skip_holidays: bool,
    /// Opaque advanced rule, never parsed.
    #[serde(default)]
    pub custom_rule: Option<String>,
}

fn default_day_of_month() -> u8 {
    1
}

impl ScheduleDescriptor {
    #[must_use]
    pub fn daily(time_of_day: TimeOfDay) -> Self {
        Self {
            frequency: Frequency::Daily,
            time_of_day,
            weekdays: BTreeSet::new(),
            day_of_month: default_day_of_month(),
            business_days_only: false,
            skip_holidays: false,
            custom_rule: None,
        }
    }

    #[must_use]
    pub fn weekly(weekdays: BTreeSet<u8>, time_of_day: TimeOfDay) -> Self {
        Self {
            weekdays,
            ..Self::daily(time_of_day).with_frequency(Frequency::Weekly)
        }
    }

    #[must_use]
    pub fn monthly(day_of_month: u8, time_of_day: TimeOfDay) -> Self {
        Self {
            day_of_month,
            ..Self::daily(time_of_day).with_frequency(Frequency::Monthly)
        }
    }

    #[must_use]
    pub fn custom(rule: impl Into<String>) -> Self {
        Self {
            custom_rule: Some(rule.into()),
            ..Self::daily(TimeOfDay::default()).with_frequency(Frequency::Custom)
        }
    }

    #[must_use]
    fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }
}

/// ## Summary
/// Computes the next `count` occurrences for a descriptor, strictly after
/// the clock's current instant, strictly increasing, in the panel timezone.
///
/// `Custom` descriptors always yield an empty sequence; the rule grammar
/// is not interpreted. A weekly descriptor whose weekday set is empty (or
/// contains only out-of-range indices) also yields an empty sequence —
/// the set can never match a day, so scanning would not terminate.
#[must_use]
pub fn next_occurrences(
    descriptor: &ScheduleDescriptor,
    count: usize,
    clock: &impl Clock,
) -> Vec<DateTime<Tz>> {
    if count == 0 {
        return Vec::new();
    }
    let now = clock.now();
    match descriptor.frequency {
        Frequency::Daily => daily_occurrences(descriptor.time_of_day, count, now),
        Frequency::Weekly => weekly_occurrences(descriptor, count, now),
        Frequency::Monthly => monthly_occurrences(descriptor, count, now),
        Frequency::Custom => {
            tracing::debug!("custom rule requested, yielding no occurrences");
            Vec::new()
        }
    }
}

/// Resolves a local date + time of day to an instant in the panel zone.
///
/// Ambiguous local times (DST fold) take the earliest mapping; local times
/// that do not exist (DST gap) resolve to `None` and the day is skipped.
fn local_at(date: NaiveDate, time_of_day: TimeOfDay) -> Option<DateTime<Tz>> {
    PANEL_TIMEZONE
        .from_local_datetime(&date.and_time(time_of_day.as_naive()))
        .earliest()
}

fn daily_occurrences(
    time_of_day: TimeOfDay,
    count: usize,
    now: DateTime<Tz>,
) -> Vec<DateTime<Tz>> {
    let mut occurrences = Vec::with_capacity(count);
    let mut day = now.date_naive();
    while occurrences.len() < count {
        if let Some(instant) = local_at(day, time_of_day) {
            if instant > now {
                occurrences.push(instant);
            }
        }
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }
    occurrences
}

fn weekly_occurrences(
    descriptor: &ScheduleDescriptor,
    count: usize,
    now: DateTime<Tz>,
) -> Vec<DateTime<Tz>> {
    // Indices above 6 can never match a weekday; drop them up front so a
    // set that cannot match does not scan forever.
    let allowed: BTreeSet<u8> = descriptor
        .weekdays
        .iter()
        .copied()
        .filter(|index| *index <= 6)
        .collect();
    if allowed.is_empty() {
        tracing::debug!("weekly descriptor without matchable weekdays, yielding no occurrences");
        return Vec::new();
    }

    let mut occurrences = Vec::with_capacity(count);
    let mut day = now.date_naive();
    while occurrences.len() < count {
        let index = u8::try_from(day.weekday().num_days_from_sunday()).unwrap_or(u8::MAX);
        if allowed.contains(&index) {
            if let Some(instant) = local_at(day, descriptor.time_of_day) {
                if instant > now {
                    occurrences.push(instant);
                }
            }
        }
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }
    occurrences
}

fn monthly_occurrences(
    descriptor: &ScheduleDescriptor,
    count: usize,
    now: DateTime<Tz>,
) -> Vec<DateTime<Tz>> {
    // Clamping to 28 keeps the date valid in every month, February included.
    let day_of_month = descriptor.day_of_month.clamp(1, 28);

    let mut occurrences = Vec::with_capacity(count);
    let mut year = now.year();
    let mut month = now.month();
    while occurrences.len() < count {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, u32::from(day_of_month)) {
            if let Some(instant) = local_at(date, descriptor.time_of_day) {
                if instant > now {
                    occurrences.push(instant);
                }
            }
        }
        let Some(anchor) = NaiveDate::from_ymd_opt(year, month, 1) else {
            break;
        };
        let Some(next) = anchor.checked_add_months(Months::new(1)) else {
            break;
        };
        year = next.year();
        month = next.month();
    }
    occurrences
}

/// ## Summary
/// Produces a one-line pt-BR description of a descriptor for display, e.g.
/// "Diário às 09:00" or "Semanal (Seg, Qua, Sex) às 10:00".
///
/// Returns the em-dash placeholder when the descriptor is absent.
#[must_use]
pub fn describe(descriptor: Option<&ScheduleDescriptor>) -> String {
    let Some(descriptor) = descriptor else {
        return MISSING_DESCRIPTION.to_string();
    };
    let time_of_day = descriptor.time_of_day;
    match descriptor.frequency {
        Frequency::Daily => format!("Diário às {time_of_day}"),
        Frequency::Weekly => {
            let names: Vec<&str> = descriptor
                .weekdays
                .iter()
                .filter(|index| **index <= 6)
                .map(|index| WEEKDAY_ABBREV[usize::from(*index)])
                .collect();
            let days = if names.is_empty() {
                MISSING_DESCRIPTION.to_string()
            } else {
                names.join(", ")
            };
            format!("Semanal ({days}) às {time_of_day}")
        }
        Frequency::Monthly => {
            format!("Mensal (dia {}) às {time_of_day}", descriptor.day_of_month)
        }
        Frequency::Custom => "Personalizado (regra avançada)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeDelta, Timelike};

    // 2026-03-10 is a Tuesday; São Paulo has observed no DST since 2019,
    // so local offset is a constant -03:00 around these dates.
    fn clock_at(hour: u32, minute: u32) -> FixedClock {
        FixedClock(
            PANEL_TIMEZONE
                .with_ymd_and_hms(2026, 3, 10, hour, minute, 0)
                .single()
                .expect("unambiguous local time"),
        )
    }

    #[test]
    fn daily_returns_count_strictly_increasing_day_apart() {
        let clock = clock_at(12, 0);
        let descriptor = ScheduleDescriptor::daily(TimeOfDay::new(9, 30));
        let occurrences = next_occurrences(&descriptor, 5, &clock);

        assert_eq!(occurrences.len(), 5);
        for window in occurrences.windows(2) {
            assert_eq!(window[1] - window[0], TimeDelta::days(1));
        }
        for occurrence in &occurrences {
            assert!(*occurrence > clock.0);
            assert_eq!((occurrence.hour(), occurrence.minute()), (9, 30));
        }
        // 09:30 has already passed at 12:00, so the series starts tomorrow.
        assert_eq!(occurrences[0].date_naive().day(), 11);
    }

    #[test]
    fn daily_includes_today_when_time_still_ahead() {
        let clock = clock_at(8, 0);
        let descriptor = ScheduleDescriptor::daily(TimeOfDay::new(9, 0));
        let occurrences = next_occurrences(&descriptor, 1, &clock);
        assert_eq!(occurrences[0].date_naive().day(), 10);
    }

    #[test]
    fn weekly_only_selected_weekdays() {
        let clock = clock_at(12, 0);
        // Monday, Wednesday, Friday.
        let weekdays: BTreeSet<u8> = [1, 3, 5].into_iter().collect();
        let descriptor = ScheduleDescriptor::weekly(weekdays.clone(), TimeOfDay::new(10, 0));
        let occurrences = next_occurrences(&descriptor, 6, &clock);

        assert_eq!(occurrences.len(), 6);
        for window in occurrences.windows(2) {
            assert!(window[0] < window[1]);
        }
        for occurrence in &occurrences {
            let index = u8::try_from(occurrence.weekday().num_days_from_sunday())
                .expect("weekday index fits in u8");
            assert!(weekdays.contains(&index));
            assert!(*occurrence > clock.0);
        }
    }

    #[test]
    fn weekly_same_day_counts_when_time_ahead() {
        // Tuesday at 12:00, asking for Tuesdays at 18:00.
        let clock = clock_at(12, 0);
        let descriptor =
            ScheduleDescriptor::weekly([2].into_iter().collect(), TimeOfDay::new(18, 0));
        let occurrences = next_occurrences(&descriptor, 2, &clock);
        assert_eq!(occurrences[0].date_naive().day(), 10);
        assert_eq!(occurrences[1] - occurrences[0], TimeDelta::days(7));
    }

    #[test]
    fn weekly_empty_set_yields_empty() {
        let clock = clock_at(12, 0);
        let descriptor = ScheduleDescriptor::weekly(BTreeSet::new(), TimeOfDay::default());
        assert!(next_occurrences(&descriptor, 10, &clock).is_empty());
    }

    #[test]
    fn weekly_out_of_range_indices_yield_empty() {
        let clock = clock_at(12, 0);
        let descriptor =
            ScheduleDescriptor::weekly([7, 12, 200].into_iter().collect(), TimeOfDay::default());
        assert!(next_occurrences(&descriptor, 10, &clock).is_empty());
    }

    #[test]
    fn monthly_day_is_clamped_to_28() {
        let clock = clock_at(12, 0);
        let descriptor = ScheduleDescriptor::monthly(31, TimeOfDay::new(9, 0));
        let occurrences = next_occurrences(&descriptor, 12, &clock);

        assert_eq!(occurrences.len(), 12);
        for occurrence in &occurrences {
            assert_eq!(occurrence.day(), 28);
        }
        // February is in range and must be valid.
        assert!(
            occurrences
                .iter()
                .any(|occurrence| occurrence.month() == 2)
        );
    }

    #[test]
    fn monthly_skips_to_next_month_when_day_passed() {
        let clock = clock_at(12, 0);
        let descriptor = ScheduleDescriptor::monthly(5, TimeOfDay::new(9, 0));
        let occurrences = next_occurrences(&descriptor, 3, &clock);
        assert_eq!(occurrences[0].month(), 4);
        assert_eq!(occurrences[0].day(), 5);
    }

    #[test]
    fn custom_always_empty() {
        let clock = clock_at(12, 0);
        let descriptor = ScheduleDescriptor::custom("FREQ=fortnightly;anchor=payday");
        assert!(next_occurrences(&descriptor, 4, &clock).is_empty());
    }

    #[test]
    fn zero_count_yields_empty() {
        let clock = clock_at(12, 0);
        let descriptor = ScheduleDescriptor::daily(TimeOfDay::default());
        assert!(next_occurrences(&descriptor, 0, &clock).is_empty());
    }

    #[test]
    fn time_of_day_parse_degrades_to_default() {
        assert_eq!(TimeOfDay::parse("10:45"), TimeOfDay::new(10, 45));
        assert_eq!(TimeOfDay::parse("25:00"), TimeOfDay::default());
        assert_eq!(TimeOfDay::parse("not a time"), TimeOfDay::default());
        assert_eq!(TimeOfDay::parse(""), TimeOfDay::default());
        assert_eq!(TimeOfDay::new(99, 99), TimeOfDay::default());
    }

    #[test]
    fn describe_formats_each_frequency() {
        assert_eq!(
            describe(Some(&ScheduleDescriptor::daily(TimeOfDay::default()))),
            "Diário às 09:00"
        );
        assert_eq!(
            describe(Some(&ScheduleDescriptor::weekly(
                [1, 3, 5].into_iter().collect(),
                TimeOfDay::new(10, 0),
            ))),
            "Semanal (Seg, Qua, Sex) às 10:00"
        );
        assert_eq!(
            describe(Some(&ScheduleDescriptor::weekly(
                BTreeSet::new(),
                TimeOfDay::new(10, 0),
            ))),
            "Semanal (—) às 10:00"
        );
        assert_eq!(
            describe(Some(&ScheduleDescriptor::monthly(5, TimeOfDay::default()))),
            "Mensal (dia 5) às 09:00"
        );
        assert_eq!(
            describe(Some(&ScheduleDescriptor::custom("x"))),
            "Personalizado (regra avançada)"
        );
        assert_eq!(describe(None), "—");
    }

    #[test]
    fn descriptor_deserializes_with_defaults() {
        let descriptor: ScheduleDescriptor =
            serde_json::from_str(r#"{"frequency":"daily"}"#).expect("valid descriptor JSON");
        assert_eq!(descriptor.frequency, Frequency::Daily);
        assert_eq!(descriptor.time_of_day, TimeOfDay::default());
        assert!(descriptor.weekdays.is_empty());
        assert_eq!(descriptor.day_of_month, 1);
    }
}
