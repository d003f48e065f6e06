//! Clock abstraction for the scheduling core.
//!
//! Occurrence generation depends on "now". Injecting the clock keeps the
//! engine deterministic: each call captures exactly one snapshot, so a
//! single computation is internally consistent even while real time
//! advances between calls.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Fixed reference timezone for all schedule computation and display.
pub const PANEL_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Source of the current instant, expressed in the panel timezone.
pub trait Clock {
    fn now(&self) -> DateTime<Tz>;
}

/// Reads the real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&PANEL_TIMEZONE)
    }
}

/// Always reports the same instant. Intended for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Tz>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let instant = PANEL_TIMEZONE
            .with_ymd_and_hms(2026, 3, 10, 12, 0, 0)
            .single()
            .expect("unambiguous local time");
        assert_eq!(FixedClock(instant).now(), instant);
    }

    #[test]
    fn system_clock_is_in_panel_timezone() {
        let now = SystemClock.now();
        assert_eq!(now.timezone(), PANEL_TIMEZONE);
    }
}
