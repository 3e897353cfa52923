//! `DayCounter` trait and built-in day-count conventions.

use yc_core::Time;

use crate::date::Date;

/// A day-count convention: turns a pair of dates into a day count and a
/// year fraction.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Name of the convention, e.g. `"Actual/360"`.
    fn name(&self) -> &'static str;

    /// Number of days between two dates under this convention.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Year fraction between two dates under this convention.
    fn year_fraction(&self, start: Date, end: Date) -> Time;
}

// ── Actual/365 (Fixed) ────────────────────────────────────────────────────────

/// Actual/365 (Fixed): actual days divided by 365, leap years ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &'static str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        (end - start) as i64
    }

    fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 365.0
    }
}

// ── Actual/360 ────────────────────────────────────────────────────────────────

/// Actual/360: actual days divided by 360. The money-market convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &'static str {
        "Actual/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        (end - start) as i64
    }

    fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 360.0
    }
}

// ── 30/360 (US) ───────────────────────────────────────────────────────────────

/// 30/360 (US): every month counts 30 days, every year 360.
///
/// A start day of 31 is treated as 30; an end day of 31 is treated as 30
/// only when the (adjusted) start day is 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360 (US)"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let mut d1 = start.day_of_month() as i64;
        let mut d2 = end.day_of_month() as i64;
        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && d1 == 30 {
            d2 = 30;
        }
        360 * (end.year() as i64 - start.year() as i64)
            + 30 * (end.month() as i64 - start.month() as i64)
            + (d2 - d1)
    }

    fn year_fraction(&self, start: Date, end: Date) -> Time {
        self.day_count(start, end) as Time / 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual_365_fixed() {
        let dc = Actual365Fixed;
        let start = date(2025, 1, 1);
        let end = date(2025, 7, 1);
        assert_eq!(dc.day_count(start, end), 181);
        assert_relative_eq!(dc.year_fraction(start, end), 181.0 / 365.0);
        // Full leap year still divides by 365
        assert_relative_eq!(
            dc.year_fraction(date(2024, 1, 1), date(2025, 1, 1)),
            366.0 / 365.0
        );
    }

    #[test]
    fn actual_360() {
        let dc = Actual360;
        let start = date(2025, 1, 1);
        let end = date(2025, 7, 1);
        assert_eq!(dc.day_count(start, end), 181);
        assert_relative_eq!(dc.year_fraction(start, end), 181.0 / 360.0);
    }

    #[test]
    fn thirty_360_regular_year() {
        let dc = Thirty360;
        // A whole calendar year is exactly 1.0
        assert_relative_eq!(
            dc.year_fraction(date(2025, 1, 1), date(2026, 1, 1)),
            1.0
        );
        // A half year is exactly 0.5 regardless of actual day counts
        assert_relative_eq!(
            dc.year_fraction(date(2025, 1, 15), date(2025, 7, 15)),
            0.5
        );
    }

    #[test]
    fn thirty_360_end_of_month_rules() {
        let dc = Thirty360;
        // start on the 31st counts as the 30th
        assert_eq!(dc.day_count(date(2025, 1, 31), date(2025, 2, 28)), 28);
        // end on the 31st trimmed only when the start was trimmed
        assert_eq!(dc.day_count(date(2025, 1, 31), date(2025, 3, 31)), 60);
        // end on the 31st kept when the start day is below 30
        assert_eq!(dc.day_count(date(2025, 1, 15), date(2025, 1, 31)), 16);
    }

    #[test]
    fn negative_spans() {
        let dc = Actual365Fixed;
        assert_eq!(dc.day_count(date(2025, 7, 1), date(2025, 1, 1)), -181);
        assert!(dc.year_fraction(date(2025, 7, 1), date(2025, 1, 1)) < 0.0);
    }
}
