//! Immutable holiday calendar.

use std::collections::BTreeSet;

use yc_core::errors::Result;
use yc_core::{ensure, fail};

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::weekday::Weekday;

/// A holiday calendar: an explicit set of holiday dates plus a weekend
/// definition. Immutable once constructed.
///
/// The default calendar has no holidays and Saturday/Sunday weekends, which
/// is what most single-curve setups use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    holidays: BTreeSet<Date>,
    weekends: Vec<Weekday>,
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar {
            holidays: BTreeSet::new(),
            weekends: vec![Weekday::Saturday, Weekday::Sunday],
        }
    }
}

impl Calendar {
    /// Create a calendar from a list of holidays and a weekend definition.
    ///
    /// Duplicate holidays are collapsed. Fails if every weekday is declared
    /// a weekend, since no date could then ever be a business day.
    pub fn new(holidays: impl IntoIterator<Item = Date>, weekends: Vec<Weekday>) -> Result<Self> {
        let mut uniq: Vec<Weekday> = weekends;
        uniq.sort();
        uniq.dedup();
        ensure!(uniq.len() < 7, "weekend definition covers all seven weekdays");
        Ok(Calendar {
            holidays: holidays.into_iter().collect(),
            weekends: uniq,
        })
    }

    /// Create a weekend-only calendar (Saturday/Sunday, no holidays).
    pub fn weekends_only() -> Self {
        Calendar::default()
    }

    /// Whether the date falls on a weekend.
    pub fn is_weekend(&self, date: Date) -> bool {
        self.weekends.contains(&date.weekday())
    }

    /// Whether the date is a holiday (weekend days not included).
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Whether the date is a business day: neither a weekend nor a holiday.
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Roll a date to a business day according to the given convention.
    ///
    /// A date that already is a business day is returned unchanged.
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        if convention == BusinessDayConvention::Unadjusted || self.is_business_day(date) {
            return Ok(date);
        }
        match convention {
            BusinessDayConvention::Following => self.roll_forward(date),
            BusinessDayConvention::ModifiedFollowing => {
                let rolled = self.roll_forward(date)?;
                if rolled.month() != date.month() || rolled.year() != date.year() {
                    self.roll_backward(date)
                } else {
                    Ok(rolled)
                }
            }
            BusinessDayConvention::Preceding => self.roll_backward(date),
            BusinessDayConvention::Unadjusted => unreachable!(),
        }
    }

    fn roll_forward(&self, mut date: Date) -> Result<Date> {
        // Worst case: every holiday sits on a weekday and the runs are
        // padded with weekends, so the bound must cover both.
        for _ in 0..(2 * self.holidays.len() + 7) {
            date = date.add_days(1)?;
            if self.is_business_day(date) {
                return Ok(date);
            }
        }
        fail!("no business day found after {date}");
    }

    fn roll_backward(&self, mut date: Date) -> Result<Date> {
        for _ in 0..(2 * self.holidays.len() + 7) {
            date = date.add_days(-1)?;
            if self.is_business_day(date) {
                return Ok(date);
            }
        }
        fail!("no business day found before {date}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn default_calendar_weekends() {
        let cal = Calendar::default();
        assert!(cal.is_business_day(date(2024, 1, 1))); // Monday
        assert!(!cal.is_business_day(date(2024, 1, 6))); // Saturday
        assert!(!cal.is_business_day(date(2024, 1, 7))); // Sunday
    }

    #[test]
    fn holidays_are_not_business_days() {
        let cal = Calendar::new([date(2024, 12, 25)], vec![Weekday::Saturday, Weekday::Sunday])
            .unwrap();
        assert!(!cal.is_business_day(date(2024, 12, 25))); // Wednesday, but a holiday
        assert!(cal.is_business_day(date(2024, 12, 24)));
    }

    #[test]
    fn all_week_weekend_rejected() {
        let all = vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ];
        assert!(Calendar::new([], all).is_err());
    }

    #[test]
    fn following_rolls_forward() {
        let cal = Calendar::default();
        // 2024-01-06 is a Saturday; next business day is Monday the 8th
        let adjusted = cal
            .adjust(date(2024, 1, 6), BusinessDayConvention::Following)
            .unwrap();
        assert_eq!(adjusted, date(2024, 1, 8));
    }

    #[test]
    fn modified_following_stays_in_month() {
        let cal = Calendar::default();
        // 2024-03-30 is a Saturday; Following would land on April 1, so
        // ModifiedFollowing rolls back to Friday the 29th.
        let following = cal
            .adjust(date(2024, 3, 30), BusinessDayConvention::Following)
            .unwrap();
        assert_eq!(following, date(2024, 4, 1));

        let modified = cal
            .adjust(date(2024, 3, 30), BusinessDayConvention::ModifiedFollowing)
            .unwrap();
        assert_eq!(modified, date(2024, 3, 29));
    }

    #[test]
    fn preceding_rolls_backward() {
        let cal = Calendar::default();
        let adjusted = cal
            .adjust(date(2024, 1, 7), BusinessDayConvention::Preceding)
            .unwrap();
        assert_eq!(adjusted, date(2024, 1, 5));
    }

    #[test]
    fn unadjusted_is_identity() {
        let cal = Calendar::default();
        let d = date(2024, 1, 6);
        assert_eq!(
            cal.adjust(d, BusinessDayConvention::Unadjusted).unwrap(),
            d
        );
    }

    #[test]
    fn adjust_crosses_a_long_shutdown() {
        // Every weekday of four consecutive weeks is a holiday: with the
        // surrounding weekends that is a 28-day non-business run.
        let mut holidays = Vec::new();
        for offset in 0..26 {
            let d = date(2024, 1, 1) + offset; // Jan 1 is a Monday
            if !matches!(d.weekday(), Weekday::Saturday | Weekday::Sunday) {
                holidays.push(d);
            }
        }
        assert_eq!(holidays.len(), 20);
        let cal =
            Calendar::new(holidays, vec![Weekday::Saturday, Weekday::Sunday]).unwrap();

        let adjusted = cal
            .adjust(date(2024, 1, 1), BusinessDayConvention::Following)
            .unwrap();
        assert_eq!(adjusted, date(2024, 1, 29)); // the Monday after

        let back = cal
            .adjust(date(2024, 1, 26), BusinessDayConvention::Preceding)
            .unwrap();
        assert_eq!(back, date(2023, 12, 29));
    }

    #[test]
    fn adjust_skips_holiday_runs() {
        // Friday holiday: rolling a Thursday-adjacent Saturday forward must
        // skip past the whole weekend.
        let cal = Calendar::new(
            [date(2024, 1, 8)], // Monday holiday
            vec![Weekday::Saturday, Weekday::Sunday],
        )
        .unwrap();
        let adjusted = cal
            .adjust(date(2024, 1, 6), BusinessDayConvention::Following)
            .unwrap();
        assert_eq!(adjusted, date(2024, 1, 9));
    }
}
