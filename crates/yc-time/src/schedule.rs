//! `Schedule` — an ordered sequence of payment dates.

use yc_core::ensure;
use yc_core::errors::Result;

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;

/// An ordered sequence of schedule dates, including the accrual start date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    dates: Vec<Date>,
}

impl Schedule {
    /// Build a schedule from an explicit, strictly increasing date list.
    pub fn from_dates(dates: Vec<Date>) -> Result<Self> {
        ensure!(dates.len() >= 2, "a schedule needs at least two dates");
        ensure!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "schedule dates must be strictly increasing"
        );
        Ok(Schedule { dates })
    }

    /// Generate a periodic schedule rolling forward from `start` in steps of
    /// `frequency_months`, adjusting each date with `convention` against
    /// `calendar`. The adjusted end date is always included, even when the
    /// final period is a stub.
    pub fn generate(
        start: Date,
        end: Date,
        frequency_months: u32,
        calendar: &Calendar,
        convention: BusinessDayConvention,
    ) -> Result<Self> {
        ensure!(start < end, "schedule start {start} must precede end {end}");
        ensure!(frequency_months > 0, "frequency must be at least one month");

        let mut dates = vec![calendar.adjust(start, convention)?];
        let mut k: i32 = 1;
        loop {
            let unadjusted = start.add_months(k * frequency_months as i32)?;
            if unadjusted >= end {
                break;
            }
            let adjusted = calendar.adjust(unadjusted, convention)?;
            if adjusted > *dates.last().expect("schedule never empty") {
                dates.push(adjusted);
            }
            k += 1;
        }
        let final_date = calendar.adjust(end, convention)?;
        if final_date > *dates.last().expect("schedule never empty") {
            dates.push(final_date);
        }
        ensure!(dates.len() >= 2, "schedule degenerated to a single date");
        Ok(Schedule { dates })
    }

    /// The schedule dates, in increasing order. The first entry is the
    /// accrual start date.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The number of dates in the schedule.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the schedule is empty. Always false for a constructed
    /// schedule, provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
