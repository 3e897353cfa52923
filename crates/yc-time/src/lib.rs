//! # yc-time
//!
//! Date arithmetic, calendars, business-day rolling conventions, day-count
//! conventions, and coupon schedule generation.
//!
//! Everything in this crate is pure: calendars are immutable values, and
//! all date computations return new values without touching their inputs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day rolling conventions.
pub mod business_day_convention;

/// Immutable holiday calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// `Schedule` — an ordered sequence of payment dates.
pub mod schedule;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::Calendar;
pub use date::Date;
pub use day_counter::{Actual360, Actual365Fixed, DayCounter, Thirty360};
pub use schedule::Schedule;
pub use weekday::Weekday;
