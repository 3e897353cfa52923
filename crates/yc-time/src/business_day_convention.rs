//! Business-day rolling conventions.

/// How a date falling on a non-business day is moved to a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusinessDayConvention {
    /// Move forward to the next business day.
    Following,
    /// Move forward to the next business day, unless that crosses into the
    /// next calendar month, in which case move backward instead.
    #[default]
    ModifiedFollowing,
    /// Move backward to the previous business day.
    Preceding,
    /// Leave the date unchanged.
    Unadjusted,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        f.write_str(s)
    }
}
