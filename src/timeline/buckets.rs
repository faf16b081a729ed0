use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::range::{first_of_month, TimelineRange};

/// Resolution of the timeline axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Granularity {
    /// Pixel width of one bucket at zoom 1.0.
    pub fn unit_width(self) -> f32 {
        match self {
            Granularity::Daily => 30.0,
            Granularity::Weekly => 80.0,
            Granularity::Monthly => 120.0,
            Granularity::Yearly => 300.0,
        }
    }

    /// Smallest bar width, as a fraction of one bucket, so short items
    /// stay visible and clickable at low zoom.
    pub fn min_fraction(self) -> f32 {
        match self {
            Granularity::Daily => 0.3,
            Granularity::Weekly => 0.6,
            Granularity::Monthly => 0.3,
            Granularity::Yearly => 0.2,
        }
    }

    /// Average bucket length in days, used to convert a day span into
    /// bucket units for widths.
    pub fn average_days(self) -> f32 {
        match self {
            Granularity::Daily => 1.0,
            Granularity::Weekly => 7.0,
            Granularity::Monthly => 30.44,
            Granularity::Yearly => 365.25,
        }
    }
}

/// Bucket boundary lists for all four granularities over one range.
///
/// All four are generated eagerly from the same range so switching the
/// display granularity never forces a range recomputation.
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    pub daily: Vec<NaiveDate>,
    pub weekly: Vec<NaiveDate>,
    pub monthly: Vec<NaiveDate>,
    pub yearly: Vec<NaiveDate>,
}

impl Buckets {
    pub fn for_granularity(&self, granularity: Granularity) -> &[NaiveDate] {
        match granularity {
            Granularity::Daily => &self.daily,
            Granularity::Weekly => &self.weekly,
            Granularity::Monthly => &self.monthly,
            Granularity::Yearly => &self.yearly,
        }
    }
}

/// Generate bucket boundaries covering `range` for every granularity.
pub fn generate_buckets(range: &TimelineRange) -> Buckets {
    Buckets {
        daily: daily_buckets(range),
        weekly: weekly_buckets(range),
        monthly: monthly_buckets(range),
        yearly: yearly_buckets(range),
    }
}

/// One entry per calendar day, `start..=end`.
fn daily_buckets(range: &TimelineRange) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut day = range.start;
    while day <= range.end {
        out.push(day);
        day += Duration::days(1);
    }
    out
}

/// Mondays from the Monday on or before `start`, with one buffer week past
/// `end` so the partial week containing `end` is always covered.
fn weekly_buckets(range: &TimelineRange) -> Vec<NaiveDate> {
    let back = range.start.weekday().num_days_from_monday() as i64;
    let mut monday = range.start - Duration::days(back);
    let stop = range.end + Duration::days(7);

    let mut out = Vec::new();
    while monday <= stop {
        out.push(monday);
        monday += Duration::days(7);
    }
    out
}

/// First-of-month entries from `start`'s month through `end`'s month.
fn monthly_buckets(range: &TimelineRange) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut first = first_of_month(range.start);
    while first <= range.end {
        out.push(first);
        first = first + Months::new(1);
    }
    out
}

/// One January 1st per calendar year in the range.
fn yearly_buckets(range: &TimelineRange) -> Vec<NaiveDate> {
    (range.start.year()..=range.end.year())
        .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        .collect()
}
