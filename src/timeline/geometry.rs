use chrono::NaiveDate;

use super::buckets::{Buckets, Granularity};
use super::range::{first_of_month, last_of_month};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.1;

/// Saturate a zoom factor into the supported range.
pub fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Pixel placement of one item's bar on the timeline axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Offset from the axis origin, always >= 0.
    pub left: f32,
    /// Bar width, never below the granularity's minimum floor.
    pub width: f32,
}

/// Compute the bar for an item with the given start/due dates.
///
/// Returns `None` when either date is missing; such items still get a row,
/// just no bar. An inverted pair (`due < start`) is a data error upstream;
/// the bar is not flipped, the width simply lands on the minimum floor.
pub fn compute_bar_geometry(
    start: Option<NaiveDate>,
    due: Option<NaiveDate>,
    granularity: Granularity,
    buckets: &Buckets,
    zoom: f32,
) -> Option<BarGeometry> {
    let start = start?;
    let due = due?;
    let boundaries = buckets.for_granularity(granularity);
    if boundaries.is_empty() {
        return None;
    }

    let unit = granularity.unit_width() * clamp_zoom(zoom);

    // Left edge: whole buckets before the one containing `start`, plus the
    // fractional position inside it. Starts before the first bucket clamp
    // to the axis origin.
    let left = match boundaries.partition_point(|b| *b <= start) {
        0 => 0.0,
        p => {
            let index = p - 1;
            let bucket_start = boundaries[index];
            let elapsed = (start - bucket_start).num_days() as f32;
            let fraction = elapsed / bucket_days(granularity, bucket_start);
            (index as f32 + fraction) * unit
        }
    };

    let span_days = (due - start).num_days() as f32;
    let span_units = span_days / granularity.average_days();
    let width = (span_units * unit).max(granularity.min_fraction() * unit);

    Some(BarGeometry { left, width })
}

/// Length in days of the bucket beginning at `bucket_start`.
fn bucket_days(granularity: Granularity, bucket_start: NaiveDate) -> f32 {
    match granularity {
        Granularity::Daily => 1.0,
        Granularity::Weekly => 7.0,
        Granularity::Monthly => {
            let last = last_of_month(bucket_start);
            ((last - first_of_month(bucket_start)).num_days() + 1) as f32
        }
        Granularity::Yearly => {
            if bucket_start.leap_year() {
                366.0
            } else {
                365.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::buckets::generate_buckets;
    use crate::timeline::range::TimelineRange;

    fn date(s: &str) -> NaiveDate {
        crate::model::parse_calendar_date(s).unwrap()
    }

    fn buckets(start: &str, end: &str) -> Buckets {
        generate_buckets(&TimelineRange {
            start: date(start),
            end: date(end),
        })
    }

    #[test]
    fn test_missing_date_produces_no_bar() {
        let b = buckets("2025-01-01", "2025-02-01");
        assert!(compute_bar_geometry(None, Some(date("2025-01-05")), Granularity::Daily, &b, 1.0)
            .is_none());
        assert!(compute_bar_geometry(Some(date("2025-01-05")), None, Granularity::Daily, &b, 1.0)
            .is_none());
    }

    #[test]
    fn test_daily_single_day_bar_gets_minimum_width() {
        let b = buckets("2024-12-22", "2025-01-20");
        let bar = compute_bar_geometry(
            Some(date("2025-01-05")),
            Some(date("2025-01-05")),
            Granularity::Daily,
            &b,
            1.0,
        )
        .unwrap();
        // 0.3 * 30px floor for a zero-span bar.
        assert!((bar.width - 9.0).abs() < 1e-4);
        // 14 full days between 2024-12-22 and 2025-01-05.
        assert!((bar.left - 14.0 * 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_daily_multi_day_bar_spans_days() {
        let b = buckets("2024-12-22", "2025-01-20");
        let bar = compute_bar_geometry(
            Some(date("2025-01-01")),
            Some(date("2025-01-10")),
            Granularity::Daily,
            &b,
            1.0,
        )
        .unwrap();
        assert!((bar.left - 10.0 * 30.0).abs() < 1e-4);
        assert!((bar.width - 9.0 * 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_weekly_left_uses_fraction_of_week() {
        // First weekly bucket is Monday 2024-12-30; Thursday 2025-01-02 sits
        // 3/7 into that first bucket.
        let b = buckets("2025-01-01", "2025-02-01");
        let bar = compute_bar_geometry(
            Some(date("2025-01-02")),
            Some(date("2025-01-09")),
            Granularity::Weekly,
            &b,
            1.0,
        )
        .unwrap();
        assert!((bar.left - (3.0 / 7.0) * 80.0).abs() < 1e-3);
        assert!((bar.width - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_monthly_fraction_uses_actual_month_length() {
        let b = buckets("2025-02-01", "2025-04-30");
        // Feb 15 2025: 14 days into a 28-day February.
        let bar = compute_bar_geometry(
            Some(date("2025-02-15")),
            Some(date("2025-03-15")),
            Granularity::Monthly,
            &b,
            1.0,
        )
        .unwrap();
        assert!((bar.left - (14.0 / 28.0) * 120.0).abs() < 1e-3);
        assert!((bar.width - (28.0 / 30.44) * 120.0).abs() < 1e-2);
    }

    #[test]
    fn test_yearly_fraction_respects_leap_year() {
        let b = buckets("2024-01-01", "2025-12-31");
        // 2024 is a leap year: July 1st is 182 days in.
        let bar = compute_bar_geometry(
            Some(date("2024-07-01")),
            Some(date("2024-12-31")),
            Granularity::Yearly,
            &b,
            1.0,
        )
        .unwrap();
        assert!((bar.left - (182.0 / 366.0) * 300.0).abs() < 1e-2);
    }

    #[test]
    fn test_start_before_first_bucket_clamps_left_to_zero() {
        let b = buckets("2025-01-01", "2025-02-01");
        let bar = compute_bar_geometry(
            Some(date("2024-11-01")),
            Some(date("2025-01-10")),
            Granularity::Daily,
            &b,
            1.0,
        )
        .unwrap();
        assert_eq!(bar.left, 0.0);
        assert!(bar.width > 0.0);
    }

    #[test]
    fn test_zoom_scales_width_linearly() {
        let b = buckets("2024-12-22", "2025-01-20");
        let at = |z: f32| {
            compute_bar_geometry(
                Some(date("2025-01-01")),
                Some(date("2025-01-10")),
                Granularity::Daily,
                &b,
                z,
            )
            .unwrap()
        };
        let one = at(1.0);
        let two = at(2.0);
        assert!((two.width - 2.0 * one.width).abs() < 1e-3);
        assert!((two.left - 2.0 * one.left).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_saturates_at_bounds() {
        assert_eq!(clamp_zoom(0.05), MIN_ZOOM);
        assert_eq!(clamp_zoom(12.0), MAX_ZOOM);
        assert_eq!(clamp_zoom(1.7), 1.7);

        let b = buckets("2025-01-01", "2025-02-01");
        let wild = compute_bar_geometry(
            Some(date("2025-01-02")),
            Some(date("2025-01-04")),
            Granularity::Daily,
            &b,
            99.0,
        )
        .unwrap();
        let max = compute_bar_geometry(
            Some(date("2025-01-02")),
            Some(date("2025-01-04")),
            Granularity::Daily,
            &b,
            MAX_ZOOM,
        )
        .unwrap();
        assert_eq!(wild, max);
    }

    #[test]
    fn test_inverted_pair_falls_back_to_minimum_floor() {
        let b = buckets("2025-01-01", "2025-02-01");
        let bar = compute_bar_geometry(
            Some(date("2025-01-20")),
            Some(date("2025-01-10")),
            Granularity::Daily,
            &b,
            1.0,
        )
        .unwrap();
        assert!((bar.width - 0.3 * 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_width_never_below_floor_for_every_granularity() {
        let b = buckets("2025-01-01", "2026-06-01");
        for g in [
            Granularity::Daily,
            Granularity::Weekly,
            Granularity::Monthly,
            Granularity::Yearly,
        ] {
            let bar = compute_bar_geometry(
                Some(date("2025-03-03")),
                Some(date("2025-03-03")),
                g,
                &b,
                MIN_ZOOM,
            )
            .unwrap();
            let floor = g.min_fraction() * g.unit_width() * MIN_ZOOM;
            assert!(bar.width >= floor - 1e-4);
            assert!(bar.left >= 0.0);
        }
    }
}
