use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::model::{ActivitiesByProject, ProjectNode};

/// Days of padding added on each side of the min/max item dates so bars
/// never touch the viewport edge and labels have room.
const RANGE_PAD_DAYS: i64 = 10;

/// The inclusive date window the timeline axis covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Compute the padded timeline window for a project tree and its activities.
///
/// Every non-`None` start/due date across the tree and all activity lists
/// is considered. With no dates at all the window defaults to roughly three
/// months around `today`: the first day of the previous month through the
/// last day of the month two months out.
pub fn compute_range(
    tree: &ProjectNode,
    activities: &ActivitiesByProject,
    today: NaiveDate,
) -> TimelineRange {
    let mut dates: Vec<NaiveDate> = Vec::new();

    tree.walk(&mut |node| {
        dates.extend(node.start_date);
        dates.extend(node.due_date);
    });
    for list in activities.values() {
        for activity in list {
            dates.extend(activity.start_date);
            dates.extend(activity.due_date);
        }
    }

    match (dates.iter().min(), dates.iter().max()) {
        (Some(&min), Some(&max)) => TimelineRange {
            start: min - Duration::days(RANGE_PAD_DAYS),
            end: max + Duration::days(RANGE_PAD_DAYS),
        },
        _ => TimelineRange {
            start: first_of_month(today - Months::new(1)),
            end: last_of_month(today + Months::new(2)),
        },
    }
}

/// First calendar day of the month containing `d`.
pub(crate) fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// Last calendar day of the month containing `d`.
pub(crate) fn last_of_month(d: NaiveDate) -> NaiveDate {
    first_of_month(first_of_month(d) + Months::new(1)) - Duration::days(1)
}
