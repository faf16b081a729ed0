use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highlight tier for an item's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueStatus {
    /// Due today or in the past; rendered bold red.
    Overdue,
    /// Due within the next three days; rendered amber.
    DueSoon,
    Normal,
}

/// Days ahead of the due date at which an item starts counting as due soon.
const DUE_SOON_WINDOW_DAYS: i64 = 3;

/// Classify an item's due-date urgency relative to `today`.
///
/// Completed items are always `Normal` no matter the date, as are items
/// with no due date. Pure in `today`: callers pass the wall-clock date on
/// every render so items move between tiers as time advances, with no
/// caching anywhere.
pub fn classify_due_status(
    due_date: Option<NaiveDate>,
    completed: bool,
    today: NaiveDate,
) -> DueStatus {
    if completed {
        return DueStatus::Normal;
    }
    let Some(due) = due_date else {
        return DueStatus::Normal;
    };

    let diff_days = (due - today).num_days();
    if diff_days <= 0 {
        DueStatus::Overdue
    } else if diff_days <= DUE_SOON_WINDOW_DAYS {
        DueStatus::DueSoon
    } else {
        DueStatus::Normal
    }
}
