use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow status of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    New,
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl ActivityStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, ActivityStatus::Completed)
    }
}

/// A single activity belonging to one project node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    /// Owning project node.
    pub project_id: Uuid,
    pub subject: String,
    pub status: ActivityStatus,
    pub assignee: String,
    pub approver: String,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

impl ActivityRecord {
    /// Create a new activity under the given project with sensible defaults.
    pub fn new(project_id: Uuid, subject: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            subject: subject.into(),
            status: ActivityStatus::New,
            assignee: String::new(),
            approver: String::new(),
            start_date: None,
            due_date: None,
            progress: 0,
        }
    }
}
