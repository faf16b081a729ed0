pub mod activity;
pub mod date;
pub mod project;

pub use activity::{ActivityRecord, ActivityStatus};
pub use date::parse_calendar_date;
pub use project::{ProjectNode, ProjectStatus};

use std::collections::HashMap;
use uuid::Uuid;

/// Activities grouped by their owning project node, backend order preserved.
pub type ActivitiesByProject = HashMap<Uuid, Vec<ActivityRecord>>;
