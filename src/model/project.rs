use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health status of a project node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    OnTrack,
    AtRisk,
    OffTrack,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }
}

/// One node in the project hierarchy.
///
/// Nodes are read-only snapshots fetched from the backend; children keep
/// the backend's insertion order and the tree is acyclic by construction.
/// A reload replaces the whole tree, nothing is patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectNode {
    pub id: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    pub assignee: String,
    pub approver: String,
    /// Planned start; `None` when the backend field was absent or malformed.
    pub start_date: Option<NaiveDate>,
    /// Planned due date; `None` when absent or malformed.
    pub due_date: Option<NaiveDate>,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub children: Vec<ProjectNode>,
}

impl ProjectNode {
    /// Create a leaf node with sensible defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: ProjectStatus::OnTrack,
            assignee: String::new(),
            approver: String::new(),
            start_date: None,
            due_date: None,
            progress: 0,
            children: Vec::new(),
        }
    }

    /// Depth-first walk over this node and all descendants.
    pub fn walk(&self, f: &mut impl FnMut(&ProjectNode)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Count of this node plus all descendants.
    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }
}
