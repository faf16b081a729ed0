use chrono::NaiveDate;
use uuid::Uuid;

use super::expansion::ExpansionState;
use crate::model::{ActivitiesByProject, ActivityRecord, ProjectNode};

/// One visible timeline row: a project node or one of its activities.
#[derive(Debug, Clone, Copy)]
pub enum RowItem<'a> {
    Project(&'a ProjectNode),
    Activity(&'a ActivityRecord),
}

impl<'a> RowItem<'a> {
    pub fn id(&self) -> Uuid {
        match self {
            RowItem::Project(p) => p.id,
            RowItem::Activity(a) => a.id,
        }
    }

    pub fn label(&self) -> &'a str {
        match self {
            RowItem::Project(p) => &p.name,
            RowItem::Activity(a) => &a.subject,
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        match self {
            RowItem::Project(p) => p.start_date,
            RowItem::Activity(a) => a.start_date,
        }
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        match self {
            RowItem::Project(p) => p.due_date,
            RowItem::Activity(a) => a.due_date,
        }
    }

    pub fn is_completed(&self) -> bool {
        match self {
            RowItem::Project(p) => p.status.is_completed(),
            RowItem::Activity(a) => a.status.is_completed(),
        }
    }
}

/// A row plus its indentation depth in the tree.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub item: RowItem<'a>,
    pub depth: usize,
}

/// Flatten the tree into the ordered list of rows the render driver draws.
///
/// A visible node always contributes its own row and its own activities;
/// its children are walked only while the node's expansion flag is set, so
/// collapsing a node hides the whole subtree beneath it.
pub fn visible_rows<'a>(
    root: &'a ProjectNode,
    activities: &'a ActivitiesByProject,
    state: &ExpansionState,
) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    push_node(root, activities, state, 0, &mut rows);
    rows
}

fn push_node<'a>(
    node: &'a ProjectNode,
    activities: &'a ActivitiesByProject,
    state: &ExpansionState,
    depth: usize,
    rows: &mut Vec<Row<'a>>,
) {
    rows.push(Row {
        item: RowItem::Project(node),
        depth,
    });
    if let Some(list) = activities.get(&node.id) {
        for activity in list {
            rows.push(Row {
                item: RowItem::Activity(activity),
                depth: depth + 1,
            });
        }
    }
    if state.is_expanded(node.id) {
        for child in &node.children {
            push_node(child, activities, state, depth + 1, rows);
        }
    }
}
