use std::collections::HashMap;

use uuid::Uuid;

use crate::model::ProjectNode;

/// Per-node expand/collapse flags for the project tree.
///
/// Kept apart from the tree itself: the tree is a fetched snapshot that is
/// replaced wholesale on reload, while this state lives with the view.
/// Ids with no entry count as expanded, and `toggle` flips exactly one
/// node; a collapsed ancestor hides its subtree without touching the
/// descendants' own flags.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashMap<Uuid, bool>,
}

impl ExpansionState {
    /// State with every node of the given tree expanded.
    pub fn from_tree(root: &ProjectNode) -> Self {
        let mut expanded = HashMap::new();
        root.walk(&mut |node| {
            expanded.insert(node.id, true);
        });
        Self { expanded }
    }

    /// Flip one node's flag. Unknown ids start from the expanded default.
    pub fn toggle(&mut self, id: Uuid) {
        let entry = self.expanded.entry(id).or_insert(true);
        *entry = !*entry;
    }

    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.expanded.get(&id).copied().unwrap_or(true)
    }
}
