use chrono::NaiveDate;
use log::debug;

use crate::io::Snapshot;
use crate::timeline::{
    clamp_zoom, compute_bar_geometry, compute_range, generate_buckets, BarGeometry, Buckets,
    DueStatus, Granularity, TimelineRange, ZOOM_STEP,
};
use crate::view::{visible_rows, ExpansionState, Row, RowItem};
use uuid::Uuid;

/// Engine state for one timeline view.
///
/// Owns the current data snapshot plus the view inputs (granularity, zoom,
/// expansion state) and keeps the range and all four bucket lists computed
/// eagerly. Every input change triggers a full recomputation of whatever
/// depends on it; the work is O(items + buckets), so nothing is cached
/// incrementally. Replacing the snapshot rebuilds range, buckets and
/// expansion state wholesale.
#[derive(Debug)]
pub struct Timeline {
    snapshot: Snapshot,
    granularity: Granularity,
    zoom: f32,
    expansion: ExpansionState,
    range: TimelineRange,
    buckets: Buckets,
}

impl Timeline {
    /// Build a timeline over a fresh snapshot, every node expanded.
    pub fn new(snapshot: Snapshot, today: NaiveDate) -> Self {
        let range = compute_range(&snapshot.tree, &snapshot.activities, today);
        let buckets = generate_buckets(&range);
        let expansion = ExpansionState::from_tree(&snapshot.tree);
        debug!(
            "timeline over {} nodes: {} .. {}",
            snapshot.tree.node_count(),
            range.start,
            range.end
        );
        Self {
            snapshot,
            granularity: Granularity::Weekly,
            zoom: 1.0,
            expansion,
            range,
            buckets,
        }
    }

    /// Replace the data wholesale, as after a backend reload. View inputs
    /// that belong to the data (expansion flags) are rebuilt; granularity
    /// and zoom are kept.
    pub fn reload(&mut self, snapshot: Snapshot, today: NaiveDate) {
        self.range = compute_range(&snapshot.tree, &snapshot.activities, today);
        self.buckets = generate_buckets(&self.range);
        self.expansion = ExpansionState::from_tree(&snapshot.tree);
        self.snapshot = snapshot;
        debug!("timeline reloaded: {} .. {}", self.range.start, self.range.end);
    }

    pub fn range(&self) -> TimelineRange {
        self.range
    }

    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Switch the display granularity. Buckets for every granularity are
    /// already computed, so this is just a mode flip.
    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.granularity = granularity;
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = clamp_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn toggle(&mut self, node_id: Uuid) {
        self.expansion.toggle(node_id);
    }

    pub fn is_expanded(&self, node_id: Uuid) -> bool {
        self.expansion.is_expanded(node_id)
    }

    /// Ordered rows for the render driver, honoring collapsed subtrees.
    pub fn rows(&self) -> Vec<Row<'_>> {
        visible_rows(&self.snapshot.tree, &self.snapshot.activities, &self.expansion)
    }

    /// Bar placement for one row item under the current granularity and
    /// zoom; `None` when the item is missing a start or due date.
    pub fn bar_for(&self, item: &RowItem<'_>) -> Option<BarGeometry> {
        compute_bar_geometry(
            item.start_date(),
            item.due_date(),
            self.granularity,
            &self.buckets,
            self.zoom,
        )
    }

    /// Due-date tier for one row item, evaluated against the caller's
    /// wall-clock today on every render.
    pub fn due_status(&self, item: &RowItem<'_>, today: NaiveDate) -> DueStatus {
        crate::timeline::classify_due_status(item.due_date(), item.is_completed(), today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActivitiesByProject, ActivityRecord, ProjectNode};

    fn date(s: &str) -> NaiveDate {
        crate::model::parse_calendar_date(s).unwrap()
    }

    fn sample_snapshot() -> Snapshot {
        let mut root = ProjectNode::new("root");
        let mut a = ProjectNode::new("a");
        a.start_date = Some(date("2025-01-01"));
        a.due_date = Some(date("2025-01-10"));
        let mut b = ProjectNode::new("b");
        b.start_date = Some(date("2025-01-05"));
        b.due_date = Some(date("2025-01-05"));
        root.children.push(a);
        root.children.push(b);

        Snapshot {
            tree: root,
            activities: ActivitiesByProject::new(),
        }
    }

    #[test]
    fn test_scenario_two_children_daily_view() {
        let mut timeline = Timeline::new(sample_snapshot(), date("2025-01-03"));
        timeline.set_granularity(Granularity::Daily);
        timeline.set_zoom(1.0);

        assert_eq!(timeline.range().start, date("2024-12-22"));
        assert_eq!(timeline.range().end, date("2025-01-20"));

        let rows = timeline.rows();
        assert_eq!(rows.len(), 3);

        // Single-day child sits on the minimum width floor: 0.3 * 30.
        let bar = timeline.bar_for(&rows[2].item).unwrap();
        assert!((bar.width - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut timeline = Timeline::new(sample_snapshot(), date("2025-01-03"));
        timeline.set_zoom(2.95);
        for _ in 0..10 {
            timeline.zoom_in();
        }
        assert!((timeline.zoom() - 3.0).abs() < 1e-6);
        for _ in 0..60 {
            timeline.zoom_out();
        }
        assert!((timeline.zoom() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rows_without_dates_get_no_bar() {
        let timeline = Timeline::new(sample_snapshot(), date("2025-01-03"));
        let rows = timeline.rows();
        // Root has no dates: a row but no bar.
        assert!(timeline.bar_for(&rows[0].item).is_none());
        assert!(timeline.bar_for(&rows[1].item).is_some());
    }

    #[test]
    fn test_reload_rebuilds_expansion_but_keeps_view_settings() {
        let mut timeline = Timeline::new(sample_snapshot(), date("2025-01-03"));
        timeline.set_granularity(Granularity::Monthly);
        timeline.set_zoom(2.0);

        let next = sample_snapshot();
        let collapsed = next.tree.children[0].id;
        timeline.toggle(collapsed);
        timeline.reload(next, date("2025-01-03"));

        assert!(timeline.is_expanded(collapsed));
        assert_eq!(timeline.granularity(), Granularity::Monthly);
        assert!((timeline.zoom() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_activities_appear_under_their_project() {
        let mut snapshot = sample_snapshot();
        let a_id = snapshot.tree.children[0].id;
        snapshot
            .activities
            .insert(a_id, vec![ActivityRecord::new(a_id, "review")]);

        let timeline = Timeline::new(snapshot, date("2025-01-03"));
        let rows = timeline.rows();
        let labels: Vec<&str> = rows.iter().map(|r| r.item.label()).collect();
        assert_eq!(labels, ["root", "a", "review", "b"]);
    }
}
