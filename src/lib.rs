//! Gantt timeline computation engine.
//!
//! Pure, synchronous building blocks for drawing a zoomable multi-resolution
//! timeline over a project hierarchy and its activities: strict calendar-date
//! parsing, a padded timeline range, bucket boundaries for four granularities
//! (day / Monday-week / month / year), per-item pixel bar geometry, due-status
//! tiers, and the expand/collapse tree state that decides which rows a render
//! driver sees. Rendering itself and data fetching live outside this crate.

pub mod engine;
pub mod io;
pub mod model;
pub mod timeline;
pub mod view;

pub use engine::Timeline;
pub use io::Snapshot;
pub use model::{
    parse_calendar_date, ActivitiesByProject, ActivityRecord, ActivityStatus, ProjectNode,
    ProjectStatus,
};
pub use timeline::{
    classify_due_status, clamp_zoom, compute_bar_geometry, compute_range, generate_buckets,
    BarGeometry, Buckets, DueStatus, Granularity, TimelineRange,
};
pub use view::{visible_rows, ExpansionState, Row, RowItem};
