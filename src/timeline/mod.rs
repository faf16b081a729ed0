pub mod buckets;
pub mod geometry;
pub mod range;
pub mod status;

pub use buckets::{generate_buckets, Buckets, Granularity};
pub use geometry::{clamp_zoom, compute_bar_geometry, BarGeometry, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use range::{compute_range, TimelineRange};
pub use status::{classify_due_status, DueStatus};
