pub mod csv_export;
pub mod csv_import;
pub mod snapshot;

pub use csv_export::export_activities_csv;
pub use csv_import::import_activities_csv;
pub use snapshot::{load_snapshot, save_snapshot, Snapshot, SnapshotError};
