use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ActivitiesByProject, ProjectNode};

/// One fetched view of the world: the project tree plus every project's
/// activity list. Replaced wholesale on reload, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tree: ProjectNode,
    pub activities: ActivitiesByProject,
}

/// Errors from reading or writing snapshot files.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to read snapshot from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write snapshot to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Save a snapshot to a pretty-printed JSON file.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}
