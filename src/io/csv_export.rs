use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{ActivityRecord, ActivityStatus};

/// Errors from exporting activities to CSV.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to create CSV file at {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write CSV: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush CSV: {0}")]
    Flush(#[from] std::io::Error),
}

fn status_label(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::New => "New",
        ActivityStatus::Planning => "Planning",
        ActivityStatus::InProgress => "In Progress",
        ActivityStatus::OnHold => "On Hold",
        ActivityStatus::Completed => "Completed",
        ActivityStatus::Cancelled => "Cancelled",
    }
}

/// Export activities to a semicolon-delimited CSV file matching the import
/// format. Dates are written as ISO `YYYY-MM-DD`, missing dates as empty
/// fields. Returns the number of rows written.
pub fn export_activities_csv(
    activities: &[ActivityRecord],
    path: &Path,
) -> Result<usize, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    wtr.write_record([
        "Project", "Subject", "Start", "Due", "Status", "Assignee", "Approver", "Progress",
    ])?;

    for activity in activities {
        let iso = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
        };
        wtr.write_record([
            activity.project_id.to_string(),
            activity.subject.clone(),
            iso(activity.start_date),
            iso(activity.due_date),
            status_label(activity.status).to_string(),
            activity.assignee.clone(),
            activity.approver.clone(),
            activity.progress.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(activities.len())
}
