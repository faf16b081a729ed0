use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;
use uuid::Uuid;

use crate::model::date::parse_optional_date;
use crate::model::{ActivityRecord, ActivityStatus};

/// Errors from importing an activity CSV file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required columns (need project id and subject), found headers: {found:?}")]
    MissingColumns { found: Vec<String> },
}

// Column indices after header mapping.
const COL_PROJECT: usize = 0;
const COL_SUBJECT: usize = 1;
const COL_START: usize = 2;
const COL_DUE: usize = 3;
const COL_STATUS: usize = 4;
const COL_ASSIGNEE: usize = 5;
const COL_APPROVER: usize = 6;
const COL_PROGRESS: usize = 7;

/// Map a status string to an `ActivityStatus`; unknown values become `New`.
fn parse_status(s: &str) -> ActivityStatus {
    match s.trim().to_lowercase().as_str() {
        "new" | "" => ActivityStatus::New,
        "planning" | "planned" => ActivityStatus::Planning,
        "in progress" | "in-progress" | "inprogress" | "active" | "started" => {
            ActivityStatus::InProgress
        }
        "on hold" | "on-hold" | "onhold" | "paused" => ActivityStatus::OnHold,
        "completed" | "complete" | "done" | "finished" => ActivityStatus::Completed,
        "cancelled" | "canceled" => ActivityStatus::Cancelled,
        _ => ActivityStatus::New,
    }
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Map a normalized header to our column index.
fn header_to_col(normalized: &str) -> Option<usize> {
    match normalized {
        "project" | "projectid" | "parentproject" => Some(COL_PROJECT),

        "subject" | "title" | "name" | "activity" | "task" | "label" => Some(COL_SUBJECT),

        "start" | "startdate" | "from" | "begin" | "begindate" => Some(COL_START),

        "due" | "duedate" | "end" | "enddate" | "deadline" | "finish" => Some(COL_DUE),

        "status" | "state" | "stage" => Some(COL_STATUS),

        "assignee" | "assignedto" | "owner" => Some(COL_ASSIGNEE),

        "approver" | "approvedby" | "reviewer" => Some(COL_APPROVER),

        "progress" | "percentdone" | "completion" => Some(COL_PROGRESS),

        _ => None,
    }
}

/// Import activities from a CSV file.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column
/// headers flexibly ("Project Id", "Due Date", etc.). Project id and
/// subject are required per row; dates are parsed strictly and left empty
/// when malformed. Rows without a usable project id or subject are skipped.
/// Returns `(activities, skipped_count)`.
pub fn import_activities_csv(path: &Path) -> Result<(Vec<ActivityRecord>, usize), ImportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_activities_csv(&content)
}

/// Parse activity rows out of CSV text. See [`import_activities_csv`].
pub fn parse_activities_csv(content: &str) -> Result<(Vec<ActivityRecord>, usize), ImportError> {
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<usize>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    let has_project = col_map.iter().any(|c| *c == Some(COL_PROJECT));
    let has_subject = col_map.iter().any(|c| *c == Some(COL_SUBJECT));
    if !has_project || !has_subject {
        return Err(ImportError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let field = |record: &csv::StringRecord, col: usize| -> String {
        col_map
            .iter()
            .position(|c| *c == Some(col))
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
            .to_string()
    };

    let mut activities = Vec::new();
    let mut skipped = 0;

    for (line, record) in reader.records().enumerate() {
        let record = record?;

        let project_id = match Uuid::parse_str(&field(&record, COL_PROJECT)) {
            Ok(id) => id,
            Err(_) => {
                warn!("skipping CSV row {}: unusable project id", line + 2);
                skipped += 1;
                continue;
            }
        };
        let subject = field(&record, COL_SUBJECT);
        if subject.is_empty() {
            warn!("skipping CSV row {}: empty subject", line + 2);
            skipped += 1;
            continue;
        }

        let mut activity = ActivityRecord::new(project_id, subject);
        activity.start_date = parse_optional_date(&field(&record, COL_START));
        activity.due_date = parse_optional_date(&field(&record, COL_DUE));
        activity.status = parse_status(&field(&record, COL_STATUS));
        activity.assignee = field(&record, COL_ASSIGNEE);
        activity.approver = field(&record, COL_APPROVER);
        activity.progress = field(&record, COL_PROGRESS)
            .parse::<u8>()
            .map(|p| p.min(100))
            .unwrap_or(0);
        activities.push(activity);
    }

    Ok((activities, skipped))
}
