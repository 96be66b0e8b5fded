//! Reading published event artifacts.
//!
//! The consumption side of the data dir: list every published event or
//! look one up by id. This is what the site's presentation layer does
//! with the artifacts; the `list` CLI command uses it too.
//!
//! Listing is tolerant the same way scanning is — a corrupt artifact is
//! warned about and skipped, never fatal. Lookup by id is a direct read
//! of the keyed artifact path, no directory walk.

use crate::publish::artifact_path;
use crate::types::GalleryEvent;
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt artifact: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load all published events, newest first.
///
/// Events are ordered by date descending; events without a date (or with
/// a date the store cannot parse) sort last, keeping their artifact
/// filename order among themselves. A missing data dir means no events.
pub fn load_events(data_dir: &Path) -> Vec<GalleryEvent> {
    let entries = match fs::read_dir(data_dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("cannot list data directory {}: {err}", data_dir.display());
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut events = Vec::with_capacity(paths.len());
    for path in paths {
        match read_artifact(&path) {
            Ok(event) => events.push(event),
            Err(err) => warn!("skipping artifact {}: {err}", path.display()),
        }
    }

    // Stable sort: dateless events keep their relative order at the end.
    events.sort_by(|a, b| match (sort_date(a), sort_date(b)) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    events
}

/// Look up one published event by id. `Ok(None)` when no artifact exists.
pub fn load_event(data_dir: &Path, id: &str) -> Result<Option<GalleryEvent>, StoreError> {
    let path = artifact_path(data_dir, id);
    if !path.is_file() {
        return Ok(None);
    }
    Ok(Some(read_artifact(&path)?))
}

fn read_artifact(path: &Path) -> Result<GalleryEvent, StoreError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Date ordering key: ISO calendar date, or `None` for missing/unparsable.
/// The record keeps its date string verbatim either way.
fn sort_date(event: &GalleryEvent) -> Option<NaiveDate> {
    let date = event.date.as_deref()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
