//! Artifact publishing for scanned events.
//!
//! Stage 2 of the pipeline: writes one JSON artifact per event into the
//! data directory, keyed by event id (`<data_dir>/<id>.json`). The
//! presentation layer looks artifacts up by id or lists them all; nothing
//! is recomputed at request time.
//!
//! ## Change detection
//!
//! Artifacts are content-addressed: an artifact is rewritten only when the
//! SHA-256 of its serialized bytes differs from what is already on disk.
//! Content-based rather than mtime-based, so it survives `git checkout`
//! (which resets modification times). Re-running publish on an unchanged
//! content tree leaves every artifact byte-identical and untouched.
//!
//! ## Pruning
//!
//! Artifacts whose event no longer exists are removed, so a list-all over
//! the data dir never resurrects a deleted event. Only `*.json` files are
//! considered; anything else in the data dir is left alone.
//!
//! ## Isolation
//!
//! A failure writing one artifact marks that event `Failed` and moves on.
//! Only the data directory itself being uncreatable is an error.

use crate::types::GalleryEvent;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("cannot create data directory: {0}")]
    CreateDataDir(#[from] io::Error),
}

/// Per-artifact outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// Artifact was written (new, or content changed).
    Written,
    /// On-disk artifact already had identical content.
    Unchanged,
    /// Serialization or write failed; the event was not published.
    Failed(String),
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactStatus::Written => write!(f, "written"),
            ArtifactStatus::Unchanged => write!(f, "unchanged"),
            ArtifactStatus::Failed(err) => write!(f, "failed: {err}"),
        }
    }
}

/// One published (or attempted) artifact.
#[derive(Debug)]
pub struct Artifact {
    pub id: String,
    pub status: ArtifactStatus,
}

/// Outcome of a publish run.
#[derive(Debug)]
pub struct PublishReport {
    /// One entry per event, in scan order.
    pub artifacts: Vec<Artifact>,
    /// Stale artifact filenames removed from the data dir.
    pub pruned: Vec<String>,
}

impl PublishReport {
    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, ArtifactStatus::Written))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|s| matches!(s, ArtifactStatus::Unchanged))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ArtifactStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&ArtifactStatus) -> bool) -> usize {
        self.artifacts.iter().filter(|a| pred(&a.status)).count()
    }
}

/// Publish events into `data_dir`, one `<id>.json` per event.
pub fn publish(events: &[GalleryEvent], data_dir: &Path) -> Result<PublishReport, PublishError> {
    fs::create_dir_all(data_dir)?;

    let mut artifacts = Vec::with_capacity(events.len());
    for event in events {
        let status = publish_event(event, data_dir);
        if let ArtifactStatus::Failed(ref err) = status {
            warn!("failed to publish event {}: {err}", event.id);
        }
        artifacts.push(Artifact {
            id: event.id.clone(),
            status,
        });
    }

    let pruned = prune_stale(events, data_dir);

    Ok(PublishReport { artifacts, pruned })
}

fn publish_event(event: &GalleryEvent, data_dir: &Path) -> ArtifactStatus {
    let json = match serde_json::to_string_pretty(event) {
        Ok(json) => json,
        Err(err) => return ArtifactStatus::Failed(err.to_string()),
    };

    let path = artifact_path(data_dir, &event.id);
    if let Ok(existing) = fs::read(&path)
        && digest(&existing) == digest(json.as_bytes())
    {
        debug!("artifact unchanged: {}", path.display());
        return ArtifactStatus::Unchanged;
    }

    match fs::write(&path, &json) {
        Ok(()) => {
            debug!("artifact written: {}", path.display());
            ArtifactStatus::Written
        }
        Err(err) => ArtifactStatus::Failed(err.to_string()),
    }
}

/// Remove `*.json` artifacts with no corresponding scanned event.
fn prune_stale(events: &[GalleryEvent], data_dir: &Path) -> Vec<String> {
    let live: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();

    let entries = match fs::read_dir(data_dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("cannot list data directory {}: {err}", data_dir.display());
            return Vec::new();
        }
    };

    let mut stale: Vec<(PathBuf, String)> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|p| {
            let name = p.file_name()?.to_string_lossy().into_owned();
            let stem = p.file_stem()?.to_string_lossy().into_owned();
            (!live.contains(stem.as_str())).then_some((p, name))
        })
        .collect();
    stale.sort();

    let mut pruned = Vec::new();
    for (path, name) in stale {
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("pruned stale artifact: {}", path.display());
                pruned.push(name);
            }
            Err(err) => warn!("cannot prune stale artifact {}: {err}", path.display()),
        }
    }
    pruned
}

/// Deterministic artifact location for an event id.
pub fn artifact_path(data_dir: &Path, id: &str) -> PathBuf {
    data_dir.join(format!("{id}.json"))
}

fn digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
