//! Shared test utilities for the velopress test suite.
//!
//! Provides content-tree builders for scan tests and canned event records
//! for publish/store/output tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! write_event(tmp.path(), "ride", r#"{"title": "x", "description": "y"}"#, &["a.jpg"]);
//! let report = scan(tmp.path(), "/gallery");
//! let event = find_event(&report, "ride");
//! ```

use std::fs;
use std::path::Path;

use crate::scan::ScanReport;
use crate::types::{GalleryEvent, GalleryImage};

// =========================================================================
// Content-tree builders
// =========================================================================

/// Create an event directory under `root` with a metadata file (written
/// verbatim, so tests can plant invalid JSON) and empty image files.
pub fn write_event(root: &Path, dir_name: &str, metadata_json: &str, files: &[&str]) {
    let dir = root.join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("metadata.json"), metadata_json).unwrap();
    for file in files {
        fs::write(dir.join(file), "fake image").unwrap();
    }
}

// =========================================================================
// Canned records
// =========================================================================

/// An assembled event with a cover and two listed images, no date.
pub fn sample_event(id: &str) -> GalleryEvent {
    let image = |name: &str| {
        let alt = name.replace(['-', '_'], " ");
        GalleryImage {
            src: format!("/gallery/{id}/{name}.jpg"),
            alt: alt.clone(),
            caption: Some(alt),
        }
    };
    GalleryEvent {
        id: id.to_string(),
        title: format!("Event {id}"),
        description: "Club ride.".to_string(),
        date: None,
        cover_image: Some(format!("/gallery/{id}/cover.jpg")),
        images: vec![image("start_line"), image("finish-sprint")],
    }
}

/// [`sample_event`] with a date string.
pub fn dated_event(id: &str, date: &str) -> GalleryEvent {
    GalleryEvent {
        date: Some(date.to_string()),
        ..sample_event(id)
    }
}

// =========================================================================
// Report lookups — panics with a clear message on miss
// =========================================================================

/// Find an event by id in a scan report. Panics if not found.
pub fn find_event<'a>(report: &'a ScanReport, id: &str) -> &'a GalleryEvent {
    report
        .events
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| {
            let ids = event_ids(report);
            panic!("event '{id}' not found. Available: {ids:?}")
        })
}

/// All event ids in report order.
pub fn event_ids(report: &ScanReport) -> Vec<&str> {
    report.events.iter().map(|e| e.id.as_str()).collect()
}
