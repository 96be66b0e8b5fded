//! Gallery content scanning.
//!
//! Stage 1 of the velopress pipeline. Scans the gallery content root for
//! event directories and assembles one [`GalleryEvent`] per usable
//! directory, producing a [`ScanReport`] the publish stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! public/gallery/                      # Content root
//! ├── README.md                        # Reserved, never an event
//! ├── 2024-04-21-spring-classic/       # Event directory
//! │   ├── metadata.json                # Required: title, description, date
//! │   ├── cover-start.jpg              # "cover" in the name → cover image
//! │   ├── climb_to_the_muur.jpg
//! │   └── finish-sprint.jpg
//! ├── 2024-06-02-club-weekend/
//! │   ├── metadata.json
//! │   └── group_photo.jpg              # No marker → first image is cover
//! └── .drafts/                         # Hidden, skipped
//! ```
//!
//! ## Isolation
//!
//! One broken event must never abort the scan. Every per-event failure —
//! missing or unparsable metadata, an empty image set, an I/O error while
//! listing files — is logged, recorded as a [`Skip`] in the report, and
//! the scan moves on. The only way to get an empty result is an empty (or
//! missing, or unlistable) content root, and even that is a warning, not
//! an error: the site builds with an empty gallery rather than failing.
//!
//! ## Determinism
//!
//! Directory entries are processed in lexicographic filename order, so the
//! same content tree always yields the same report and, downstream,
//! byte-identical artifacts.

use crate::naming;
use crate::types::{GalleryEvent, GalleryImage};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reserved filename that is never treated as an event directory.
const RESERVED_README: &str = "README.md";

/// Per-event metadata file name.
pub const METADATA_FILENAME: &str = "metadata.json";

/// Outcome of scanning the content root.
#[derive(Debug)]
pub struct ScanReport {
    /// Successfully assembled events, in enumeration order. No sort is
    /// applied here; date ordering is the store's concern.
    pub events: Vec<GalleryEvent>,
    /// Event directories that were rejected, with the reason. Hidden
    /// entries, `README.md`, and plain files are not recorded — only
    /// directories that looked like events and failed.
    pub skipped: Vec<Skip>,
}

impl ScanReport {
    fn empty() -> Self {
        Self {
            events: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// A rejected event directory.
#[derive(Debug)]
pub struct Skip {
    /// Directory name under the content root.
    pub dir: String,
    pub reason: SkipReason,
}

/// Why an event directory was rejected.
#[derive(Debug)]
pub enum SkipReason {
    /// `metadata.json` missing or unreadable.
    MissingMetadata,
    /// `metadata.json` present but not valid JSON for the expected shape.
    BadMetadata(String),
    /// No files with a recognized image extension.
    NoImages,
    /// I/O failure while listing the event directory.
    Io(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingMetadata => write!(f, "no {METADATA_FILENAME}"),
            SkipReason::BadMetadata(err) => write!(f, "invalid {METADATA_FILENAME}: {err}"),
            SkipReason::NoImages => write!(f, "no images"),
            SkipReason::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

/// Shape of `metadata.json`. Unknown keys are ignored — the site's
/// metadata files carry extra presentation fields this stage never reads.
#[derive(Debug, Deserialize)]
struct EventMetadata {
    title: String,
    description: String,
    #[serde(default)]
    date: Option<String>,
}

/// Scan the content root into a [`ScanReport`].
///
/// `route` is the site-absolute URL prefix for image sources, normally
/// from [`crate::config::GalleryConfig::route`]. A missing or unlistable
/// root yields an empty report with a warning; it is not an error.
///
/// Single pass, not restartable: a fresh call re-scans from scratch.
pub fn scan(root: &Path, route: &str) -> ScanReport {
    if !root.is_dir() {
        warn!("gallery content root not found: {}", root.display());
        return ScanReport::empty();
    }

    let entries = match list_sorted(root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("cannot list gallery content root {}: {err}", root.display());
            return ScanReport::empty();
        }
    };

    let mut report = ScanReport::empty();

    for entry in entries {
        let Some(name) = entry.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if name.starts_with('.') || name == RESERVED_README {
            continue;
        }
        if !entry.is_dir() {
            continue;
        }

        match build_event(&entry, &name, route) {
            Ok(event) => report.events.push(event),
            Err(reason) => {
                warn!("skipping event directory {name}: {reason}");
                report.skipped.push(Skip { dir: name, reason });
            }
        }
    }

    report
}

/// Assemble one event from its directory. Any failure rejects the whole
/// directory; the caller records the reason and keeps scanning.
fn build_event(dir: &Path, dir_name: &str, route: &str) -> Result<GalleryEvent, SkipReason> {
    let metadata = read_metadata(dir)?;

    let image_files = list_image_files(dir)?;
    if image_files.is_empty() {
        return Err(SkipReason::NoImages);
    }

    // Cover: first filename carrying the marker, else the first image.
    let cover = image_files
        .iter()
        .find(|name| naming::has_cover_marker(name))
        .unwrap_or(&image_files[0])
        .clone();

    let images = image_files
        .iter()
        .filter(|name| **name != cover)
        .map(|name| {
            let alt = naming::alt_text(name);
            GalleryImage {
                src: image_route(route, dir_name, name),
                alt: alt.clone(),
                caption: Some(alt),
            }
        })
        .collect();

    Ok(GalleryEvent {
        id: dir_name.to_string(),
        title: metadata.title,
        description: metadata.description,
        date: metadata.date,
        cover_image: Some(image_route(route, dir_name, &cover)),
        images,
    })
}

fn read_metadata(dir: &Path) -> Result<EventMetadata, SkipReason> {
    let content = fs::read_to_string(dir.join(METADATA_FILENAME))
        .map_err(|_| SkipReason::MissingMetadata)?;
    serde_json::from_str(&content).map_err(|err| SkipReason::BadMetadata(err.to_string()))
}

/// Image filenames in the event directory, lexicographically ordered.
/// The metadata file is excluded explicitly, everything else by extension.
fn list_image_files(dir: &Path) -> Result<Vec<String>, SkipReason> {
    let entries = list_sorted(dir).map_err(|err| SkipReason::Io(err.to_string()))?;
    let names = entries
        .iter()
        .filter(|path| path.is_file())
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .filter(|name| name != METADATA_FILENAME && naming::is_image_name(name))
        .collect();
    Ok(names)
}

fn list_sorted(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();
    Ok(entries)
}

fn image_route(route: &str, dir_name: &str, file_name: &str) -> String {
    format!("{route}/{dir_name}/{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    const ROUTE: &str = "/gallery";

    #[test]
    fn missing_root_yields_empty_report() {
        let tmp = tempfile::TempDir::new().unwrap();
        let report = scan(&tmp.path().join("does-not-exist"), ROUTE);
        assert!(report.events.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn empty_root_yields_empty_report() {
        let tmp = tempfile::TempDir::new().unwrap();
        let report = scan(tmp.path(), ROUTE);
        assert!(report.events.is_empty());
    }

    #[test]
    fn root_with_only_files_yields_empty_report() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("stray.jpg"), "x").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        let report = scan(tmp.path(), ROUTE);
        assert!(report.events.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn scan_assembles_event_from_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "2024-04-21-spring-classic",
            r#"{"title": "Spring Classic", "description": "Opening ride", "date": "2024-04-21"}"#,
            &["cover-start.jpg", "climb.jpg", "finish.jpg"],
        );

        let report = scan(tmp.path(), ROUTE);
        let event = find_event(&report, "2024-04-21-spring-classic");

        assert_eq!(event.title, "Spring Classic");
        assert_eq!(event.description, "Opening ride");
        assert_eq!(event.date.as_deref(), Some("2024-04-21"));
        assert_eq!(
            event.cover_image.as_deref(),
            Some("/gallery/2024-04-21-spring-classic/cover-start.jpg")
        );
    }

    #[test]
    fn hidden_and_reserved_entries_are_silently_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(tmp.path(), ".drafts", r#"{"title": "x", "description": "y"}"#, &["a.jpg"]);
        std::fs::write(tmp.path().join("README.md"), "# Gallery").unwrap();
        write_event(tmp.path(), "ride", r#"{"title": "x", "description": "y"}"#, &["a.jpg"]);

        let report = scan(tmp.path(), ROUTE);
        assert_eq!(event_ids(&report), vec!["ride"]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn event_without_metadata_is_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("no-meta");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("a.jpg"), "x").unwrap();

        let report = scan(tmp.path(), ROUTE);
        assert!(report.events.is_empty());
        assert!(matches!(report.skipped[0].reason, SkipReason::MissingMetadata));
    }

    #[test]
    fn event_with_unparsable_metadata_is_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(tmp.path(), "bad-meta", "{not json", &["a.jpg"]);

        let report = scan(tmp.path(), ROUTE);
        assert!(report.events.is_empty());
        assert!(matches!(report.skipped[0].reason, SkipReason::BadMetadata(_)));
    }

    #[test]
    fn event_with_no_images_is_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(tmp.path(), "meta-only", r#"{"title": "x", "description": "y"}"#, &[]);

        let report = scan(tmp.path(), ROUTE);
        assert!(report.events.is_empty());
        assert!(matches!(report.skipped[0].reason, SkipReason::NoImages));
    }

    #[test]
    fn one_bad_event_never_aborts_the_scan() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(tmp.path(), "a-broken", "{not json", &["a.jpg"]);
        write_event(tmp.path(), "b-good", r#"{"title": "x", "description": "y"}"#, &["a.jpg"]);
        write_event(tmp.path(), "c-empty", r#"{"title": "x", "description": "y"}"#, &[]);

        let report = scan(tmp.path(), ROUTE);
        assert_eq!(event_ids(&report), vec!["b-good"]);
        assert_eq!(report.skipped.len(), 2);
    }

    #[test]
    fn cover_marker_wins_and_is_hoisted_out_of_images() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "ride",
            r#"{"title": "x", "description": "y"}"#,
            &["a.jpg", "cover-start.jpg", "b.jpg"],
        );

        let report = scan(tmp.path(), ROUTE);
        let event = find_event(&report, "ride");

        assert_eq!(event.cover_image.as_deref(), Some("/gallery/ride/cover-start.jpg"));
        let srcs: Vec<&str> = event.images.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["/gallery/ride/a.jpg", "/gallery/ride/b.jpg"]);
    }

    #[test]
    fn first_image_is_cover_when_no_marker_matches() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "ride",
            r#"{"title": "x", "description": "y"}"#,
            &["b.jpg", "a.jpg", "c.jpg"],
        );

        let report = scan(tmp.path(), ROUTE);
        let event = find_event(&report, "ride");

        // Enumeration order is lexicographic, so a.jpg is first.
        assert_eq!(event.cover_image.as_deref(), Some("/gallery/ride/a.jpg"));
        assert_eq!(event.images.len(), 2);
    }

    #[test]
    fn alt_text_and_caption_derived_from_filename() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "ride",
            r#"{"title": "x", "description": "y"}"#,
            &["cover.jpg", "my_cool-ride.jpg"],
        );

        let report = scan(tmp.path(), ROUTE);
        let event = find_event(&report, "ride");

        assert_eq!(event.images[0].alt, "my cool ride");
        assert_eq!(event.images[0].caption.as_deref(), Some("my cool ride"));
    }

    #[test]
    fn non_image_files_are_ignored() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "ride",
            r#"{"title": "x", "description": "y"}"#,
            &["a.jpg", "track.gpx", "notes.txt"],
        );

        let report = scan(tmp.path(), ROUTE);
        let event = find_event(&report, "ride");

        // a.jpg becomes the cover; nothing else qualifies as an image.
        assert_eq!(event.cover_image.as_deref(), Some("/gallery/ride/a.jpg"));
        assert!(event.images.is_empty());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "ride",
            r#"{"title": "x", "description": "y"}"#,
            &["cover.JPG", "finish.PNG", "sprint.WebP"],
        );

        let report = scan(tmp.path(), ROUTE);
        let event = find_event(&report, "ride");
        assert_eq!(event.images.len(), 2);
    }

    #[test]
    fn metadata_date_is_optional_and_unknown_keys_are_ignored() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "ride",
            r#"{"title": "x", "description": "y", "location": "Meilsen"}"#,
            &["a.jpg"],
        );

        let report = scan(tmp.path(), ROUTE);
        let event = find_event(&report, "ride");
        assert!(event.date.is_none());
    }

    #[test]
    fn events_come_back_in_enumeration_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        for dir in ["zzz-late", "aaa-early", "mmm-middle"] {
            write_event(tmp.path(), dir, r#"{"title": "x", "description": "y"}"#, &["a.jpg"]);
        }

        let report = scan(tmp.path(), ROUTE);
        assert_eq!(event_ids(&report), vec!["aaa-early", "mmm-middle", "zzz-late"]);
    }
}
