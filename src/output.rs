//! CLI output formatting for all commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary
//! display for every entity is its semantic identity — positional index
//! and title — with filesystem detail shown as indented context lines.
//! This reads as a content inventory while still letting users trace data
//! back to specific files.
//!
//! ```text
//! Events
//! 001 Spring Classic (4 photos)
//!     Source: 2024-04-21-spring-classic/
//!     Date: 2024-04-21
//!     Cover: cover-start.jpg
//!
//! Skipped
//!     drafts: no metadata.json
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects. Diagnostics go to the
//! tracing stream, never into these lines.

use crate::publish::PublishReport;
use crate::scan::ScanReport;
use crate::stats::RankedRider;
use crate::types::GalleryEvent;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format an entity header: positional index + title + photo count.
fn entity_header(index: usize, title: &str, photos: usize) -> String {
    format!("{} {} ({} photos)", format_index(index), title, photos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Last path segment of an image route, for display.
fn route_file_name(route: &str) -> &str {
    route.rsplit('/').next().unwrap_or(route)
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan results: discovered events first, skipped directories last.
pub fn format_scan_output(report: &ScanReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Events".to_string());
    if report.events.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, event) in report.events.iter().enumerate() {
        // Photo count includes the hoisted cover.
        let photos = event.images.len() + event.cover_image.is_some() as usize;
        lines.push(entity_header(i + 1, &event.title, photos));
        lines.push(format!("    Source: {}/", event.id));
        if let Some(ref date) = event.date {
            lines.push(format!("    Date: {}", date));
        }
        if let Some(ref cover) = event.cover_image {
            lines.push(format!("    Cover: {}", route_file_name(cover)));
        }
        let desc = truncate_desc(event.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("    {}", desc));
        }
    }

    if !report.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skip in &report.skipped {
            lines.push(format!("    {}: {}", skip.dir, skip.reason));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(report: &ScanReport) {
    for line in format_scan_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Publish output
// ============================================================================

/// Format publish results: per-artifact status plus a summary line.
pub fn format_publish_output(report: &PublishReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, artifact) in report.artifacts.iter().enumerate() {
        lines.push(format!(
            "{} {}.json: {}",
            format_index(i + 1),
            artifact.id,
            artifact.status
        ));
    }
    for name in &report.pruned {
        lines.push(format!("    pruned {}", name));
    }
    lines.push(format!(
        "Published {} artifacts ({} written, {} unchanged, {} failed)",
        report.artifacts.len(),
        report.written(),
        report.unchanged(),
        report.failed()
    ));

    lines
}

/// Print publish output to stdout.
pub fn print_publish_output(report: &PublishReport) {
    for line in format_publish_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// List output
// ============================================================================

/// Format the published event listing (store order: newest first).
pub fn format_list_output(events: &[GalleryEvent]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Published events".to_string());
    if events.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, event) in events.iter().enumerate() {
        let photos = event.images.len() + event.cover_image.is_some() as usize;
        lines.push(entity_header(i + 1, &event.title, photos));
        lines.push(format!("    Source: {}.json", event.id));
        if let Some(ref date) = event.date {
            lines.push(format!("    Date: {}", date));
        }
    }

    lines
}

/// Print the event listing to stdout.
pub fn print_list_output(events: &[GalleryEvent]) {
    for line in format_list_output(events) {
        println!("{}", line);
    }
}

// ============================================================================
// Stats output
// ============================================================================

/// Format the leaderboard: rank, name, ride count.
pub fn format_stats_output(leaderboard: &[RankedRider]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Leaderboard".to_string());
    lines.push(format!("    {} riders", leaderboard.len()));
    for entry in leaderboard {
        lines.push(format!(
            "{:>3}  {} ({} rides)",
            entry.rank, entry.rider.name, entry.rider.ride_count
        ));
    }

    lines
}

/// Print the leaderboard to stdout.
pub fn print_stats_output(leaderboard: &[RankedRider]) {
    for line in format_stats_output(leaderboard) {
        println!("{}", line);
    }
}
