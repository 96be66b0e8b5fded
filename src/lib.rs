//! # velopress
//!
//! Build-time data generator for a cycling club website. Your filesystem
//! is the data source: event directories under the gallery root become
//! published JSON records, and a members feed snapshot becomes the rider
//! leaderboard. The website itself stays static — everything here runs
//! once at build time.
//!
//! # Architecture: Independent Stages
//!
//! velopress processes content through small independent stages, each
//! producing JSON the next consumer reads:
//!
//! ```text
//! 1. Scan      public/gallery/  →  event records     (filesystem → structured data)
//! 2. Publish   event records    →  src/data/gallery/ (one <id>.json per event)
//! 3. Store     data dir         →  list / lookup     (what the site consumes)
//!    Stats     members.json     →  leaderboard       (independent of the gallery)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: every artifact is human-readable JSON you can inspect.
//! - **Incremental publishing**: unchanged artifacts are never rewritten,
//!   so downstream tooling watching the data dir sees only real changes.
//! - **Testability**: scanning, publishing, and ranking are plain functions
//!   exercised directly by unit tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the gallery content root, assembles one event record per usable directory |
//! | [`publish`] | Writes per-event JSON artifacts with content-hash change detection and pruning |
//! | [`store`] | Reads artifacts back: list-all (newest first) and lookup-by-id |
//! | [`stats`] | Rider leaderboard: competition ranking with a pinned-rider override |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | The artifact schema (`GalleryEvent`, `GalleryImage`) |
//! | [`naming`] | Filename conventions: alt text and the cover marker |
//! | [`output`] | CLI output formatting — information-first display of results |
//!
//! # Design Decisions
//!
//! ## Warn-and-Skip Content Handling
//!
//! Nothing in the content tree can fail the build. A directory with broken
//! metadata, no images, or unreadable files is skipped with a warning and
//! recorded in the scan report; the worst case for the site is an empty
//! gallery. The skips are surfaced in CLI output so the degradation is
//! visible rather than silent. Config errors, by contrast, are fatal:
//! they are operator mistakes, not content drift.
//!
//! ## Deterministic Artifacts
//!
//! Directory entries are processed in lexicographic order and artifacts
//! are serialized with a fixed field order, so the same content tree
//! always produces byte-identical output. Publish detects this with
//! content hashes and leaves unchanged artifacts untouched.
//!
//! ## No Network at Build Time
//!
//! The members leaderboard reads a local snapshot of the club's members
//! feed rather than calling the API. Fetching is the deploy pipeline's
//! job; this tool stays a pure filesystem-in, filesystem-out step.

pub mod config;
pub mod naming;
pub mod output;
pub mod publish;
pub mod scan;
pub mod stats;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
