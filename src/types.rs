//! Shared types serialized between pipeline stages.
//!
//! A [`GalleryEvent`] is written to disk by the publish stage and read back
//! by the store, so the schema here is the artifact format. Field names are
//! serialized in camelCase because the site's presentation layer consumes
//! the artifacts as-is.

use serde::{Deserialize, Serialize};

/// One club activity with its photo set, as published to `<data_dir>/<id>.json`.
///
/// Built once per scan from a single event directory; never mutated after
/// assembly. The next scan regenerates it from scratch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEvent {
    /// Event identifier: the directory name under the content root.
    pub id: String,
    /// Title, verbatim from `metadata.json`.
    pub title: String,
    /// Description, verbatim from `metadata.json`.
    pub description: String,
    /// Date string, verbatim from `metadata.json`. Parsing happens only
    /// when the store orders events; the record never reinterprets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Site-absolute route of the cover image. The cover is hoisted out of
    /// [`images`](Self::images), never duplicated there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Non-cover images in enumeration order.
    pub images: Vec<GalleryImage>,
}

/// A single image belonging to exactly one event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    /// Site-absolute route, e.g. `/gallery/2024-spring-classic/climb.jpg`.
    pub src: String,
    /// Alt text derived from the filename (see [`crate::naming`]).
    pub alt: String,
    /// Caption; defaults to the alt text when no better source exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}
