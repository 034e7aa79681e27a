use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::helpers::{build_url, extension_of, folder_of, format_size, iso_timestamp};

/// One regular file found under the storage root.
///
/// Serialized with camelCase keys; this is the shape web consumers read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Root-relative path with `/` separators, unique across one scan.
    pub id: String,
    /// File name including extension
    pub name: String,
    /// Lowercase extension without dot e.g., 'pdf', or "unknown"
    pub extension: String,
    pub size_bytes: u64,
    /// Size in KiB with two decimals, e.g. "1.50 KB"
    pub size_display: String,
    /// Last modification time, UTC ISO-8601 with milliseconds
    pub modified_at: String,
    /// Root-relative directory, "" for files directly under the root
    pub relative_folder: String,
    /// Folder segments followed by the file name
    pub path_segments: Vec<String>,
    /// Public URL under the mount prefix
    pub url: String,
}

impl FileRecord {
    /// True when the file sits directly under the root.
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.relative_folder.is_empty()
    }

    /// Derive a record from a file's root-relative web path and metadata.
    ///
    /// `web_path` must be non-empty and `/`-separated.
    pub fn new(
        web_path: String,
        size_bytes: u64,
        modified: Option<SystemTime>,
        mount_prefix: &str,
    ) -> Self {
        let path_segments: Vec<String> = web_path.split('/').map(str::to_owned).collect();
        let name = path_segments.last().cloned().unwrap_or_default();

        FileRecord {
            extension: extension_of(&name),
            size_display: format_size(size_bytes),
            modified_at: iso_timestamp(modified),
            relative_folder: folder_of(&web_path).to_owned(),
            url: build_url(mount_prefix, &web_path),
            path_segments,
            name,
            size_bytes,
            id: web_path,
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
