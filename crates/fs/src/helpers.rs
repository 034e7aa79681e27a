use std::{
    path::{Component, Path},
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, SecondsFormat, Utc};

/// Extension reported for files without one.
pub const UNKNOWN_EXTENSION: &str = "unknown";

const BYTES_PER_KIB: u64 = 1024;

/// Dot-files and dot-directories are never indexed.
#[inline]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lowercased text after the last `.` of a file name.
///
/// A name with no dot, a trailing dot, or only a leading dot has no
/// extension and yields `"unknown"`.
pub fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
        _ => UNKNOWN_EXTENSION.to_owned(),
    }
}

/// Render a byte count as KiB with two decimals, e.g. `"1.50 KB"`.
///
/// Rounds half up in integer arithmetic so values such as 128 bytes
/// (0.125 KiB) come out as `"0.13 KB"`.
pub fn format_size(bytes: u64) -> String {
    let hundredths = (u128::from(bytes) * 100 + u128::from(BYTES_PER_KIB / 2))
        / u128::from(BYTES_PER_KIB);
    format!("{}.{:02} KB", hundredths / 100, hundredths % 100)
}

/// UTC ISO-8601 timestamp with millisecond precision, e.g.
/// `2024-05-01T10:20:30.123Z`. Missing times map to the Unix epoch.
pub fn iso_timestamp(t: Option<SystemTime>) -> String {
    let dt: DateTime<Utc> = t.unwrap_or(UNIX_EPOCH).into();
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Join the components of a root-relative path with `/`.
///
/// Returns `None` for non-UTF-8 components or anything that is not a plain
/// relative path.
pub fn to_web_path(relative: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(os) => parts.push(os.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if parts.is_empty() {
        return None;
    }

    Some(parts.join("/"))
}

/// Directory part of a web path, `""` when the path has a single segment.
#[inline]
pub fn folder_of(web_path: &str) -> &str {
    web_path.rsplit_once('/').map_or("", |(folder, _)| folder)
}

/// Prefix a web path with the public mount point.
pub fn build_url(mount_prefix: &str, web_path: &str) -> String {
    let prefix = mount_prefix.trim_end_matches('/');
    format!("{prefix}/{web_path}")
}

#[cfg(test)]
#[path = "helpers_tests.rs"]
mod tests;
