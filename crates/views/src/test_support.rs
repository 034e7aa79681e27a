use std::time::{Duration, UNIX_EPOCH};

use fileshelf_fs::{FileRecord, locale_cmp};

/// Record for `web_path` with the given size and mtime (seconds since epoch).
pub fn record(web_path: &str, size_bytes: u64, mtime_secs: u64) -> FileRecord {
    FileRecord::new(
        web_path.to_owned(),
        size_bytes,
        Some(UNIX_EPOCH + Duration::from_secs(mtime_secs)),
        "/files",
    )
}

/// Index in scan order (sorted by name) built from `(path, size, mtime)`.
pub fn index(entries: &[(&str, u64, u64)]) -> Vec<FileRecord> {
    let mut records: Vec<FileRecord> = entries
        .iter()
        .map(|(path, size, mtime)| record(path, *size, *mtime))
        .collect();
    records.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    records
}

pub fn ids<'a>(records: &[&'a FileRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
