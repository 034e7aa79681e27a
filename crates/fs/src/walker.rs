use std::{
    fs::{self, DirEntry, read_dir},
    io::{self, ErrorKind, Result},
    path::{Path, PathBuf},
    time::Instant,
};

use fileshelf_runtime::PUBLIC_MOUNT_PREFIX;
use log::{debug, warn};

use crate::{
    collation::locale_cmp,
    helpers::{is_hidden, to_web_path},
    record::FileRecord,
};

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Public mount point prepended to every record's URL.
    pub mount_prefix: String,

    /// Deepest directory level to descend into, the root being level 0.
    /// `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mount_prefix: PUBLIC_MOUNT_PREFIX.to_owned(),
            max_depth: None,
        }
    }
}

struct PendingDir {
    path: PathBuf,
    depth: usize,
}

enum Inspected {
    Dir(PathBuf),
    File(FileRecord),
}

/// Index every visible regular file under `root`, sorted by name.
///
/// A missing root yields an empty index.
pub fn scan(root: &Path) -> Vec<FileRecord> {
    scan_with(root, &ScanOptions::default())
}

/// Like [`scan`], with an explicit mount prefix and depth limit.
///
/// Never fails: unreadable directories and entries are logged and skipped.
/// Symlinks are not descended into; a symlink to a regular file is indexed
/// with its target's metadata.
pub fn scan_with(root: &Path, opts: &ScanOptions) -> Vec<FileRecord> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            warn!("[scan] root {:?} is not a directory", root);
            return Vec::new();
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("[scan] root {:?} does not exist, index is empty", root);
            return Vec::new();
        }
        Err(e) => {
            warn!("[scan] cannot stat root {:?}: {e}", root);
            return Vec::new();
        }
    }

    let started = Instant::now();
    let mut records = Vec::new();
    let mut pending = vec![PendingDir {
        path: root.to_path_buf(),
        depth: 0,
    }];

    while let Some(dir) = pending.pop() {
        scan_dir(root, &dir, opts, &mut pending, &mut records);
    }

    // Stable: files sharing a name keep traversal order.
    records.sort_by(|a, b| locale_cmp(&a.name, &b.name));

    debug!(
        "[scan] indexed {} files under {:?} in {:.2}ms",
        records.len(),
        root,
        started.elapsed().as_secs_f64() * 1000.0
    );

    records
}

/// Read one directory, queueing subdirectories and collecting file records.
fn scan_dir(
    root: &Path,
    dir: &PendingDir,
    opts: &ScanOptions,
    pending: &mut Vec<PendingDir>,
    out: &mut Vec<FileRecord>,
) {
    let rd = match read_dir(&dir.path) {
        Ok(rd) => rd,
        Err(e) => {
            warn!("[scan] read_dir({:?}) failed: {e}", dir.path);
            return;
        }
    };

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[scan] error reading entry in {:?}: {e}", dir.path);
                continue;
            }
        };

        match inspect_entry(root, &entry, &opts.mount_prefix) {
            Ok(Some(Inspected::Dir(path))) => {
                let depth = dir.depth + 1;
                if opts.max_depth.is_some_and(|max| depth > max) {
                    warn!("[scan] {:?} exceeds max depth, not descending", path);
                    continue;
                }
                pending.push(PendingDir { path, depth });
            }
            Ok(Some(Inspected::File(record))) => out.push(record),
            Ok(None) => {}
            Err(e) => {
                warn!("[scan] skipping {:?}: {e}", entry.path());
            }
        }
    }
}

fn inspect_entry(root: &Path, entry: &DirEntry, mount_prefix: &str) -> Result<Option<Inspected>> {
    let name_os = entry.file_name();
    let Some(name) = name_os.to_str() else {
        debug!("[scan] skipping non UTF-8 name {:?}", entry.path());
        return Ok(None);
    };

    if is_hidden(name) {
        return Ok(None);
    }

    let full_path = entry.path();
    let file_type = entry.file_type()?;

    let metadata = if file_type.is_dir() {
        return Ok(Some(Inspected::Dir(full_path)));
    } else if file_type.is_file() {
        entry.metadata()?
    } else if file_type.is_symlink() {
        match fs::metadata(&full_path) {
            Ok(target) if target.is_file() => target,
            Ok(_) => {
                debug!("[scan] not following symlink {:?}", full_path);
                return Ok(None);
            }
            Err(e) => {
                debug!("[scan] dangling symlink {:?}: {e}", full_path);
                return Ok(None);
            }
        }
    } else {
        debug!("[scan] skipping special file {:?}", full_path);
        return Ok(None);
    };

    let relative = full_path.strip_prefix(root).map_err(io::Error::other)?;
    let Some(web_path) = to_web_path(relative) else {
        debug!("[scan] cannot express {:?} as a web path", relative);
        return Ok(None);
    };

    Ok(Some(Inspected::File(FileRecord::new(
        web_path,
        metadata.len(),
        metadata.modified().ok(),
        mount_prefix,
    ))))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
