use std::path::{Path, PathBuf};

pub const PROGRAM_NAME: &str = "fileshelf";
pub const PROGRAM_LOG_LEVEL: &str = "FILESHELF_LOG_LEVEL";

/// Environment variable overriding the storage root.
pub const STORAGE_ROOT_ENV: &str = "FILESHELF_ROOT";

/// Storage directory, relative to the working directory, used when
/// `FILESHELF_ROOT` is not set.
pub const DEFAULT_STORAGE_DIR: &str = "public/files";

/// Public mount point the web layer serves stored files under.
pub const PUBLIC_MOUNT_PREFIX: &str = "/files";

/// Route prefix for folder pages in the browsing view.
pub const FOLDER_ROUTE_PREFIX: &str = "/folder";

/// Extensions (lowercase, no dot) that can be previewed inline as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Root directory holding the file archive.
///
/// `$FILESHELF_ROOT` wins when set and non-empty, otherwise
/// `<cwd>/public/files`.
pub fn storage_root() -> PathBuf {
    match std::env::var_os(STORAGE_ROOT_ENV) {
        Some(val) if !val.is_empty() => expand_home(Path::new(&val)),
        _ => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_STORAGE_DIR),
    }
}

/// Expand a leading `~` component to the user's home directory.
///
/// Paths without a leading `~`, or a missing home directory, are returned
/// unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
