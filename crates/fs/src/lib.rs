mod collation;
mod helpers;
mod record;
mod walker;

pub use collation::locale_cmp;
pub use helpers::{
    UNKNOWN_EXTENSION, build_url, extension_of, folder_of, format_size, is_hidden, iso_timestamp,
    to_web_path,
};
pub use record::FileRecord;
pub use walker::{ScanOptions, scan, scan_with};
