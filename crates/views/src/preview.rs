use fileshelf_fs::FileRecord;
use fileshelf_runtime::IMAGE_EXTENSIONS;

/// Whether the browsing view can preview this file inline as an image.
#[inline]
pub fn is_image(record: &FileRecord) -> bool {
    IMAGE_EXTENSIONS.contains(&record.extension.as_str())
}
