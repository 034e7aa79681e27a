use std::collections::BTreeMap;

use fileshelf_fs::FileRecord;

use crate::sort::SortConfig;

/// Files sharing one extension, keyed by the uppercased extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionGroup<'a> {
    pub key: String,
    pub files: Vec<&'a FileRecord>,
}

impl ExtensionGroup<'_> {
    /// Section heading, e.g. `.PDF FILES`.
    pub fn label(&self) -> String {
        format!(".{} FILES", self.key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Partition the index by uppercased extension.
///
/// Groups come out ordered by key; files inside a group follow `sort`.
pub fn group_by_extension(records: &[FileRecord], sort: SortConfig) -> Vec<ExtensionGroup<'_>> {
    let mut grouped: BTreeMap<String, Vec<&FileRecord>> = BTreeMap::new();

    for record in records {
        grouped
            .entry(record.extension.to_uppercase())
            .or_default()
            .push(record);
    }

    grouped
        .into_iter()
        .map(|(key, mut files)| {
            sort.sort(&mut files);
            ExtensionGroup { key, files }
        })
        .collect()
}
