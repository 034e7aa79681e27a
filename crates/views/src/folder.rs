use std::collections::BTreeSet;

use fileshelf_fs::{FileRecord, locale_cmp};

use crate::{nav::normalize_folder, search::search, sort::SortConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderEntry<'a> {
    /// Immediate subfolder of the folder being listed.
    Folder(String),
    File(&'a FileRecord),
}

/// What the folder view shows for one folder and search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing<'a> {
    /// Normalized folder path, `""` for the root.
    pub current: String,
    /// The active search term, if the listing is a search result.
    pub search_term: Option<String>,
    /// Folders first, then files. Search results hold files only.
    pub entries: Vec<FolderEntry<'a>>,
}

impl FolderEntry<'_> {
    pub fn name(&self) -> &str {
        match self {
            FolderEntry::Folder(name) => name,
            FolderEntry::File(record) => &record.name,
        }
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        matches!(self, FolderEntry::Folder(_))
    }
}

impl<'a> FolderListing<'a> {
    #[inline]
    pub fn is_searching(&self) -> bool {
        self.search_term.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &'a FileRecord> + '_ {
        self.entries.iter().filter_map(|e| match e {
            FolderEntry::File(record) => Some(*record),
            FolderEntry::Folder(_) => None,
        })
    }

    pub fn folders(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().filter_map(|e| match e {
            FolderEntry::Folder(name) => Some(name.as_str()),
            FolderEntry::File(_) => None,
        })
    }

    /// Text shown in place of an empty listing.
    pub fn empty_message(&self) -> String {
        match &self.search_term {
            Some(term) => format!("No files match \"{term}\""),
            None => "This folder is empty.".to_owned(),
        }
    }
}

/// Build the folder view for `current`.
///
/// A non-blank `term` switches to search mode: every matching file in the
/// index, ordered by `sort`, regardless of `current`. Otherwise the listing
/// holds the distinct immediate subfolders of `current` (by name) followed by
/// the files directly inside it (by `sort`).
pub fn list_folder<'a>(
    records: &'a [FileRecord],
    current: &str,
    term: &str,
    sort: SortConfig,
) -> FolderListing<'a> {
    let current = normalize_folder(current);

    if let Some(mut hits) = search(records, term) {
        sort.sort(&mut hits);
        return FolderListing {
            current,
            search_term: Some(term.to_owned()),
            entries: hits.into_iter().map(FolderEntry::File).collect(),
        };
    }

    let mut subfolders: BTreeSet<&str> = BTreeSet::new();
    let mut files: Vec<&FileRecord> = Vec::new();

    for record in records {
        let folder = record.relative_folder.as_str();
        if folder == current {
            files.push(record);
        } else if let Some(rest) = below(folder, &current)
            && let Some(next) = rest.split('/').next().filter(|s| !s.is_empty())
        {
            subfolders.insert(next);
        }
    }

    let mut folder_names: Vec<&str> = subfolders.into_iter().collect();
    folder_names.sort_by(|a, b| locale_cmp(a, b));
    sort.sort(&mut files);

    let entries = folder_names
        .into_iter()
        .map(|name| FolderEntry::Folder(name.to_owned()))
        .chain(files.into_iter().map(FolderEntry::File))
        .collect();

    FolderListing {
        current,
        search_term: None,
        entries,
    }
}

/// Remainder of `folder` below `current`, if it lies strictly inside it.
fn below<'f>(folder: &'f str, current: &str) -> Option<&'f str> {
    if current.is_empty() {
        return Some(folder);
    }
    folder.strip_prefix(current)?.strip_prefix('/')
}

#[cfg(test)]
#[path = "folder_tests.rs"]
mod tests;
