use std::collections::BTreeSet;

use fileshelf_fs::FileRecord;
use fileshelf_runtime::FOLDER_ROUTE_PREFIX;

/// One step of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    /// The crumb for the folder being viewed.
    pub is_last: bool,
}

/// Canonical form of a folder path: `/`-separated, no empty segments,
/// `""` for the root.
pub fn normalize_folder(path: &str) -> String {
    path.split('/')
        .filter(|seg| !seg.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Route of a folder page; the root lives at `/`.
pub fn folder_href(folder: &str) -> String {
    if folder.is_empty() {
        "/".to_owned()
    } else {
        format!("{FOLDER_ROUTE_PREFIX}/{folder}")
    }
}

/// Route of subfolder `name` inside `current`.
pub fn child_href(current: &str, name: &str) -> String {
    if current.is_empty() {
        folder_href(name)
    } else {
        folder_href(&format!("{current}/{name}"))
    }
}

/// Route of the folder above `current`, `None` at the root.
pub fn parent_href(current: &str) -> Option<String> {
    if current.is_empty() {
        return None;
    }

    let parent = current.rsplit_once('/').map_or("", |(parent, _)| parent);
    Some(folder_href(parent))
}

/// Trail of cumulative folder routes, one per segment of `current`.
pub fn breadcrumbs(current: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = current.split('/').filter(|s| !s.is_empty()).collect();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| Crumb {
            label: (*seg).to_owned(),
            href: folder_href(&segments[..=i].join("/")),
            is_last: i == last,
        })
        .collect()
}

/// Every folder that has a page: each record's folder plus all of its
/// ancestors, in sorted order. The root is not included.
pub fn folder_routes(records: &[FileRecord]) -> Vec<String> {
    let mut routes = BTreeSet::new();

    for record in records {
        let mut prefix = String::new();
        for seg in record.relative_folder.split('/').filter(|s| !s.is_empty()) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(seg);
            routes.insert(prefix.clone());
        }
    }

    routes.into_iter().collect()
}

#[cfg(test)]
#[path = "nav_tests.rs"]
mod tests;
