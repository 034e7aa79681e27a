mod folder;
mod groups;
mod nav;
mod preview;
mod search;
mod sort;

pub use folder::{FolderEntry, FolderListing, list_folder};
pub use groups::{ExtensionGroup, group_by_extension};
pub use nav::{
    Crumb, breadcrumbs, child_href, folder_href, folder_routes, normalize_folder, parent_href,
};
pub use preview::is_image;
pub use search::{is_active, search};
pub use sort::{ParseSortKeyError, SortConfig, SortDirection, SortKey};

#[cfg(test)]
mod test_support;
