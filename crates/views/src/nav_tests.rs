use super::*;
use crate::test_support::index;

#[test]
fn normalize_folder_strips_redundant_slashes() {
    let cases = [
        ("", ""),
        ("/", ""),
        ("docs", "docs"),
        ("/docs/", "docs"),
        ("a//b/", "a/b"),
    ];

    for (input, expected) in cases {
        assert_eq!(normalize_folder(input), expected, "normalize_folder({input:?})");
    }
}

#[test]
fn hrefs_for_root_and_nested_folders() {
    assert_eq!(folder_href(""), "/");
    assert_eq!(folder_href("docs/2024"), "/folder/docs/2024");

    assert_eq!(child_href("", "docs"), "/folder/docs");
    assert_eq!(child_href("docs", "2024"), "/folder/docs/2024");
}

#[test]
fn parent_href_walks_up_one_level() {
    assert_eq!(parent_href(""), None);
    assert_eq!(parent_href("docs").as_deref(), Some("/"));
    assert_eq!(parent_href("docs/2024").as_deref(), Some("/folder/docs"));
}

#[test]
fn breadcrumbs_accumulate_segments() {
    assert!(breadcrumbs("").is_empty());

    let crumbs = breadcrumbs("a/b/c");
    let expected = vec![
        Crumb {
            label: "a".into(),
            href: "/folder/a".into(),
            is_last: false,
        },
        Crumb {
            label: "b".into(),
            href: "/folder/a/b".into(),
            is_last: false,
        },
        Crumb {
            label: "c".into(),
            href: "/folder/a/b/c".into(),
            is_last: true,
        },
    ];
    assert_eq!(crumbs, expected);
}

#[test]
fn folder_routes_include_every_ancestor_once() {
    let records = index(&[
        ("top.txt", 1, 1),
        ("docs/notes.md", 1, 1),
        ("docs/2024/q1/plan.md", 1, 1),
        ("media/img/logo.png", 1, 1),
        ("docs/2024/q1/budget.xlsx", 1, 1),
    ]);

    assert_eq!(
        folder_routes(&records),
        vec![
            "docs",
            "docs/2024",
            "docs/2024/q1",
            "media",
            "media/img"
        ]
    );
}

#[test]
fn folder_routes_empty_for_flat_index() {
    let records = index(&[("a.txt", 1, 1), ("b.txt", 1, 1)]);
    assert!(folder_routes(&records).is_empty());
}
