use fileshelf_fs::FileRecord;

/// Whether `term` switches a view into search mode.
#[inline]
pub fn is_active(term: &str) -> bool {
    !term.trim().is_empty()
}

/// Case-insensitive substring match on file names across the whole index.
///
/// Returns `None` when the term is blank. Only blankness is judged on the
/// trimmed term; a non-blank term is matched as typed.
pub fn search<'a>(records: &'a [FileRecord], term: &str) -> Option<Vec<&'a FileRecord>> {
    if !is_active(term) {
        return None;
    }

    let needle = term.to_lowercase();
    Some(
        records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect(),
    )
}
