use std::cmp::Ordering;

/// Locale-aware string ordering for file names.
///
/// Compares case-insensitively first, so `apple.txt` < `Banana.txt` <
/// `cherry.txt`. Names equal up to case put the lowercase form first
/// (`a.txt` < `A.txt`), and a final code point comparison keeps this a
/// total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

/// At the first position where the two names differ only by case, the
/// lowercase character wins.
fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return Ordering::Equal,
        }
    }
    Ordering::Equal
}
