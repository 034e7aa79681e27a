use std::{cmp::Ordering, fmt, str::FromStr};

use fileshelf_fs::{FileRecord, locale_cmp};
use serde::{Deserialize, Serialize};

/// Column a listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Current sort column and direction of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError(String);

impl SortDirection {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Next state after the user picks `key`: the active column flips
    /// direction, any other column starts ascending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }

    /// Compare two records under this configuration.
    ///
    /// Descending reverses the comparison rather than the output, so a
    /// stable sort keeps tied records in index order either way.
    pub fn compare(&self, a: &FileRecord, b: &FileRecord) -> Ordering {
        let ord = match self.key {
            SortKey::Name => locale_cmp(&a.name, &b.name),
            SortKey::Size => a.size_bytes.cmp(&b.size_bytes),
            // Fixed-width UTC ISO strings order chronologically.
            SortKey::Date => a.modified_at.cmp(&b.modified_at),
        };

        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }

    pub fn sort(&self, records: &mut [&FileRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "size" => Ok(SortKey::Size),
            "date" => Ok(SortKey::Date),
            _ => Err(ParseSortKeyError(s.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::Date => "date",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ParseSortKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort key {:?} (expected name, size or date)",
            self.0
        )
    }
}

impl std::error::Error for ParseSortKeyError {}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
