//! Success-or-error list entries.
//!
//! Collectors never fail as a whole. A failure is returned as data: a single
//! error entry inside the list the collector would otherwise have produced.

use serde::Serialize;

/// Error marker serialized as `{"error": "..."}`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub error: String,
}

impl ErrorEntry {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorEntry {
            error: error.into(),
        }
    }
}

/// A record list entry, either the record itself or an [`ErrorEntry`].
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Entry<T> {
    Ok(T),
    Err(ErrorEntry),
}

impl<T> Entry<T> {
    pub fn error(error: impl Into<String>) -> Self {
        Entry::Err(ErrorEntry::new(error))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Entry::Err(_))
    }

    pub fn ok(&self) -> Option<&T> {
        match self {
            Entry::Ok(v) => Some(v),
            Entry::Err(_) => None,
        }
    }
}

/// A plain string list entry. Both variants serialize as a bare string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum NameEntry {
    Name(String),
    Error(String),
}

impl NameEntry {
    pub fn is_error(&self) -> bool {
        matches!(self, NameEntry::Error(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            NameEntry::Name(s) | NameEntry::Error(s) => s,
        }
    }
}

/// Something that may be an error marker in a collector result.
pub trait MaybeError {
    fn is_error_marker(&self) -> bool;
}

impl<T> MaybeError for Entry<T> {
    fn is_error_marker(&self) -> bool {
        self.is_error()
    }
}

impl MaybeError for NameEntry {
    fn is_error_marker(&self) -> bool {
        self.is_error()
    }
}

/// Number of entries that are not error markers.
pub fn count_ok<E: MaybeError>(entries: &[E]) -> usize {
    entries.iter().filter(|e| !e.is_error_marker()).count()
}
