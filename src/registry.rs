//! The ordered matcher registry and the resolution algorithm.
//!
//! A [`Registry`] is an ordered list of [`FileType`] values. Resolution is a
//! first-match-wins linear scan: when two entries would both accept a prefix,
//! only the earlier one is ever reported, so ordering (not uniqueness)
//! resolves ambiguity. Caller-registered entries are inserted at the front
//! and therefore take priority over every built-in, most-recent-first.
//!
//! The crate-level functions operate on a process-wide registry behind a
//! read-write lock; lookups take the read side, registration the write side.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::matchers;
use crate::types::FileType;

/// An ordered collection of file types, queried front to back.
#[derive(Debug, Clone)]
pub struct Registry {
    types: Vec<FileType>,
}

impl Registry {
    /// A registry populated with every built-in type in the fixed catalog
    /// order.
    pub fn new() -> Self {
        Self {
            types: matchers::BUILTIN.to_vec(),
        }
    }

    /// An empty registry, for callers assembling their own catalog.
    pub fn empty() -> Self {
        Self { types: Vec::new() }
    }

    /// Insert a type at the front, giving it priority over all existing
    /// entries. Duplicates are not rejected; ordering decides.
    pub fn register(&mut self, file_type: FileType) {
        self.types.insert(0, file_type);
    }

    /// Resolve a signature prefix to the first accepting type.
    ///
    /// The empty prefix short-circuits to `None` before any matcher runs:
    /// no signature can meaningfully accept zero bytes.
    pub fn match_prefix(&self, prefix: &[u8]) -> Option<&FileType> {
        if prefix.is_empty() {
            return None;
        }
        self.types.iter().find(|t| t.matches(prefix))
    }

    /// First entry with the given canonical extension.
    pub fn by_extension(&self, extension: &str) -> Option<&FileType> {
        self.types.iter().find(|t| t.is_extension(extension))
    }

    /// First entry with the given MIME type.
    pub fn by_mime(&self, mime: &str) -> Option<&FileType> {
        self.types.iter().find(|t| t.is_mime(mime))
    }

    /// Whether any entry carries the given extension.
    pub fn supports_extension(&self, extension: &str) -> bool {
        self.by_extension(extension).is_some()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry holds no types at all.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate the registered types in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &FileType> {
        self.types.iter()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::new()));

/// The process-wide registry backing the crate-level functions.
pub(crate) fn global() -> &'static RwLock<Registry> {
    &REGISTRY
}
