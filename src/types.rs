//! File type values and their matcher predicates.
//!
//! A [`FileType`] binds a MIME string and a canonical extension to a predicate
//! over a byte prefix. Built-in types carry a plain function pointer; types
//! registered at runtime may carry an arbitrary closure. The predicate is not
//! part of a type's identity: two `FileType` values compare equal when their
//! MIME and extension strings are equal.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Predicate over a byte prefix.
///
/// Built-in matchers are function pointers so the whole catalog can live in a
/// `static`; caller-registered matchers get an open extension slot for
/// closures capturing state.
#[derive(Clone)]
enum Matcher {
    Builtin(fn(&[u8]) -> bool),
    Custom(Arc<dyn Fn(&[u8]) -> bool + Send + Sync>),
}

/// A detectable file type: MIME, canonical extension, and a signature test.
///
/// Predicates are total: they return `false` (never panic, never read out of
/// bounds) when the prefix is shorter than the bytes they inspect.
///
/// # Examples
///
/// ```
/// use loquat::FileType;
///
/// let kind = FileType::new("application/x-custom", "cst", |buf: &[u8]| {
///     buf.starts_with(b"CUSTOM")
/// });
/// assert!(kind.matches(b"CUSTOM v1"));
/// assert!(!kind.matches(b"CUST"));
/// ```
#[derive(Clone)]
pub struct FileType {
    mime: Cow<'static, str>,
    extension: Cow<'static, str>,
    matcher: Matcher,
}

impl FileType {
    /// Create a file type with an arbitrary matcher closure.
    pub fn new(
        mime: impl Into<Cow<'static, str>>,
        extension: impl Into<Cow<'static, str>>,
        matcher: impl Fn(&[u8]) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            mime: mime.into(),
            extension: extension.into(),
            matcher: Matcher::Custom(Arc::new(matcher)),
        }
    }

    /// Create a built-in file type backed by a function pointer.
    ///
    /// `const` so the catalog can be assembled into a `static` slice.
    pub(crate) const fn builtin(
        mime: &'static str,
        extension: &'static str,
        matcher: fn(&[u8]) -> bool,
    ) -> Self {
        Self {
            mime: Cow::Borrowed(mime),
            extension: Cow::Borrowed(extension),
            matcher: Matcher::Builtin(matcher),
        }
    }

    /// MIME type string, e.g. `image/png`.
    #[inline]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Canonical file extension without the leading dot, e.g. `png`.
    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Run the signature test against a byte prefix.
    #[inline]
    pub fn matches(&self, prefix: &[u8]) -> bool {
        match &self.matcher {
            Matcher::Builtin(f) => f(prefix),
            Matcher::Custom(f) => f(prefix),
        }
    }

    /// Whether this type's canonical extension equals `ext`.
    #[inline]
    pub fn is_extension(&self, ext: &str) -> bool {
        self.extension == ext
    }

    /// Whether this type's MIME string equals `mime`.
    #[inline]
    pub fn is_mime(&self, mime: &str) -> bool {
        self.mime == mime
    }
}

impl PartialEq for FileType {
    fn eq(&self, other: &Self) -> bool {
        self.mime == other.mime && self.extension == other.extension
    }
}

impl Eq for FileType {}

impl fmt::Debug for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileType")
            .field("mime", &self.mime)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mime, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_matcher() {
        let kind = FileType::new("application/x-test", "tst", |buf: &[u8]| {
            buf.starts_with(b"TEST")
        });
        assert_eq!(kind.mime(), "application/x-test");
        assert_eq!(kind.extension(), "tst");
        assert!(kind.matches(b"TEST data"));
        assert!(!kind.matches(b"other"));
    }

    #[test]
    fn test_structural_equality_ignores_matcher() {
        let a = FileType::new("image/png", "png", |_: &[u8]| true);
        let b = FileType::new("image/png", "png", |_: &[u8]| false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_helpers() {
        let kind = FileType::new("audio/ogg", "ogg", |_: &[u8]| false);
        assert!(kind.is_mime("audio/ogg"));
        assert!(!kind.is_mime("audio/mpeg"));
        assert!(kind.is_extension("ogg"));
        assert!(!kind.is_extension("oga"));
    }

    #[test]
    fn test_display() {
        let kind = FileType::new("image/gif", "gif", |_: &[u8]| true);
        assert_eq!(kind.to_string(), "image/gif (gif)");
    }
}
