//! Signature prefix extraction.
//!
//! Every detection entry point funnels through [`read_prefix`], which
//! normalizes a path, an in-memory buffer, or a stream into a prefix of at
//! most [`PREFIX_LEN`] bytes. That prefix is the only data matchers may ever
//! inspect: the longest built-in signature ends at offset 261 (the tar
//! "ustar" marker at offset 257), so 262 bytes always suffice.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Maximum number of bytes read from any input for signature matching.
pub const PREFIX_LEN: usize = 262;

/// A readable input with an optional snapshot of its full contents.
///
/// The snapshot exists for cursor-style wrappers whose read position may
/// already sit at the end even though the accumulated contents are still
/// retrievable, e.g. an in-memory cursor that was just written to. Backends
/// without such an accessor keep the `None` default.
pub trait Stream: Read {
    /// Full accumulated contents, if the backing store can be viewed without
    /// consuming the read cursor.
    fn snapshot(&self) -> Option<&[u8]> {
        None
    }
}

impl Stream for File {}

impl Stream for io::Cursor<Vec<u8>> {
    fn snapshot(&self) -> Option<&[u8]> {
        Some(self.get_ref())
    }
}

impl Stream for io::Cursor<&[u8]> {
    fn snapshot(&self) -> Option<&[u8]> {
        Some(self.get_ref())
    }
}

impl<T: Stream + ?Sized> Stream for &mut T {
    fn snapshot(&self) -> Option<&[u8]> {
        (**self).snapshot()
    }
}

/// An input to detection: the closed set of shapes the extractor understands.
///
/// Anything convertible into `Input` can be passed to [`crate::guess`] and
/// friends, so unsupported input kinds are rejected at compile time rather
/// than at runtime.
pub enum Input<'a> {
    /// Filesystem path; opening or reading it fails with [`crate::Error::Io`].
    Path(Cow<'a, Path>),
    /// In-memory byte buffer, truncated to [`PREFIX_LEN`].
    Bytes(&'a [u8]),
    /// A string tried as a path first. If no such file exists, or the string
    /// is not a well-formed path at all (embedded NUL, over-length name),
    /// its own bytes are matched instead; open failures on an existing file
    /// (permissions, device errors) still surface as [`crate::Error::Io`].
    /// This mirrors the historical "does it look like a path" dispatch and
    /// is kept as a documented fallback; pass an explicit `Path` or byte
    /// slice to avoid the ambiguity.
    Text(&'a str),
    /// Stream read once for up to [`PREFIX_LEN`] bytes, falling back to
    /// [`Stream::snapshot`] when the read yields nothing.
    Stream(&'a mut dyn Stream),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a Path> for Input<'a> {
    fn from(path: &'a Path) -> Self {
        Input::Path(Cow::Borrowed(path))
    }
}

impl<'a> From<&'a PathBuf> for Input<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Input::Path(Cow::Borrowed(path))
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a mut dyn Stream> for Input<'a> {
    fn from(stream: &'a mut dyn Stream) -> Self {
        Input::Stream(stream)
    }
}

/// Normalize an input into its signature prefix of at most [`PREFIX_LEN`]
/// bytes. Shorter inputs yield a shorter prefix, never padded.
pub(crate) fn read_prefix(input: Input<'_>) -> Result<Vec<u8>> {
    match input {
        Input::Bytes(bytes) => Ok(truncated(bytes)),
        Input::Path(path) => read_path_prefix(&path),
        Input::Text(text) => match read_path_prefix(Path::new(text)) {
            Ok(prefix) => Ok(prefix),
            // No such file, or the string cannot name one: reclassify it as
            // a literal byte buffer. Failures on an existing file
            // (permissions, device error) propagate.
            Err(Error::Io(e))
                if matches!(
                    e.kind(),
                    ErrorKind::NotFound | ErrorKind::InvalidInput | ErrorKind::InvalidFilename
                ) =>
            {
                Ok(truncated(text.as_bytes()))
            }
            Err(e) => Err(e),
        },
        Input::Stream(stream) => {
            let mut buf = [0u8; PREFIX_LEN];
            let n = stream.read(&mut buf)?;
            if n > 0 {
                Ok(buf[..n].to_vec())
            } else if let Some(snapshot) = stream.snapshot() {
                Ok(truncated(snapshot))
            } else {
                Ok(Vec::new())
            }
        }
    }
}

#[inline]
fn truncated(bytes: &[u8]) -> Vec<u8> {
    bytes[..bytes.len().min(PREFIX_LEN)].to_vec()
}

fn read_path_prefix(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; PREFIX_LEN];
    let mut filled = 0;
    // Files may legally return short reads; keep going until the prefix is
    // full or the file is exhausted.
    loop {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == PREFIX_LEN {
            break;
        }
    }
    Ok(buf[..filled].to_vec())
}
