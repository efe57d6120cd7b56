//! Loquat - content-based file type detection from magic-byte signatures
//!
//! This library identifies the type of a binary blob by inspecting at most
//! its first 262 bytes and comparing them against an ordered registry of
//! known signatures, independent of any filename extension.
//!
//! # Features
//!
//! - **52 built-in formats**: images, video, audio, fonts, archives and
//!   documents, matched byte-for-byte against their published magic numbers
//! - **Unified input handling**: file paths, in-memory buffers, and streams
//!   all normalize to the same bounded signature prefix
//! - **First-match-wins resolution**: ambiguous signatures (EPUB vs ZIP,
//!   CR2 vs TIFF) are resolved by catalog order, never by guesswork
//! - **Runtime extensibility**: callers can prepend their own matchers,
//!   which take priority over every built-in
//!
//! # Example - Guessing from a buffer
//!
//! ```
//! let buf = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
//!
//! let kind = loquat::guess(&buf)?.expect("recognized");
//! assert_eq!(kind.mime(), "image/jpeg");
//! assert_eq!(kind.extension(), "jpg");
//! # Ok::<(), loquat::Error>(())
//! ```
//!
//! # Example - Guessing from a file
//!
//! ```no_run
//! use std::path::Path;
//!
//! if let Some(kind) = loquat::guess(Path::new("archive.bin"))? {
//!     println!("{} (.{})", kind.mime(), kind.extension());
//! }
//! # Ok::<(), loquat::Error>(())
//! ```
//!
//! # Example - Registering a custom type
//!
//! ```
//! use loquat::FileType;
//!
//! let flif = FileType::new("image/flif", "flif", |buf: &[u8]| {
//!     buf.starts_with(b"FLIF")
//! });
//! loquat::register_type(flif)?;
//!
//! assert_eq!(loquat::guess_extension(b"FLIF\x44\x1A")?.as_deref(), Some("flif"));
//! # Ok::<(), loquat::Error>(())
//! ```

pub mod error;
pub mod input;
mod matchers;
pub mod registry;
pub mod types;

pub use error::{Error, Result};
pub use input::{Input, PREFIX_LEN, Stream};
pub use registry::Registry;
pub use types::FileType;

/// Guess the file type of the given input.
///
/// The input may be anything convertible into [`Input`]: a path, an
/// in-memory buffer, a string (tried as a path first, with a documented
/// fallback to its literal bytes), or a stream.
///
/// # Returns
///
/// * `Ok(Some(FileType))` if a registered matcher accepts the signature prefix
/// * `Ok(None)` if the input is empty or no matcher accepts it
/// * `Err(Error::Io)` if reading the prefix from a path or stream fails
pub fn guess<'a>(input: impl Into<Input<'a>>) -> Result<Option<FileType>> {
    let prefix = input::read_prefix(input.into())?;
    Ok(registry::global().read().match_prefix(&prefix).cloned())
}

/// Guess the file type of the given input and return its MIME type.
pub fn guess_mime<'a>(input: impl Into<Input<'a>>) -> Result<Option<String>> {
    Ok(guess(input)?.map(|kind| kind.mime().to_owned()))
}

/// Guess the file type of the given input and return its canonical extension.
pub fn guess_extension<'a>(input: impl Into<Input<'a>>) -> Result<Option<String>> {
    Ok(guess(input)?.map(|kind| kind.extension().to_owned()))
}

/// Look up a registered type by declared identity rather than content.
///
/// Returns the first registered type whose MIME equals `mime` or whose
/// extension equals `extension`; `None` when neither is given or nothing
/// matches. Note that a few types legitimately share a MIME (WOFF/WOFF2,
/// TTF/OTF), in which case the earlier catalog entry wins.
pub fn get_type(mime: Option<&str>, extension: Option<&str>) -> Option<FileType> {
    let registry = registry::global().read();
    registry
        .iter()
        .find(|t| {
            mime.is_some_and(|m| t.is_mime(m)) || extension.is_some_and(|e| t.is_extension(e))
        })
        .cloned()
}

/// Whether the given extension belongs to any registered type.
pub fn is_extension_supported(extension: &str) -> bool {
    registry::global().read().supports_extension(extension)
}

/// Register a type with the process-wide registry, giving it priority over
/// all existing types (including previously registered ones).
///
/// # Errors
///
/// [`Error::InvalidMatcher`] if the type carries an empty MIME or extension;
/// the registry is left unchanged.
pub fn register_type(file_type: FileType) -> Result<()> {
    if file_type.mime().is_empty() {
        return Err(Error::InvalidMatcher("MIME type must not be empty".into()));
    }
    if file_type.extension().is_empty() {
        return Err(Error::InvalidMatcher("extension must not be empty".into()));
    }
    registry::global().write().register(file_type);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    #[test]
    fn test_jpeg_buffer_yields_jpeg_mime() {
        let buf = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(guess_mime(&buf).unwrap().as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_zip_buffer_yields_zip_extension() {
        let buf = [0x50, 0x4B, 0x03, 0x04, 0x0A, 0x00, 0x00, 0x00];
        assert_eq!(guess_extension(&buf).unwrap().as_deref(), Some("zip"));
    }

    #[test]
    fn test_empty_buffer_yields_none() {
        assert!(guess(&b""[..]).unwrap().is_none());
    }

    #[test]
    fn test_amr_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"#!AMR\n\x34\x00\x00\x00\x00\x00").unwrap();
        assert_eq!(
            guess_mime(file.path()).unwrap().as_deref(),
            Some("audio/amr")
        );
    }

    #[test]
    fn test_extension_support() {
        assert!(is_extension_supported("png"));
        assert!(!is_extension_supported("docx"));
    }

    #[test]
    fn test_tar_marker_deep_in_buffer() {
        let mut buf = vec![0u8; 300];
        buf[257..262].copy_from_slice(b"ustar");
        assert_eq!(guess_extension(&buf).unwrap().as_deref(), Some("tar"));
    }

    #[test]
    fn test_guess_is_idempotent() {
        let buf = b"OggS\x00\x02\x00\x00";
        assert_eq!(guess(buf).unwrap(), guess(buf).unwrap());
    }

    #[test]
    fn test_unrecognized_content_is_not_an_error() {
        let buf = [0xDE, 0xAD, 0xBE, 0xEF];
        assert!(guess(&buf).unwrap().is_none());
    }

    #[test]
    fn test_guess_from_stream_snapshot() {
        // Cursor already read to the end: detection still works through the
        // snapshot accessor.
        let mut cursor = std::io::Cursor::new(Vec::new());
        cursor.write_all(&[0x1F, 0x8B, 0x08, 0x00]).unwrap();
        let kind = guess(Input::Stream(&mut cursor)).unwrap().unwrap();
        assert_eq!(kind.extension(), "gz");
    }

    #[test]
    fn test_get_type_by_extension_and_mime() {
        let kind = get_type(None, Some("png")).unwrap();
        assert_eq!(kind.mime(), "image/png");
        let kind = get_type(Some("application/pdf"), None).unwrap();
        assert_eq!(kind.extension(), "pdf");
        assert!(get_type(None, None).is_none());
        assert!(get_type(Some("text/html"), Some("html")).is_none());
    }

    #[test]
    fn test_registered_type_shadows_builtin() {
        let custom = FileType::new("application/x-pk-custom", "pkc", |buf: &[u8]| {
            // Narrower than ZIP so no other test's buffer can hit it.
            buf.starts_with(&[0x50, 0x4B, 0x03, 0x04]) && buf.ends_with(b"PKC-SENTINEL")
        });
        register_type(custom).unwrap();

        let mut buf = vec![0x50, 0x4B, 0x03, 0x04];
        buf.extend_from_slice(b"PKC-SENTINEL");
        assert_eq!(guess_extension(&buf).unwrap().as_deref(), Some("pkc"));
        assert!(is_extension_supported("pkc"));
        assert_eq!(
            get_type(None, Some("pkc")).unwrap().mime(),
            "application/x-pk-custom"
        );
    }

    #[test]
    fn test_register_type_rejects_empty_identity() {
        let missing_mime = FileType::new("", "xyz", |_: &[u8]| false);
        assert!(matches!(
            register_type(missing_mime),
            Err(Error::InvalidMatcher(_))
        ));
        let missing_ext = FileType::new("application/x-xyz", "", |_: &[u8]| false);
        assert!(matches!(
            register_type(missing_ext),
            Err(Error::InvalidMatcher(_))
        ));
        assert!(!is_extension_supported("xyz"));
    }

    #[test]
    fn test_every_builtin_resolves_from_crafted_signature() {
        // One crafted buffer per format, long enough for the deepest probe
        // the matcher performs, resolving to exactly that extension.
        let cases: &[(&str, Vec<u8>)] = &[
            ("jpg", vec![0xFF, 0xD8, 0xFF]),
            ("png", vec![0x89, 0x50, 0x4E, 0x47]),
            ("gif", b"GIF89a".to_vec()),
            ("webp", {
                let mut v = vec![0u8; 12];
                v[8..12].copy_from_slice(b"WEBP");
                v
            }),
            ("cr2", {
                let mut v = vec![0x49, 0x49, 0x2A, 0x00, 0, 0, 0, 0, 0, 0];
                v[8..10].copy_from_slice(b"CR");
                v
            }),
            ("tif", vec![0x4D, 0x4D, 0x00, 0x2A]),
            ("bmp", vec![0x42, 0x4D]),
            ("jxr", vec![0x49, 0x49, 0xBC]),
            ("psd", b"8BPS".to_vec()),
            ("ico", vec![0x00, 0x00, 0x01, 0x00]),
            ("mp4", {
                let mut v = vec![0u8; 28];
                v[3] = 0x18;
                v[4..8].copy_from_slice(b"ftyp");
                v
            }),
            ("m4v", {
                let mut v = vec![0u8; 11];
                v[3] = 0x1C;
                v[4..11].copy_from_slice(b"ftypM4V");
                v
            }),
            ("mkv", {
                let mut v = vec![0u8; 40];
                v[..16].copy_from_slice(&[
                    0x1A, 0x45, 0xDF, 0xA3, 0x93, 0x42, 0x82, 0x88, 0x6D, 0x61, 0x74, 0x72,
                    0x6F, 0x73, 0x6B, 0x61,
                ]);
                v
            }),
            ("webm", vec![0x1A, 0x45, 0xDF, 0xA3]),
            ("mov", {
                let mut v = vec![0x00, 0x00, 0x00, 0x14];
                v.extend_from_slice(b"ftyp");
                v
            }),
            ("avi", {
                let mut v = vec![0u8; 11];
                v[..4].copy_from_slice(b"RIFF");
                v[8..11].copy_from_slice(b"AVI");
                v
            }),
            (
                "wmv",
                vec![0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9],
            ),
            ("flv", vec![0x46, 0x4C, 0x56, 0x01]),
            ("mpg", vec![0x00, 0x00, 0x01, 0xB3]),
            ("midi", b"MThd".to_vec()),
            ("mp3", b"ID3\x03".to_vec()),
            ("m4a", b"M4A \x00\x00\x00\x00\x00\x00\x00".to_vec()),
            ("ogg", b"OggS".to_vec()),
            ("flac", b"fLaC".to_vec()),
            ("wav", {
                let mut v = vec![0u8; 12];
                v[..4].copy_from_slice(b"RIFF");
                v[8..12].copy_from_slice(b"WAVE");
                v
            }),
            ("amr", b"#!AMR\n\x00\x00\x00\x00\x00\x00".to_vec()),
            ("woff", b"wOFF\x00\x01\x00\x00".to_vec()),
            ("woff2", b"wOF2\x00\x01\x00\x00".to_vec()),
            ("ttf", vec![0x00, 0x01, 0x00, 0x00, 0x00]),
            ("otf", b"OTTO\x00".to_vec()),
            ("epub", {
                let mut v = vec![0u8; 58];
                v[..4].copy_from_slice(&[0x50, 0x4B, 0x03, 0x04]);
                v[30..58].copy_from_slice(b"mimetypeapplication/epub+zip");
                v
            }),
            ("zip", vec![0x50, 0x4B, 0x05, 0x06]),
            ("tar", {
                let mut v = vec![0u8; 262];
                v[257..262].copy_from_slice(b"ustar");
                v
            }),
            ("rar", vec![0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00]),
            ("gz", vec![0x1F, 0x8B, 0x08]),
            ("bz2", b"BZh9".to_vec()),
            ("7z", vec![0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]),
            ("pdf", b"%PDF-1.7".to_vec()),
            ("exe", vec![0x4D, 0x5A, 0x90, 0x00]),
            ("swf", b"FWS\x09".to_vec()),
            ("rtf", b"{\\rtf1".to_vec()),
            ("nes", vec![0x4E, 0x45, 0x53, 0x1A]),
            ("crx", b"Cr24".to_vec()),
            ("cab", b"MSCF".to_vec()),
            ("eot", {
                let mut v = vec![0u8; 36];
                v[8..11].copy_from_slice(&[0x02, 0x00, 0x01]);
                v[34] = 0x4C;
                v[35] = 0x50;
                v
            }),
            ("ps", b"%!PS-Adobe".to_vec()),
            ("xz", vec![0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00]),
            ("sqlite", b"SQLite format 3\x00".to_vec()),
            ("deb", b"!<arch>\ndebian-binary   ".to_vec()),
            ("ar", b"!<arch>\nfoo.o/  ".to_vec()),
            ("Z", vec![0x1F, 0x9D]),
            ("lz", b"LZIP\x01".to_vec()),
        ];
        for (extension, buf) in cases {
            assert_eq!(
                guess_extension(buf).unwrap().as_deref(),
                Some(*extension),
                "crafted {extension} signature"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_detection_never_panics(buf in proptest::collection::vec(any::<u8>(), 0..512)) {
            let _ = guess(&buf).unwrap();
        }

        #[test]
        fn prop_prefix_is_capped(buf in proptest::collection::vec(any::<u8>(), 0..1024)) {
            let prefix = input::read_prefix(Input::from(&buf)).unwrap();
            prop_assert!(prefix.len() <= PREFIX_LEN);
            prop_assert_eq!(&prefix[..], &buf[..buf.len().min(PREFIX_LEN)]);
        }
    }
}
