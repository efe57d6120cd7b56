//! The built-in matcher catalog.
//!
//! Each entry binds a MIME type and canonical extension to a signature test
//! over the 262-byte prefix. The catalog order is fixed and significant:
//! matching is first-match-wins, and several formats are prefixes of others
//! (CR2 of TIFF, MKV of WEBM, EPUB of ZIP, DEB of AR), so the more specific
//! entry always precedes the general one. Families are ordered images,
//! video, audio, fonts, then archives and documents.

mod archive;
mod audio;
mod font;
mod image;
mod video;

use crate::types::FileType;

/// Whether `sig` appears in `buf` at exactly `offset`.
///
/// Bounds-checked: a buffer too short for the probe simply fails to match.
#[inline]
pub(crate) fn sig_at(buf: &[u8], offset: usize, sig: &[u8]) -> bool {
    buf.get(offset..offset + sig.len()).is_some_and(|window| window == sig)
}

/// All built-in file types, in resolution order.
pub(crate) static BUILTIN: &[FileType] = &[
    // Images
    FileType::builtin("image/jpeg", "jpg", image::jpeg),
    FileType::builtin("image/png", "png", image::png),
    FileType::builtin("image/gif", "gif", image::gif),
    FileType::builtin("image/webp", "webp", image::webp),
    FileType::builtin("image/x-canon-cr2", "cr2", image::cr2),
    FileType::builtin("image/tiff", "tif", image::tiff),
    FileType::builtin("image/bmp", "bmp", image::bmp),
    FileType::builtin("image/vnd.ms-photo", "jxr", image::jxr),
    FileType::builtin("image/vnd.adobe.photoshop", "psd", image::psd),
    FileType::builtin("image/x-icon", "ico", image::ico),
    // Video
    FileType::builtin("video/mp4", "mp4", video::mp4),
    FileType::builtin("video/x-m4v", "m4v", video::m4v),
    FileType::builtin("video/x-matroska", "mkv", video::mkv),
    FileType::builtin("video/webm", "webm", video::webm),
    FileType::builtin("video/quicktime", "mov", video::mov),
    FileType::builtin("video/x-msvideo", "avi", video::avi),
    FileType::builtin("video/x-ms-wmv", "wmv", video::wmv),
    FileType::builtin("video/x-flv", "flv", video::flv),
    FileType::builtin("video/mpeg", "mpg", video::mpeg),
    // Audio
    FileType::builtin("audio/midi", "midi", audio::midi),
    FileType::builtin("audio/mpeg", "mp3", audio::mp3),
    FileType::builtin("audio/m4a", "m4a", audio::m4a),
    FileType::builtin("audio/ogg", "ogg", audio::ogg),
    FileType::builtin("audio/x-flac", "flac", audio::flac),
    FileType::builtin("audio/x-wav", "wav", audio::wav),
    FileType::builtin("audio/amr", "amr", audio::amr),
    // Fonts
    FileType::builtin("application/font-woff", "woff", font::woff),
    FileType::builtin("application/font-woff", "woff2", font::woff2),
    FileType::builtin("application/font-sfnt", "ttf", font::ttf),
    FileType::builtin("application/font-sfnt", "otf", font::otf),
    // Archives and documents
    FileType::builtin("application/epub+zip", "epub", archive::epub),
    FileType::builtin("application/zip", "zip", archive::zip),
    FileType::builtin("application/x-tar", "tar", archive::tar),
    FileType::builtin("application/x-rar-compressed", "rar", archive::rar),
    FileType::builtin("application/gzip", "gz", archive::gz),
    FileType::builtin("application/x-bzip2", "bz2", archive::bz2),
    FileType::builtin("application/x-7z-compressed", "7z", archive::seven_z),
    FileType::builtin("application/pdf", "pdf", archive::pdf),
    FileType::builtin("application/x-msdownload", "exe", archive::exe),
    FileType::builtin("application/x-shockwave-flash", "swf", archive::swf),
    FileType::builtin("application/rtf", "rtf", archive::rtf),
    FileType::builtin("application/x-nintendo-nes-rom", "nes", archive::nes),
    FileType::builtin("application/x-google-chrome-extension", "crx", archive::crx),
    FileType::builtin("application/vnd.ms-cab-compressed", "cab", archive::cab),
    FileType::builtin("application/octet-stream", "eot", archive::eot),
    FileType::builtin("application/postscript", "ps", archive::ps),
    FileType::builtin("application/x-xz", "xz", archive::xz),
    FileType::builtin("application/x-sqlite3", "sqlite", archive::sqlite),
    FileType::builtin("application/x-deb", "deb", archive::deb),
    FileType::builtin("application/x-unix-archive", "ar", archive::ar),
    FileType::builtin("application/x-compress", "Z", archive::z),
    FileType::builtin("application/x-lzip", "lz", archive::lz),
];
