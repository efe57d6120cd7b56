//! Archive, document, and miscellaneous application format signature tests.
//!
//! EPUB is a constrained ZIP (stored `mimetype` entry first, so its media
//! type lands at a fixed offset inside the local file header) and must be
//! probed before plain ZIP. DEB is a constrained `ar` archive and must be
//! probed before plain AR for the same reason.

use super::sig_at;

const ZIP_LOCAL_HEADER: &[u8] = &[0x50, 0x4B, 0x03, 0x04];
const RAR: &[u8] = &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07];
const GZ: &[u8] = &[0x1F, 0x8B, 0x08];
const SEVEN_Z: &[u8] = &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C];
const XZ: &[u8] = &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00];
const NES: &[u8] = &[0x4E, 0x45, 0x53, 0x1A];

pub(crate) fn epub(buf: &[u8]) -> bool {
    buf.starts_with(ZIP_LOCAL_HEADER) && sig_at(buf, 30, b"mimetypeapplication/epub+zip")
}

pub(crate) fn zip(buf: &[u8]) -> bool {
    matches!(buf, [0x50, 0x4B, 0x03 | 0x05 | 0x07, 0x04 | 0x06 | 0x08, ..])
}

// The "ustar" marker sits at offset 257, the deepest probe in the catalog
// and the reason the signature prefix is 262 bytes long.
pub(crate) fn tar(buf: &[u8]) -> bool {
    sig_at(buf, 257, b"ustar")
}

pub(crate) fn rar(buf: &[u8]) -> bool {
    buf.len() > 6 && buf.starts_with(RAR) && (buf[6] == 0x00 || buf[6] == 0x01)
}

pub(crate) fn gz(buf: &[u8]) -> bool {
    buf.starts_with(GZ)
}

pub(crate) fn bz2(buf: &[u8]) -> bool {
    buf.starts_with(b"BZh")
}

pub(crate) fn seven_z(buf: &[u8]) -> bool {
    buf.starts_with(SEVEN_Z)
}

pub(crate) fn pdf(buf: &[u8]) -> bool {
    buf.starts_with(b"%PDF")
}

pub(crate) fn exe(buf: &[u8]) -> bool {
    buf.starts_with(&[0x4D, 0x5A])
}

pub(crate) fn swf(buf: &[u8]) -> bool {
    matches!(buf, [0x43 | 0x46, 0x57, 0x53, ..])
}

pub(crate) fn rtf(buf: &[u8]) -> bool {
    buf.starts_with(b"{\\rtf")
}

pub(crate) fn nes(buf: &[u8]) -> bool {
    buf.starts_with(NES)
}

pub(crate) fn crx(buf: &[u8]) -> bool {
    buf.starts_with(b"Cr24")
}

pub(crate) fn cab(buf: &[u8]) -> bool {
    buf.starts_with(b"MSCF") || buf.starts_with(b"ISc(")
}

pub(crate) fn eot(buf: &[u8]) -> bool {
    sig_at(buf, 34, &[0x4C, 0x50])
        && (sig_at(buf, 8, &[0x02, 0x00, 0x01])
            || sig_at(buf, 8, &[0x01, 0x00, 0x00])
            || sig_at(buf, 8, &[0x02, 0x00, 0x02]))
}

pub(crate) fn ps(buf: &[u8]) -> bool {
    buf.starts_with(b"%!")
}

pub(crate) fn xz(buf: &[u8]) -> bool {
    buf.starts_with(XZ)
}

pub(crate) fn sqlite(buf: &[u8]) -> bool {
    buf.starts_with(b"SQLi")
}

// Probed before AR: a Debian package is an `ar` archive whose first member
// is named `debian-binary`.
pub(crate) fn deb(buf: &[u8]) -> bool {
    buf.starts_with(b"!<arch>\ndebian-binary")
}

pub(crate) fn ar(buf: &[u8]) -> bool {
    buf.starts_with(b"!<arch>")
}

pub(crate) fn z(buf: &[u8]) -> bool {
    matches!(buf, [0x1F, 0xA0 | 0x9D, ..])
}

pub(crate) fn lz(buf: &[u8]) -> bool {
    buf.starts_with(b"LZIP")
}
