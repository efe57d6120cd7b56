//! Image format signature tests.

use super::sig_at;

const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const GIF: &[u8] = &[0x47, 0x49, 0x46];
const JXR: &[u8] = &[0x49, 0x49, 0xBC];
const PSD: &[u8] = &[0x38, 0x42, 0x50, 0x53];
const ICO: &[u8] = &[0x00, 0x00, 0x01, 0x00];

/// TIFF byte-order marker: little-endian `II*\0` or big-endian `MM\0*`.
/// Shared by TIFF proper and the CR2 raw format layered on top of it.
#[inline]
fn tiff_byte_order(buf: &[u8]) -> bool {
    buf.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || buf.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
}

pub(crate) fn jpeg(buf: &[u8]) -> bool {
    buf.starts_with(JPEG)
}

pub(crate) fn png(buf: &[u8]) -> bool {
    buf.starts_with(PNG)
}

pub(crate) fn gif(buf: &[u8]) -> bool {
    buf.starts_with(GIF)
}

pub(crate) fn webp(buf: &[u8]) -> bool {
    sig_at(buf, 8, b"WEBP")
}

// Must be probed before plain TIFF: a CR2 file carries a valid TIFF header.
pub(crate) fn cr2(buf: &[u8]) -> bool {
    tiff_byte_order(buf) && sig_at(buf, 8, b"CR")
}

pub(crate) fn tiff(buf: &[u8]) -> bool {
    tiff_byte_order(buf)
}

pub(crate) fn bmp(buf: &[u8]) -> bool {
    buf.starts_with(&[0x42, 0x4D])
}

pub(crate) fn jxr(buf: &[u8]) -> bool {
    buf.starts_with(JXR)
}

pub(crate) fn psd(buf: &[u8]) -> bool {
    buf.starts_with(PSD)
}

pub(crate) fn ico(buf: &[u8]) -> bool {
    buf.starts_with(ICO)
}
