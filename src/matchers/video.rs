//! Video format signature tests.
//!
//! The ISO base-media family (MP4, M4V, MOV) shares the `ftyp` box marker at
//! offset 4 and is distinguished by box size and brand bytes; the EBML family
//! (MKV, WEBM) shares a leading `\x1A\x45\xDF\xA3`. Catalog order resolves
//! the overlaps: the more specific test runs first.

use super::sig_at;

const EBML: &[u8] = &[0x1A, 0x45, 0xDF, 0xA3];
const MKV_DOCTYPE: &[u8] = &[
    0x1A, 0x45, 0xDF, 0xA3, 0x93, 0x42, 0x82, 0x88, 0x6D, 0x61, 0x74, 0x72, 0x6F, 0x73, 0x6B, 0x61,
];
const WMV: &[u8] = &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9];
const FLV: &[u8] = &[0x46, 0x4C, 0x56, 0x01];

pub(crate) fn mp4(buf: &[u8]) -> bool {
    if buf.len() < 28 {
        return false;
    }
    let ftyp_box = buf[0] == 0x00
        && buf[1] == 0x00
        && buf[2] == 0x00
        && (buf[3] == 0x18 || buf[3] == 0x20)
        && sig_at(buf, 4, b"ftyp");
    let mobile_3gp = buf.starts_with(b"3gp5");
    let brand_list = sig_at(buf, 0, &[0x00, 0x00, 0x00, 0x1C])
        && sig_at(buf, 4, b"ftypmp42")
        && sig_at(buf, 16, b"mp41mp42isom");
    ftyp_box || mobile_3gp || brand_list
}

pub(crate) fn m4v(buf: &[u8]) -> bool {
    sig_at(buf, 0, &[0x00, 0x00, 0x00, 0x1C]) && sig_at(buf, 4, b"ftypM4V")
}

// Probed before WEBM: both start with the EBML marker, MKV additionally
// requires the "matroska" doctype near the head.
pub(crate) fn mkv(buf: &[u8]) -> bool {
    sig_at(buf, 0, MKV_DOCTYPE) || sig_at(buf, 31, b"matroska")
}

pub(crate) fn webm(buf: &[u8]) -> bool {
    buf.starts_with(EBML)
}

pub(crate) fn mov(buf: &[u8]) -> bool {
    sig_at(buf, 0, &[0x00, 0x00, 0x00, 0x14]) && sig_at(buf, 4, b"ftyp")
}

pub(crate) fn avi(buf: &[u8]) -> bool {
    buf.starts_with(b"RIFF") && sig_at(buf, 8, b"AVI")
}

pub(crate) fn wmv(buf: &[u8]) -> bool {
    buf.starts_with(WMV)
}

pub(crate) fn flv(buf: &[u8]) -> bool {
    buf.starts_with(FLV)
}

pub(crate) fn mpeg(buf: &[u8]) -> bool {
    buf.starts_with(&[0x00, 0x00, 0x01]) && buf.get(3).is_some_and(|b| (0xB0..=0xBF).contains(b))
}
