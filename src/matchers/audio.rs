//! Audio format signature tests.

use super::sig_at;

const MIDI: &[u8] = &[0x4D, 0x54, 0x68, 0x64];
const OGG: &[u8] = &[0x4F, 0x67, 0x67, 0x53];
const FLAC: &[u8] = &[0x66, 0x4C, 0x61, 0x43];
const AMR: &[u8] = &[0x23, 0x21, 0x41, 0x4D, 0x52, 0x0A];

pub(crate) fn midi(buf: &[u8]) -> bool {
    buf.starts_with(MIDI)
}

// Three bytes minimum even for the two-byte frame-sync variant: a bare
// `FF FB` pair is not enough evidence of an MPEG frame.
pub(crate) fn mp3(buf: &[u8]) -> bool {
    buf.len() > 2 && (buf.starts_with(b"ID3") || buf.starts_with(&[0xFF, 0xFB]))
}

pub(crate) fn m4a(buf: &[u8]) -> bool {
    buf.len() > 10 && (sig_at(buf, 4, b"ftypM4A") || buf.starts_with(b"M4A "))
}

pub(crate) fn ogg(buf: &[u8]) -> bool {
    buf.starts_with(OGG)
}

pub(crate) fn flac(buf: &[u8]) -> bool {
    buf.starts_with(FLAC)
}

pub(crate) fn wav(buf: &[u8]) -> bool {
    buf.starts_with(b"RIFF") && sig_at(buf, 8, b"WAVE")
}

// The `#!AMR\n` marker is six bytes, but anything shorter than twelve bytes
// is rejected outright, matching the historical minimum-length guard.
pub(crate) fn amr(buf: &[u8]) -> bool {
    buf.len() > 11 && buf.starts_with(AMR)
}
