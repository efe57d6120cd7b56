//! Font format signature tests.

const WOFF: &[u8] = &[0x77, 0x4F, 0x46, 0x46, 0x00, 0x01, 0x00, 0x00];
const WOFF2: &[u8] = &[0x77, 0x4F, 0x46, 0x32, 0x00, 0x01, 0x00, 0x00];
const TTF: &[u8] = &[0x00, 0x01, 0x00, 0x00, 0x00];
const OTF: &[u8] = &[0x4F, 0x54, 0x54, 0x4F, 0x00];

pub(crate) fn woff(buf: &[u8]) -> bool {
    buf.starts_with(WOFF)
}

pub(crate) fn woff2(buf: &[u8]) -> bool {
    buf.starts_with(WOFF2)
}

pub(crate) fn ttf(buf: &[u8]) -> bool {
    buf.starts_with(TTF)
}

pub(crate) fn otf(buf: &[u8]) -> bool {
    buf.starts_with(OTF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_woff_variants() {
        assert!(woff(b"wOFF\x00\x01\x00\x00"));
        assert!(woff2(b"wOF2\x00\x01\x00\x00"));
        assert!(!woff(b"wOF2\x00\x01\x00\x00"));
        assert!(!woff2(b"wOFF\x00\x01\x00\x00"));
    }

    #[test]
    fn test_sfnt_headers() {
        assert!(ttf(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x0F]));
        assert!(otf(b"OTTO\x00\x0A"));
        assert!(!ttf(&[0x00, 0x01, 0x00, 0x00]));
        assert!(!otf(b"OTTO"));
    }
}
