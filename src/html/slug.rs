//! URL-fragment slug generation for heading anchors.
//!
//! Slugs are derived byte-by-byte through a fixed Latin-1 mapping table:
//! ASCII letters lowercase, digits and `.` `_` pass through, accented
//! Latin-1 letters fold to their base letter, and everything else becomes
//! a dash. Two-byte UTF-8 sequences are folded into Latin-1 first; longer
//! sequences are outside the table's repertoire and degrade to dashes.
//! That loss is deliberate — the mapping matches the anchors that existing
//! documents already link to.

use crate::buffer::OutputBuf;

/// Latin-1 byte to slug character. Index 0 doubles as the sink for
/// unmappable code points.
#[rustfmt::skip]
const SLUG_MAP: [u8; 256] = [
    //        0     1     2     3     4     5     6     7     8     9     A     B     C     D     E     F
    /* 0x00 */ b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-',
    /* 0x10 */ b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-',
    /* 0x20 */ b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'.', b'-',
    /* 0x30 */ b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'-', b'-', b'-', b'-', b'-', b'-',
    /* 0x40 */ b'-', b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o',
    /* 0x50 */ b'p', b'q', b'r', b's', b't', b'u', b'v', b'w', b'x', b'y', b'z', b'-', b'-', b'-', b'-', b'_',
    /* 0x60 */ b'-', b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o',
    /* 0x70 */ b'p', b'q', b'r', b's', b't', b'u', b'v', b'w', b'x', b'y', b'z', b'-', b'-', b'-', b'-', b'-',
    /* 0x80 */ b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-',
    /* 0x90 */ b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-',
    /* 0xA0 */ b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-',
    /* 0xB0 */ b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-', b'-',
    /* 0xC0 */ b'a', b'a', b'a', b'a', b'a', b'a', b'a', b'c', b'e', b'e', b'e', b'e', b'i', b'i', b'i', b'i',
    /* 0xD0 */ b'd', b'n', b'o', b'o', b'o', b'o', b'o', b'x', b'o', b'u', b'u', b'u', b'u', b'y', b'-', b's',
    /* 0xE0 */ b'a', b'a', b'a', b'a', b'a', b'a', b'a', b'c', b'e', b'e', b'e', b'e', b'i', b'i', b'i', b'i',
    /* 0xF0 */ b'd', b'n', b'o', b'o', b'o', b'o', b'o', b'-', b'o', b'u', b'u', b'u', b'u', b'y', b'-', b'y',
];

/// Append the slug of `text` to `out`, returning its byte length.
///
/// Dash runs collapse to a single dash, a leading dash is suppressed, and
/// exactly one trailing dash is trimmed, so `"  Hello,  World! "` slugs to
/// `hello-world`.
pub fn append_slug(out: &mut OutputBuf, text: &[u8]) -> usize {
    out.reserve(text.len());
    let start = out.len();
    let mut prev = 0u8;

    let mut i = 0;
    while i < text.len() {
        let mut x = text[i];
        if x >= 0x80 {
            // Fold a two-byte UTF-8 sequence into Latin-1; anything longer
            // (and any stray continuation byte) lands on index 0.
            if x >> 5 == 0b110 && i + 1 < text.len() {
                i += 1;
                let cp = ((u32::from(x) << 6) & 0x7ff) + (u32::from(text[i]) & 0x3f);
                x = if cp <= 0xFF { cp as u8 } else { 0 };
            } else {
                x = 0;
            }
        }

        let c = SLUG_MAP[usize::from(x)];
        // A dash is only written after a non-dash; prev == 0 also swallows
        // the leading dash.
        if c != b'-' || (prev != 0 && prev != b'-') {
            out.push(c);
            prev = c;
        }
        i += 1;
    }

    if prev == b'-' {
        out.pop();
    }
    out.len() - start
}

/// The slug of `text` as an owned string.
///
/// # Examples
///
/// ```
/// use mdstream::html::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("caf\u{e9}"), "cafe");
/// ```
pub fn slugify(text: &str) -> String {
    let mut out = OutputBuf::with_capacity(text.len());
    append_slug(&mut out, text.as_bytes());
    // The map emits ASCII only.
    String::from_utf8_lossy(&out.into_vec()).into_owned()
}
