//! HTML entity escaping.
//!
//! The transform is byte-oriented and encoding-agnostic: membership in the
//! escape set is a property of the byte value alone, so multi-byte UTF-8
//! sequences pass through untouched without ever being decoded.

use crate::buffer::OutputBuf;

const fn build_unsafe_table() -> [bool; 256] {
    let mut table = [false; 256];
    table[b'&' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'"' as usize] = true;
    table
}

/// Bytes that cannot appear literally in HTML text or quoted attributes.
static HTML_UNSAFE: [bool; 256] = build_unsafe_table();

#[inline]
fn needs_escape(byte: u8) -> bool {
    HTML_UNSAFE[byte as usize]
}

/// Append `data` to `out` with `&` `<` `>` `"` replaced by entity
/// references.
///
/// All other bytes are copied through unchanged. The scanner skips ahead
/// four bytes at a time while no byte in the window needs escaping; this
/// is a throughput optimization only, and the output is byte-identical to
/// a per-byte scan for every input.
///
/// # Examples
///
/// ```
/// use mdstream::{OutputBuf, html::escape_html_into};
///
/// let mut out = OutputBuf::new();
/// escape_html_into(&mut out, b"a < b & \"c\"");
/// assert_eq!(out.as_bytes(), b"a &lt; b &amp; &quot;c&quot;");
/// ```
pub fn escape_html_into(out: &mut OutputBuf, data: &[u8]) {
    let mut beg = 0;
    let mut off = 0;

    loop {
        while off + 3 < data.len()
            && !needs_escape(data[off])
            && !needs_escape(data[off + 1])
            && !needs_escape(data[off + 2])
            && !needs_escape(data[off + 3])
        {
            off += 4;
        }
        while off < data.len() && !needs_escape(data[off]) {
            off += 1;
        }

        if off > beg {
            out.extend_from_slice(&data[beg..off]);
        }
        if off == data.len() {
            break;
        }

        match data[off] {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'"' => out.extend_from_slice(b"&quot;"),
            _ => unreachable!(),
        }
        off += 1;
        beg = off;
    }
}
