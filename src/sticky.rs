//! Keeps inline math glued to the text it touches.
//!
//! Browsers on narrow viewports are free to break a line at the zero-width
//! boundary between an inline math expression and directly adjacent prose,
//! so `the $(m+2)$-th number` can end up with `-th` alone on the next line.
//! [`wrap`] finds every math span with no whitespace on at least one side and
//! wraps the whole touching run in a `<span class="sticky">`, which the page
//! stylesheet displays as an unbreakable inline block.
//!
//! ```rust
//! assert_eq!(
//!     taoquiz::sticky::wrap("the $(m+2)$-th Fibonacci number"),
//!     "the <span class=\"sticky\">$(m+2)$-th</span> Fibonacci number",
//! );
//! ```

/// The class given to inserted spans by [`wrap`].
pub const DEFAULT_CLASS: &str = "sticky";

const CLOSE_TAG: &str = "</span>";

/// Wraps each math span that touches surrounding text, using the default
/// `sticky` class.
pub fn wrap(text: &str) -> String {
    wrap_with_class(text, DEFAULT_CLASS)
}

/// Wraps each math span that touches surrounding text in a span of the given
/// class.
///
/// The output is the input with zero or more `<span class="...">` /
/// `</span>` pairs inserted; no other byte is changed. Text that is already
/// separated from its math by boundary characters comes back unchanged.
pub fn wrap_with_class(text: &str, class: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut scan = 0;
    let mut copied = 0;

    while let Some(begin) = find_delimiter(bytes, scan) {
        if is_escaped(bytes, begin) {
            scan = begin + 1;
            continue;
        }

        let end = match find_unescaped_delimiter(bytes, begin + 1) {
            Some(end) => end,
            // Unterminated: there is no span to protect.
            None => break,
        };

        // `$$` is the edge of display math, not an empty inline span.
        if end == begin + 1 {
            scan = end + 1;
            continue;
        }

        let pre = left_boundary(bytes, begin);
        let post = right_boundary(bytes, end);

        let left_clear = match pre {
            Some(pre) => pre + 1 == begin,
            None => begin == 0,
        };
        let right_clear = post == Some(end + 1);

        if left_clear && right_clear {
            scan = end + 2;
            out.push_str(&text[copied..scan]);
            copied = scan;
            continue;
        }

        let start = pre.map_or(0, |pre| pre + 1).max(copied);
        let stop = post.unwrap_or(bytes.len());

        out.push_str(&text[copied..start]);
        open_tag(&mut out, class);
        out.push_str(&text[start..stop]);
        out.push_str(CLOSE_TAG);

        copied = stop;
        scan = stop;
    }

    out.push_str(&text[copied..]);
    out
}

/// Removes every span inserted by [`wrap_with_class`] with the given class.
///
/// Only the exact tags `wrap_with_class` produces are recognised, so this is
/// the inverse of wrapping and nothing more: `strip(&wrap(s), "sticky") == s`.
pub fn strip(text: &str, class: &str) -> String {
    let mut open = String::new();
    open_tag(&mut open, class);

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ix) = rest.find(&open) {
        out.push_str(&rest[..ix]);
        rest = &rest[ix + open.len()..];
        match rest.find(CLOSE_TAG) {
            Some(close) => {
                out.push_str(&rest[..close]);
                rest = &rest[close + CLOSE_TAG.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

fn open_tag(out: &mut String, class: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
}

fn find_delimiter(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == b'$')
        .map(|ix| ix + from)
}

fn find_unescaped_delimiter(bytes: &[u8], mut from: usize) -> Option<usize> {
    loop {
        let ix = find_delimiter(bytes, from)?;
        if !is_escaped(bytes, ix) {
            return Some(ix);
        }
        from = ix + 1;
    }
}

fn is_escaped(bytes: &[u8], ix: usize) -> bool {
    ix > 0 && bytes[ix - 1] == b'\\'
}

/// Whitespace, or the end of a tag to the left of a span.
pub(crate) fn is_left_boundary(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t' | b'>')
}

/// Whitespace, or the start of a tag to the right of a span.
pub(crate) fn is_right_boundary(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t' | b'<')
}

fn left_boundary(bytes: &[u8], begin: usize) -> Option<usize> {
    bytes[..begin].iter().rposition(|&b| is_left_boundary(b))
}

fn right_boundary(bytes: &[u8], end: usize) -> Option<usize> {
    bytes[end..]
        .iter()
        .position(|&b| is_right_boundary(b))
        .map(|ix| ix + end)
}
