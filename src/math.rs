//! Pre-renders math in a finished page.
//!
//! The page is scanned as markup: tags are copied through, and the text
//! between them is searched for math delimiters, in the same places a
//! browser-side typesetter would look.
//!
//! | Delimiters      | Mode    |
//! |-----------------|---------|
//! | `$...$`         | inline  |
//! | `\(...\)`       | inline  |
//! | `$$...$$`       | display |
//! | `\[...\]`       | display |
//!
//! Outside math, `\$` stands for a literal dollar sign. An opening delimiter
//! that is never closed is left as text.

use html_escape::decode_html_entities;
use log::info;

use crate::adapters::MathAdapter;
use crate::parser::options::Plugins;
use crate::plugins::mathml::MathMlAdapter;

/// Elements whose content is never typeset.
const SKIPPED_ELEMENTS: [&str; 6] = ["style", "script", "title", "textarea", "pre", "code"];

/// Replaces every math expression in `markup` with its rendering.
///
/// Uses the math adapter from `plugins` if one is set, and
/// [`MathMlAdapter`] otherwise.
///
/// ```rust
/// # use taoquiz::{render_math, Plugins};
/// let page = render_math("<p>costs \\$5, or $x$</p>", &Plugins::default());
/// assert!(page.starts_with("<p>costs $5, or <math"));
/// assert!(page.ends_with("</math></p>"));
/// ```
pub fn render_math(markup: &str, plugins: &Plugins) -> String {
    let fallback = MathMlAdapter::new();
    let adapter: &dyn MathAdapter = match plugins.render.math_adapter {
        Some(adapter) => adapter,
        None => &fallback,
    };

    let mut typesetter = Typesetter {
        adapter,
        out: String::with_capacity(markup.len() * 2),
        rendered: 0,
    };
    let mut skipping: Option<String> = None;
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        let (text, tail) = rest.split_at(lt);
        if skipping.is_some() {
            typesetter.out.push_str(text);
        } else {
            typesetter.typeset(text);
        }

        let tag_len = match tag_length(tail) {
            Some(len) => len,
            None => {
                // A stray `<` with no tag after it is text.
                typesetter.out.push('<');
                rest = &tail[1..];
                continue;
            }
        };
        let tag = &tail[..tag_len];
        typesetter.out.push_str(tag);
        rest = &tail[tag_len..];

        let (name, closing) = tag_name(tag);
        if skipping.is_some() {
            if closing && skipping.as_deref() == Some(name.as_str()) {
                skipping = None;
            }
        } else if !closing && !tag.ends_with("/>") && SKIPPED_ELEMENTS.contains(&name.as_str()) {
            skipping = Some(name);
        }
    }

    if skipping.is_some() {
        typesetter.out.push_str(rest);
    } else {
        typesetter.typeset(rest);
    }

    info!("rendered {} math expressions", typesetter.rendered);
    typesetter.out
}

struct Typesetter<'a> {
    adapter: &'a dyn MathAdapter,
    out: String,
    rendered: usize,
}

impl<'a> Typesetter<'a> {
    /// Typesets the math in one run of text containing no tags.
    fn typeset(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let mut copied = 0;
        let mut i = 0;

        while i < bytes.len() {
            let found = match (bytes[i], bytes.get(i + 1)) {
                (b'\\', Some(b'$')) => {
                    self.out.push_str(&text[copied..i]);
                    self.out.push('$');
                    i += 2;
                    copied = i;
                    continue;
                }
                (b'\\', Some(b'(')) => find_from(text, i + 2, "\\)").map(|end| (i + 2, end, 2, false)),
                (b'\\', Some(b'[')) => find_from(text, i + 2, "\\]").map(|end| (i + 2, end, 2, true)),
                (b'$', Some(b'$')) => find_unescaped(text, i + 2, "$$").map(|end| (i + 2, end, 2, true)),
                (b'$', _) => find_unescaped(text, i + 1, "$").map(|end| (i + 1, end, 1, false)),
                _ => None,
            };

            match found {
                Some((start, end, close_len, display)) => {
                    self.out.push_str(&text[copied..i]);
                    self.render(&text[start..end], display);
                    i = end + close_len;
                    copied = i;
                }
                None => {
                    // Unterminated `$$` must not be retried as two `$`.
                    i += if bytes[i] == b'$' && bytes.get(i + 1) == Some(&b'$') {
                        2
                    } else {
                        1
                    };
                }
            }
        }

        self.out.push_str(&text[copied..]);
    }

    fn render(&mut self, source: &str, display: bool) {
        let tex = decode_html_entities(source);
        self.out.push_str(&self.adapter.render(&tex, display));
        self.rendered += 1;
    }
}

fn find_from(text: &str, from: usize, pat: &str) -> Option<usize> {
    text.get(from..)?.find(pat).map(|ix| ix + from)
}

/// Finds `pat` at or after `from`, skipping occurrences preceded by a backslash.
fn find_unescaped(text: &str, mut from: usize, pat: &str) -> Option<usize> {
    loop {
        let ix = find_from(text, from, pat)?;
        if ix == 0 || text.as_bytes()[ix - 1] != b'\\' {
            return Some(ix);
        }
        from = ix + 1;
    }
}

/// Length of the tag or comment at the start of `s`, which starts with `<`.
fn tag_length(s: &str) -> Option<usize> {
    if s.starts_with("<!--") {
        return s.find("-->").map(|ix| ix + 3);
    }

    match s.as_bytes().get(1) {
        Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?') => {
            s.find('>').map(|ix| ix + 1)
        }
        _ => None,
    }
}

/// The lower-cased element name of a tag, and whether it is a closing tag.
fn tag_name(tag: &str) -> (String, bool) {
    let inner = &tag[1..];
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(inner) => (true, inner),
        None => (false, inner),
    };
    let name = inner
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-')
        .map(|b| b.to_ascii_lowercase() as char)
        .collect();
    (name, closing)
}
