use once_cell::sync::Lazy;
use regex::Regex;

static CSS_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/\n?\n?").expect("valid comment pattern"));

/// Collapses each run of whitespace to a single space and trims both ends.
pub fn normalize_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_ascii_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Removes `/* ... */` comments, along with up to two newlines following each.
pub fn strip_css_comments(css: &str) -> String {
    CSS_COMMENT.replace_all(css, "").into_owned()
}

pub fn is_blank(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_whitespace())
}
