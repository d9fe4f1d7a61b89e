//! Expands `[defs]` blocks into tables of math definitions.
//!
//! Quiz authors write event and variable definitions as a block:
//!
//! ```text
//! [defs]
//!   A = "the sum of the three dice rolls is 12",
//!   B = "the sum of the three dice rolls is odd".
//! [/defs]
//! ```
//!
//! and get a two-column table that reflows well on narrow screens, with the
//! quotes and trailing punctuation typeset as math so they stay attached to
//! the definition. This runs on the raw document text, line by line, before
//! it is parsed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static BEGIN_DEFS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)\[defs\]\s*$").expect("valid [defs] pattern"));
static END_DEFS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[/defs\]\s*$").expect("valid [/defs] pattern"));
static DEF_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\S+) = (.+)$").expect("valid definition pattern"));
static DEF_PUNCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+)([.,]\s*)((?:\[.*\])?)$").expect("valid punctuation pattern")
});

/// One `variable = definition` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDef {
    /// Left-hand side, typeset as math.
    pub variable: String,
    /// Right-hand side, as written.
    pub definition: String,
}

struct Block {
    indent: String,
    defs: Vec<VarDef>,
    line: usize,
}

/// Replaces every `[defs] ... [/defs]` block in `input` with its table.
///
/// Lines outside blocks are copied through; line endings in the output are
/// always `\n`.
///
/// ```rust
/// let out = taoquiz::expand_defs("Let\n[defs]\nA = \"heads\".\n[/defs]\n").unwrap();
/// assert!(out.starts_with("Let\n<table style=\"margin: 1rem auto;\">\n"));
/// assert!(out.contains("<td style=\"vertical-align: top;\">$A = $</td>\n"));
/// assert!(out.contains("        $\\text{``}$heads$\\text{''}.$\n"));
/// ```
pub fn expand_defs(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut block: Option<Block> = None;

    for (ix, line) in input.split_inclusive('\n').enumerate() {
        let newline = line.ends_with('\n');
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        if let Some(b) = block.as_mut() {
            if END_DEFS.is_match(content) {
                write_table(&mut out, &b.indent, &b.defs);
                block = None;
            } else if let Some(caps) = DEF_VAR.captures(content) {
                b.defs.push(VarDef {
                    variable: caps[1].to_string(),
                    definition: caps[2].to_string(),
                });
            } else {
                return Err(Error::Defs {
                    message: "inside [defs], but not a valid definition".to_string(),
                    line: ix + 1,
                });
            }
        } else if let Some(caps) = BEGIN_DEFS.captures(content) {
            block = Some(Block {
                indent: caps[1].to_string(),
                defs: vec![],
                line: ix + 1,
            });
        } else {
            out.push_str(content);
            if newline {
                out.push('\n');
            }
        }
    }

    match block {
        Some(b) => Err(Error::Defs {
            message: "[defs] not closed by end of file".to_string(),
            line: b.line,
        }),
        None => Ok(out),
    }
}

/// Applies the typesetting rules to one definition:
///
/// * a pair of double quotes becomes TeX quotes;
/// * a trailing `.` or `,` (optionally followed by a `[...]` suffix) becomes math;
/// * adjacent inline math is coalesced by dropping every `$$`.
pub fn format_def(definition: &str) -> String {
    let mut definition = definition.to_string();

    if definition.matches('"').count() == 2 {
        definition = definition.replacen('"', r"$\text{``}$", 1);
        definition = definition.replacen('"', r"$\text{''}$", 1);
    }

    if let Some(caps) = DEF_PUNCT.captures(&definition) {
        let punct = caps[2].replace('.', "$.$").replace(',', "$,$");
        definition = format!("{}{}{}", &caps[1], punct, &caps[3]);
    }

    while definition.contains("$$") {
        definition = definition.replace("$$", "");
    }

    definition
}

fn write_table(out: &mut String, indent: &str, defs: &[VarDef]) {
    let mut line = |s: &str| {
        out.push_str(indent);
        out.push_str(s);
        out.push('\n');
    };

    line("<table style=\"margin: 1rem auto;\">");
    line("  <tbody>");

    for def in defs {
        line("    <tr>");
        line(&format!(
            "      <td style=\"vertical-align: top;\">${} = $</td>",
            def.variable
        ));
        line("      <td>");
        line(&format!("        {}", format_def(&def.definition)));
        line("      </td>");
        line("    </tr>");
    }

    line("  </tbody>");
    line("</table>");
}
