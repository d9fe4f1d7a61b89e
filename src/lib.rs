//! Converts quiz documents written in XML into self-contained HTML pages.
//!
//! A quiz is a `<quiz>` element holding `<multiple-choice>` and
//! `<short-answer>` questions. Question text may contain TeX math between `$`
//! delimiters; when the quiz sets `mathjax="true"`, math that directly touches
//! surrounding text is wrapped so browsers can't break a line between them,
//! and every expression is pre-rendered to MathML.
//!
//! ```rust
//! use taoquiz::{quiz_to_html, Options};
//!
//! let quiz = r#"<quiz title="Fibonacci" mathjax="true">
//!   <short-answer answer="21">What is the $(m+2)$-th Fibonacci number for $m = 6$?</short-answer>
//! </quiz>"#;
//!
//! let page = quiz_to_html(quiz, &Options::default()).unwrap();
//! assert!(page.contains("<title>Fibonacci</title>"));
//! assert!(page.contains("<span class=\"sticky\"><math"));
//! ```
//!
//! The stages are available separately: [`parse_quiz`],
//! [`process_questions`], [`format_html`] and [`render_math`]. The sticky
//! wrapping transform on its own is [`sticky::wrap`].

#![deny(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]

pub mod adapters;
pub mod defs;
mod error;
pub mod html;
pub mod math;
pub mod nodes;
mod parser;
pub mod plugins;
mod process;
pub mod sticky;
mod strings;
#[cfg(test)]
mod tests;

pub use defs::expand_defs;
pub use error::{Error, Result};
pub use html::{format_document, format_html};
pub use math::render_math;
pub use parser::options::{self, Options, Plugins};
pub use parser::parse_quiz;
pub use process::process_questions;

use log::info;

/// Render a quiz document to an HTML page, using the given options.
///
/// Runs the whole pipeline: parse, sticky wrapping, page rendering and, if
/// math is enabled for the quiz, math pre-rendering.
pub fn quiz_to_html(input: &str, options: &Options) -> Result<String> {
    quiz_to_html_with_plugins(input, options, &Plugins::default())
}

/// Render a quiz document to an HTML page, using the given options and plugins.
pub fn quiz_to_html_with_plugins(
    input: &str,
    options: &Options,
    plugins: &Plugins,
) -> Result<String> {
    let mut quiz = parse_quiz(input, options)?;
    process_questions(&mut quiz, options);

    let page = format_document(&quiz, options);
    if quiz.math_enabled(options) {
        info!("rendering math");
        Ok(render_math(&page, plugins))
    } else {
        Ok(page)
    }
}
