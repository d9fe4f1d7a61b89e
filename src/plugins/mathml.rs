//! Adapter for the pulldown-latex MathML renderer.

use crate::adapters::MathAdapter;
use html_escape::encode_text;
use log::warn;
use pulldown_latex::config::DisplayMode;
use pulldown_latex::RenderConfig;
use pulldown_latex::{mathml::push_mathml, Parser, Storage};

#[derive(Debug, Default, Copy, Clone)]
/// Renders TeX to MathML with `pulldown-latex`.
///
/// Expressions the renderer rejects come out as their escaped source in a
/// `<span class="math-error">`, so one bad formula never sinks the page.
pub struct MathMlAdapter;

impl MathMlAdapter {
    /// Construct a new `MathMlAdapter`.
    pub fn new() -> Self {
        MathMlAdapter
    }
}

impl MathAdapter for MathMlAdapter {
    fn render(&self, tex: &str, display: bool) -> String {
        let storage = Storage::new();
        let parser = Parser::new(tex, &storage);
        let mut config: RenderConfig = Default::default();
        config.display_mode = if display {
            DisplayMode::Block
        } else {
            DisplayMode::Inline
        };

        let mut mathml = String::new();
        // Some parse errors are rendered into the output instead of being
        // returned, so look for the error report too.
        match push_mathml(&mut mathml, parser, config) {
            Ok(()) if !(mathml.contains("parsing error") && mathml.contains("╭─►")) => mathml,
            _ => {
                warn!("could not typeset `{}`, leaving it as source", tex);
                error_span(tex, display)
            }
        }
    }
}

fn error_span(tex: &str, display: bool) -> String {
    let (open, close) = if display { ("$$", "$$") } else { ("$", "$") };
    format!(
        "<span class=\"math-error\">{}{}{}</span>",
        open,
        encode_text(tex),
        close
    )
}
