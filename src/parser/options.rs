//! Configuration for the parser and renderer.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::MathAdapter;
use crate::sticky;

#[derive(Default, Debug, Clone)]
/// Umbrella options struct.
pub struct Options {
    /// Configure parse-time options.
    pub parse: Parse,

    /// Configure render-time options.
    pub render: Render,
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Options for the parser and the question post-processing pass.
pub struct Parse {
    /// Overrides the document's own `mathjax` attribute when set.
    ///
    /// `None` follows the document. `Some(false)` turns off both sticky
    /// wrapping and math pre-rendering even for a quiz that asks for them.
    ///
    /// ```rust
    /// # use taoquiz::{quiz_to_html, Options};
    /// let quiz = r#"<quiz><short-answer>Is $x$-th sticky?</short-answer></quiz>"#;
    /// let mut options = Options::default();
    /// assert!(!quiz_to_html(quiz, &options).unwrap().contains("class=\"sticky\""));
    ///
    /// options.parse.math = Some(true);
    /// assert!(quiz_to_html(quiz, &options).unwrap().contains("class=\"sticky\""));
    /// ```
    pub math: Option<bool>,

    /// Expands `[defs] ... [/defs]` blocks into definition tables before the
    /// document is parsed. See [`crate::defs`].
    ///
    /// ```rust
    /// # use taoquiz::{quiz_to_html, Options};
    /// let quiz = "<quiz>\n<short-answer>\n[defs]\nA = \"heads\".\n[/defs]\n</short-answer>\n</quiz>\n";
    /// let mut options = Options::default();
    /// options.parse.expand_defs = true;
    /// assert!(quiz_to_html(quiz, &options).unwrap().contains("<td style=\"vertical-align: top;\">$A = $</td>"));
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub expand_defs: bool,
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Options for the page renderer.
pub struct Render {
    /// Stylesheet to inline into the page instead of the bundled one.
    ///
    /// Comments are stripped either way.
    ///
    /// ```rust
    /// # use taoquiz::{quiz_to_html, Options};
    /// let mut options = Options::default();
    /// options.render.stylesheet = Some("/* mine */\nbody { margin: 0; }\n".to_string());
    /// let html = quiz_to_html("<quiz/>", &options).unwrap();
    /// assert!(html.contains("<style>\nbody { margin: 0; }\n</style>"));
    /// ```
    pub stylesheet: Option<String>,

    /// Class given to the spans inserted by sticky wrapping. Defaults to
    /// `sticky`, which the bundled stylesheet styles.
    pub sticky_class: Option<String>,

    /// Leave the `<h1>` heading out of the page. The title still goes into
    /// `<title>`.
    #[cfg_attr(feature = "bon", builder(default))]
    pub hide_heading: bool,
}

impl Render {
    /// The class sticky spans get.
    pub fn sticky_class(&self) -> &str {
        self.sticky_class
            .as_deref()
            .unwrap_or(sticky::DEFAULT_CLASS)
    }
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella plugins struct.
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: RenderPlugins<'p>,
}

#[derive(Default, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Plugins for alternative rendering.
pub struct RenderPlugins<'p> {
    /// Provide a math adapter to typeset math instead of the built-in MathML
    /// renderer.
    ///
    /// ```rust
    /// # use taoquiz::{quiz_to_html_with_plugins, Options, Plugins};
    /// # use taoquiz::adapters::MathAdapter;
    /// pub struct Echo;
    /// impl MathAdapter for Echo {
    ///     fn render(&self, tex: &str, display: bool) -> String {
    ///         format!("[{}{}]", if display { "D:" } else { "" }, tex)
    ///     }
    /// }
    ///
    /// let mut plugins = Plugins::default();
    /// plugins.render.math_adapter = Some(&Echo);
    /// let quiz = r#"<quiz mathjax="true"><short-answer>Find $x$.</short-answer></quiz>"#;
    /// let html = quiz_to_html_with_plugins(quiz, &Options::default(), &plugins).unwrap();
    /// assert!(html.contains("Find <span class=\"sticky\">[x].</span>"));
    /// ```
    pub math_adapter: Option<&'p dyn MathAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field(
                "math_adapter",
                &self.math_adapter.map(|_| "impl MathAdapter"),
            )
            .finish()
    }
}
