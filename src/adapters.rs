//! Adapter traits for plugins.
//!
//! Each plugin has to implement one of the traits available in this module.

/// Implement this adapter to typeset math with something other than the
/// built-in [`MathMlAdapter`](crate::plugins::mathml::MathMlAdapter).
pub trait MathAdapter {
    /// Renders one expression to markup that is inserted into the page as is.
    ///
    /// `tex`: The TeX source between the delimiters, with HTML entities decoded.
    /// `display`: Whether the expression used display delimiters (`$$...$$` or `\[...\]`).
    fn render(&self, tex: &str, display: bool) -> String;
}
