//! The HTML renderer for quizzes.
//!
//! A quiz becomes one self-contained page: the stylesheet is inlined, and
//! question text, which is already markup, goes into the page as is.

mod context;

pub use context::Context;

use std::io::{self, Write};

use html_escape::encode_safe;

use crate::nodes::{NodeMultipleChoice, NodeShortAnswer, Question, QuestionValue, Quiz};
use crate::parser::options::Options;
use crate::strings::strip_css_comments;

/// The stylesheet used when [`Render::stylesheet`](crate::options::Render::stylesheet)
/// is not set.
pub const BUNDLED_STYLESHEET: &str = include_str!("../assets/taoquiz.css");

const DEFAULT_TITLE: &str = "Quiz";

/// Formats a quiz as an HTML page, returning it as a string.
pub fn format_document(quiz: &Quiz, options: &Options) -> String {
    let mut bw = Vec::with_capacity(4096);
    format_html(quiz, options, &mut bw).expect("writing to a Vec cannot fail");
    String::from_utf8(bw).expect("page is built from UTF-8 strings")
}

/// Formats a quiz as an HTML page.
///
/// ```rust
/// # use taoquiz::{format_html, parse_quiz, Options};
/// let options = Options::default();
/// let quiz = parse_quiz(r#"<quiz title="Q&amp;A"><short-answer>Hi</short-answer></quiz>"#, &options).unwrap();
/// let mut page = vec![];
/// format_html(&quiz, &options, &mut page).unwrap();
/// let page = String::from_utf8(page).unwrap();
/// assert!(page.starts_with("<!DOCTYPE html>\n"));
/// assert!(page.contains("<title>Q&amp;A</title>"));
/// assert!(page.contains("<div class=\"prompt\">Hi</div>"));
/// ```
pub fn format_html(quiz: &Quiz, options: &Options, output: &mut dyn Write) -> io::Result<()> {
    let mut context = Context::new(output, options);
    format_head(&mut context, quiz)?;
    format_body(&mut context, quiz)?;
    context.flush()
}

/// Writes `text` to `output` with `&`, `<`, `>`, `"` and `'` escaped.
pub fn escape(output: &mut dyn Write, text: &str) -> io::Result<()> {
    output.write_all(encode_safe(text).as_bytes())
}

fn format_head(context: &mut Context, quiz: &Quiz) -> io::Result<()> {
    let options = context.options;

    context.write_all(b"<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n")?;
    context.write_all(b"<meta charset=\"utf-8\">\n")?;
    context.write_all(
        b"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    )?;

    context.write_all(b"<title>")?;
    context.escape(quiz.title().unwrap_or(DEFAULT_TITLE))?;
    context.write_all(b"</title>\n")?;

    let stylesheet = options
        .render
        .stylesheet
        .as_deref()
        .unwrap_or(BUNDLED_STYLESHEET);
    context.write_all(b"<style>\n")?;
    context.write_all(strip_css_comments(stylesheet).as_bytes())?;
    context.cr()?;
    context.write_all(b"</style>\n</head>\n")
}

fn format_body(context: &mut Context, quiz: &Quiz) -> io::Result<()> {
    context.write_all(b"<body>\n<main class=\"quiz\">\n")?;

    if let Some(title) = quiz.title() {
        if !context.options.render.hide_heading {
            context.write_all(b"<h1>")?;
            context.escape(title)?;
            context.write_all(b"</h1>\n")?;
        }
    }

    context.write_all(b"<ol class=\"questions\">\n")?;
    for (ix, question) in quiz.questions.iter().enumerate() {
        format_question(context, ix + 1, question)?;
    }
    context.write_all(b"</ol>\n")?;

    context.write_all(b"</main>\n</body>\n</html>\n")
}

fn format_question(context: &mut Context, number: usize, question: &Question) -> io::Result<()> {
    writeln!(
        context,
        "<li class=\"question {}\" id=\"question-{}\">",
        question.value.element_name(),
        number
    )?;

    match question.value {
        QuestionValue::MultipleChoice(ref mc) => format_multiple_choice(context, mc)?,
        QuestionValue::ShortAnswer(ref sa) => format_short_answer(context, sa)?,
    }

    context.write_all(b"</li>\n")
}

fn format_prompt(context: &mut Context, markup: &str) -> io::Result<()> {
    context.write_all(b"<div class=\"prompt\">")?;
    context.write_all(markup.as_bytes())?;
    context.write_all(b"</div>\n")
}

fn format_multiple_choice(context: &mut Context, mc: &NodeMultipleChoice) -> io::Result<()> {
    format_prompt(context, &mc.question)?;

    if mc.choices.is_empty() {
        return Ok(());
    }

    context.write_all(b"<ul class=\"choices\">\n")?;
    for choice in &mc.choices {
        if choice.correct {
            context.write_all(b"<li class=\"choice\" data-correct>")?;
        } else {
            context.write_all(b"<li class=\"choice\">")?;
        }
        context.write_all(choice.text.as_bytes())?;
        context.write_all(b"</li>\n")?;
    }
    context.write_all(b"</ul>\n")
}

fn format_short_answer(context: &mut Context, sa: &NodeShortAnswer) -> io::Result<()> {
    format_prompt(context, &sa.text)?;

    if let Some(ref answer) = sa.answer {
        context.write_all(b"<details class=\"answer\">\n<summary>Answer</summary>\n")?;
        context.escape(answer)?;
        context.cr()?;
        context.write_all(b"</details>\n")?;
    }

    Ok(())
}
