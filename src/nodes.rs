//! The quiz document tree.

use std::collections::BTreeMap;

/// Attributes of a quiz or question element, by name.
pub type Attributes = BTreeMap<String, String>;

/// A parsed quiz: document-level attributes and its questions in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Quiz {
    /// Attributes of the root `<quiz>` element.
    pub attributes: Attributes,

    /// The questions, in the order they appear in the source.
    pub questions: Vec<Question>,
}

impl Quiz {
    /// The page title, from the `title` attribute.
    pub fn title(&self) -> Option<&str> {
        self.attributes
            .get("title")
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
    }

    /// Whether the document asks for math processing, via its `mathjax`
    /// attribute.
    pub fn mathjax(&self) -> bool {
        flag(&self.attributes, "mathjax")
    }
}

/// One question of a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The kind of question and its content.
    pub value: QuestionValue,

    /// Attributes of the question element.
    pub attributes: Attributes,
}

impl Question {
    /// Whether the question opted out of text post-processing with `raw`.
    pub fn raw(&self) -> bool {
        flag(&self.attributes, "raw")
    }

    /// The display text that post-processing applies to: the prompt of a
    /// multiple-choice question, or the body of a short-answer question.
    pub fn display_text(&self) -> &str {
        match self.value {
            QuestionValue::MultipleChoice(ref mc) => &mc.question,
            QuestionValue::ShortAnswer(ref sa) => &sa.text,
        }
    }

    /// Mutable counterpart of [`Question::display_text`].
    pub fn display_text_mut(&mut self) -> &mut String {
        match self.value {
            QuestionValue::MultipleChoice(ref mut mc) => &mut mc.question,
            QuestionValue::ShortAnswer(ref mut sa) => &mut sa.text,
        }
    }
}

/// The kinds of question a quiz can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionValue {
    /// `<multiple-choice>`: a `<question>` prompt followed by `<choice>` options.
    MultipleChoice(NodeMultipleChoice),

    /// `<short-answer>`: the element's own content is the question, with an
    /// optional expected `answer` attribute.
    ShortAnswer(NodeShortAnswer),
}

impl QuestionValue {
    /// The element name this value is parsed from, also used as its CSS class.
    pub fn element_name(&self) -> &'static str {
        match *self {
            QuestionValue::MultipleChoice(..) => "multiple-choice",
            QuestionValue::ShortAnswer(..) => "short-answer",
        }
    }
}

/// The content of a multiple-choice question.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeMultipleChoice {
    /// Markup of the prompt.
    pub question: String,

    /// The options, in document order.
    pub choices: Vec<NodeChoice>,
}

/// One option of a multiple-choice question.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeChoice {
    /// Markup of the option.
    pub text: String,

    /// Whether this option is marked `correct`.
    pub correct: bool,
}

/// The content of a short-answer question.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeShortAnswer {
    /// Markup of the question body.
    pub text: String,

    /// The expected answer, as plain text.
    pub answer: Option<String>,
}

/// Reads a boolean attribute. Present means on, unless the value spells out
/// "off" in one of the usual ways.
pub fn flag(attributes: &Attributes, name: &str) -> bool {
    match attributes.get(name) {
        None => false,
        Some(value) => !matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "" | "false" | "0" | "no" | "off"
        ),
    }
}
