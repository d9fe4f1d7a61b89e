pub mod options;

use std::borrow::Cow;

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::{debug, warn};
use roxmltree::{Document, Node, NodeType};

use crate::defs;
use crate::error::{Error, Result};
use crate::nodes::{
    self, Attributes, NodeChoice, NodeMultipleChoice, NodeShortAnswer, Question, QuestionValue,
    Quiz,
};
pub use crate::parser::options::Options;
use crate::strings;

/// Elements that have no closing tag in HTML.
const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parse a quiz document.
///
/// Question text keeps its inner markup: nested elements are written back out
/// as HTML, text is escaped, and runs of whitespace collapse to one space.
///
/// ```rust
/// # use taoquiz::{parse_quiz, Options, nodes::QuestionValue};
/// let quiz = parse_quiz(
///     r#"<quiz mathjax="true">
///          <short-answer answer="5">What is <b>2 + 3</b>?</short-answer>
///        </quiz>"#,
///     &Options::default(),
/// ).unwrap();
/// assert!(quiz.mathjax());
/// match &quiz.questions[0].value {
///     QuestionValue::ShortAnswer(sa) => {
///         assert_eq!(sa.text, "What is <b>2 + 3</b>?");
///         assert_eq!(sa.answer.as_deref(), Some("5"));
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn parse_quiz(input: &str, options: &Options) -> Result<Quiz> {
    let input: Cow<str> = if options.parse.expand_defs {
        Cow::Owned(defs::expand_defs(input)?)
    } else {
        Cow::Borrowed(input)
    };

    let doc = Document::parse(&input)?;
    Parser::new(&doc).parse()
}

struct Parser<'d, 'input> {
    doc: &'d Document<'input>,
}

impl<'d, 'input> Parser<'d, 'input> {
    fn new(doc: &'d Document<'input>) -> Self {
        Parser { doc }
    }

    fn parse(&self) -> Result<Quiz> {
        let root = self.doc.root_element();
        if root.tag_name().name() != "quiz" {
            return Err(self.schema_error(
                root,
                format!(
                    "expected <quiz> root element, found <{}>",
                    root.tag_name().name()
                ),
            ));
        }

        let mut quiz = Quiz {
            attributes: attributes(root),
            questions: vec![],
        };

        for child in root.children() {
            match child.node_type() {
                NodeType::Element => quiz.questions.push(self.parse_question(child)?),
                NodeType::Text => {
                    if !strings::is_blank(child.text().unwrap_or_default()) {
                        warn!(
                            "ignoring text between questions at {}",
                            self.position(child)
                        );
                    }
                }
                _ => {}
            }
        }

        debug!("parsed {} questions", quiz.questions.len());
        Ok(quiz)
    }

    fn parse_question(&self, node: Node) -> Result<Question> {
        let value = match node.tag_name().name() {
            "multiple-choice" => QuestionValue::MultipleChoice(self.parse_multiple_choice(node)?),
            "short-answer" => QuestionValue::ShortAnswer(NodeShortAnswer {
                text: inner_markup(node),
                answer: node.attribute("answer").map(str::to_string),
            }),
            other => {
                return Err(self.schema_error(node, format!("unknown question type <{}>", other)))
            }
        };

        Ok(Question {
            value,
            attributes: attributes(node),
        })
    }

    fn parse_multiple_choice(&self, node: Node) -> Result<NodeMultipleChoice> {
        let mut question = None;
        let mut choices = vec![];

        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "question" => {
                    if question.is_some() {
                        return Err(self.schema_error(
                            child,
                            "more than one <question> in <multiple-choice>".to_string(),
                        ));
                    }
                    question = Some(inner_markup(child));
                }
                "choice" => choices.push(NodeChoice {
                    text: inner_markup(child),
                    correct: nodes::flag(&attributes(child), "correct"),
                }),
                other => {
                    return Err(self.schema_error(
                        child,
                        format!("unexpected <{}> in <multiple-choice>", other),
                    ))
                }
            }
        }

        match question {
            Some(question) => Ok(NodeMultipleChoice { question, choices }),
            None => Err(self.schema_error(
                node,
                "<multiple-choice> has no <question>".to_string(),
            )),
        }
    }

    fn position(&self, node: Node) -> roxmltree::TextPos {
        self.doc.text_pos_at(node.range().start)
    }

    fn schema_error(&self, node: Node, message: String) -> Error {
        Error::Schema {
            message,
            position: self.position(node),
        }
    }
}

fn attributes(node: Node) -> Attributes {
    node.attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect()
}

fn inner_markup(node: Node) -> String {
    let mut out = String::new();
    for child in node.children() {
        write_markup(&mut out, child);
    }
    strings::normalize_whitespace(&out)
}

fn write_markup(out: &mut String, node: Node) {
    match node.node_type() {
        NodeType::Element => {
            let name = node.tag_name().name();
            out.push('<');
            out.push_str(name);
            for attr in node.attributes() {
                out.push(' ');
                out.push_str(attr.name());
                out.push_str("=\"");
                let value = encode_double_quoted_attribute(attr.value());
                // `$` in an attribute must not read as a math delimiter later.
                out.push_str(&value.replace('$', "&#36;"));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&name) && !node.has_children() {
                return;
            }

            for child in node.children() {
                write_markup(out, child);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        NodeType::Text => {
            out.push_str(&encode_text(node.text().unwrap_or_default()));
        }
        // Comments and processing instructions don't reach the page.
        _ => {}
    }
}
