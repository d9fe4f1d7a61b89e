use crate::adapters::MathAdapter;
use crate::*;

mod api;
mod parser;

/// Renders math as `[tex]` inline and `[D:tex]` display, so tests don't
/// depend on the exact MathML produced.
pub(crate) struct EchoMath;

impl MathAdapter for EchoMath {
    fn render(&self, tex: &str, display: bool) -> String {
        if display {
            format!("[D:{}]", tex)
        } else {
            format!("[{}]", tex)
        }
    }
}

#[track_caller]
pub(crate) fn compare_strs(output: &str, expected: &str, kind: &str, original_input: &str) {
    if output != expected {
        println!("Running {} test", kind);
        println!("Got:");
        println!("==============================");
        println!("{}", output);
        println!("==============================");
        println!();
        println!("Expected:");
        println!("==============================");
        println!("{}", expected);
        println!("==============================");
        println!();
        println!("Input:");
        println!("==============================");
        println!("{}", original_input);
        println!("==============================");
        println!();
    }
    pretty_assertions::assert_eq!(output, expected);
}

/// Builds a quiz document from question elements.
pub(crate) fn quiz_doc(attrs: &str, questions: &str) -> String {
    format!("<quiz{}>{}</quiz>", attrs, questions)
}

/// Parses and processes `input`, returning the display text of each question.
#[track_caller]
pub(crate) fn processed_texts(input: &str, options: &Options) -> Vec<String> {
    let mut quiz = parse_quiz(input, options).unwrap();
    process_questions(&mut quiz, options);
    quiz.questions
        .iter()
        .map(|q| q.display_text().to_string())
        .collect()
}
