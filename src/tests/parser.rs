use super::*;
use crate::nodes::{NodeChoice, QuestionValue};
use pretty_assertions::assert_eq;

#[track_caller]
fn parse(input: &str) -> nodes::Quiz {
    parse_quiz(input, &Options::default()).unwrap()
}

#[track_caller]
fn schema_error(input: &str) -> String {
    match parse_quiz(input, &Options::default()) {
        Err(Error::Schema { message, .. }) => message,
        other => panic!("expected a schema error, got {:?}", other),
    }
}

#[test]
fn questions_in_document_order() {
    let quiz = parse(&quiz_doc(
        " title=\"Week 1\" mathjax=\"true\"",
        concat!(
            "<short-answer answer=\"4\">What is 2 + 2?</short-answer>",
            "<multiple-choice>",
            "<question>Pick one.</question>",
            "<choice>red</choice>",
            "<choice correct=\"true\">green</choice>",
            "</multiple-choice>",
            "<short-answer>Explain.</short-answer>",
        ),
    ));

    assert_eq!(quiz.title(), Some("Week 1"));
    assert!(quiz.mathjax());
    assert_eq!(
        quiz.questions
            .iter()
            .map(|q| q.value.element_name())
            .collect::<Vec<_>>(),
        vec!["short-answer", "multiple-choice", "short-answer"]
    );

    match quiz.questions[1].value {
        QuestionValue::MultipleChoice(ref mc) => {
            assert_eq!(mc.question, "Pick one.");
            assert_eq!(
                mc.choices,
                vec![
                    NodeChoice {
                        text: "red".to_string(),
                        correct: false,
                    },
                    NodeChoice {
                        text: "green".to_string(),
                        correct: true,
                    },
                ]
            );
        }
        _ => panic!("expected a multiple-choice question"),
    }

    match quiz.questions[2].value {
        QuestionValue::ShortAnswer(ref sa) => assert_eq!(sa.answer, None),
        _ => panic!("expected a short-answer question"),
    }
}

#[test]
fn inner_markup_is_kept() {
    let quiz = parse(&quiz_doc(
        "",
        "<short-answer>\n  Which is <em class=\"big\">larger</em>:\n   $a &lt; b$ or <br/> $c$?\n</short-answer>",
    ));
    assert_eq!(
        quiz.questions[0].display_text(),
        "Which is <em class=\"big\">larger</em>: $a &lt; b$ or <br> $c$?"
    );
}

#[test]
fn comments_are_dropped() {
    let quiz = parse(&quiz_doc(
        "",
        "<!-- draft --><short-answer>Keep <!-- not this -->me</short-answer>",
    ));
    assert_eq!(quiz.questions.len(), 1);
    assert_eq!(quiz.questions[0].display_text(), "Keep me");
}

#[test]
fn stray_text_is_ignored() {
    let quiz = parse(&quiz_doc("", "stray<short-answer>Q</short-answer>more"));
    assert_eq!(quiz.questions.len(), 1);
}

#[test]
fn empty_quiz() {
    let quiz = parse("<quiz/>");
    assert_eq!(quiz.title(), None);
    assert!(!quiz.mathjax());
    assert!(quiz.questions.is_empty());
}

#[test]
fn flags() {
    let quiz = parse(&quiz_doc(
        " mathjax=\"false\"",
        concat!(
            "<multiple-choice raw=\"\">",
            "<question>Q</question>",
            "<choice correct=\"no\">a</choice>",
            "<choice correct=\"0\">b</choice>",
            "<choice correct=\"yes\">c</choice>",
            "<choice correct=\" TRUE \">d</choice>",
            "</multiple-choice>",
            "<short-answer raw=\"raw\">Q</short-answer>",
        ),
    ));

    assert!(!quiz.mathjax());
    assert!(!quiz.questions[0].raw());
    assert!(quiz.questions[1].raw());

    match quiz.questions[0].value {
        QuestionValue::MultipleChoice(ref mc) => assert_eq!(
            mc.choices.iter().map(|c| c.correct).collect::<Vec<_>>(),
            vec![false, false, true, true]
        ),
        _ => panic!("expected a multiple-choice question"),
    }
}

#[test]
fn blank_title_is_no_title() {
    assert_eq!(parse("<quiz title=\"  \"/>").title(), None);
    assert_eq!(parse("<quiz title=\" Q \"/>").title(), Some("Q"));
}

#[test]
fn wrong_root() {
    assert_eq!(
        schema_error("<exam><short-answer>Q</short-answer></exam>"),
        "expected <quiz> root element, found <exam>"
    );
}

#[test]
fn unknown_question_type() {
    assert_eq!(
        schema_error(&quiz_doc("", "<essay>Q</essay>")),
        "unknown question type <essay>"
    );
}

#[test]
fn multiple_choice_needs_one_question() {
    assert_eq!(
        schema_error(&quiz_doc(
            "",
            "<multiple-choice><choice>a</choice></multiple-choice>"
        )),
        "<multiple-choice> has no <question>"
    );
    assert_eq!(
        schema_error(&quiz_doc(
            "",
            "<multiple-choice><question>a</question><question>b</question></multiple-choice>"
        )),
        "more than one <question> in <multiple-choice>"
    );
    assert_eq!(
        schema_error(&quiz_doc(
            "",
            "<multiple-choice><question>a</question><hint>b</hint></multiple-choice>"
        )),
        "unexpected <hint> in <multiple-choice>"
    );
}

#[test]
fn schema_error_position() {
    let err = parse_quiz(
        "<quiz>\n  <short-answer>Q</short-answer>\n  <essay/>\n</quiz>",
        &Options::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "unknown question type <essay> at 3:3");
}

#[test]
fn malformed_xml() {
    let err = parse_quiz("<quiz><short-answer>Q</quiz>", &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Xml(_)));
    assert!(err.to_string().starts_with("malformed quiz document: "));
}

#[test]
fn defs_are_expanded_when_asked() {
    let input = "<quiz>\n<short-answer>\nLet\n[defs]\nA = heads\n[/defs]\n</short-answer>\n</quiz>\n";

    let quiz = parse(input);
    assert!(quiz.questions[0].display_text().contains("[defs]"));

    let mut options = Options::default();
    options.parse.expand_defs = true;
    let quiz = parse_quiz(input, &options).unwrap();
    assert!(quiz.questions[0]
        .display_text()
        .starts_with("Let <table style=\"margin: 1rem auto;\"> <tbody> <tr>"));
}

#[test]
fn defs_errors_surface() {
    let mut options = Options::default();
    options.parse.expand_defs = true;
    let err = parse_quiz("<quiz>\n[defs]\n</quiz>\n", &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error on line 3: inside [defs], but not a valid definition"
    );
}
