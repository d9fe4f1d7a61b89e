use super::*;
use crate::options::{Parse, Render, RenderPlugins};

#[test]
fn exercise_full_api() {
    let mut options = Options::default();
    let _: &mut Parse = &mut options.parse;
    let _: &mut Render = &mut options.render;

    options.parse.math = Some(true);
    options.parse.expand_defs = false;
    options.render.stylesheet = Some(String::new());
    options.render.sticky_class = Some("nobr".to_string());
    options.render.hide_heading = true;
    let _: &str = options.render.sticky_class();

    let mut plugins = Plugins::default();
    let _: &mut RenderPlugins = &mut plugins.render;
    plugins.render.math_adapter = Some(&EchoMath);

    let input = "<quiz/>";
    let _: Result<String> = quiz_to_html(input, &options);
    let _: Result<String> = quiz_to_html_with_plugins(input, &options, &plugins);

    let mut quiz: nodes::Quiz = parse_quiz(input, &options).unwrap();
    process_questions(&mut quiz, &options);
    let _: bool = quiz.math_enabled(&options);
    let _: Option<&str> = quiz.title();
    let _: String = format_document(&quiz, &options);
    let mut out: Vec<u8> = vec![];
    let _: std::io::Result<()> = format_html(&quiz, &options, &mut out);
    let _: String = render_math("", &plugins);
    let _: Result<String> = expand_defs("");
    let _: String = crate::sticky::wrap("");
    let _: String = crate::sticky::wrap_with_class("", "nobr");
}

#[cfg(feature = "bon")]
#[test]
fn builders() {
    let parse = Parse::builder().math(true).expand_defs(true).build();
    assert_eq!(parse.math, Some(true));
    assert!(parse.expand_defs);

    let render = Render::builder()
        .sticky_class("nobr".to_string())
        .hide_heading(true)
        .build();
    assert_eq!(render.stylesheet, None);
    assert_eq!(render.sticky_class(), "nobr");
    assert!(render.hide_heading);

    let render = Render::builder().build();
    assert_eq!(render.sticky_class(), "sticky");
    assert!(!render.hide_heading);
}

#[test]
fn full_pipeline_with_math() {
    let input = r#"<quiz title="Fibonacci" mathjax="true">
  <short-answer answer="21">
    What is the $(m+2)$-th Fibonacci number for $m = 6$?
  </short-answer>
  <multiple-choice raw="true">
    <question>Is $F_1$-based indexing used?</question>
    <choice correct="true">Yes</choice>
    <choice>No, it's $F_0$</choice>
  </multiple-choice>
</quiz>"#;

    let mut plugins = Plugins::default();
    plugins.render.math_adapter = Some(&EchoMath);
    let html = quiz_to_html_with_plugins(input, &Options::default(), &plugins).unwrap();

    assert!(html.contains(
        "<div class=\"prompt\">What is the <span class=\"sticky\">[(m+2)]-th</span> \
         Fibonacci number for <span class=\"sticky\">[m = 6]?</span></div>"
    ));
    assert!(html.contains("<div class=\"prompt\">Is [F_1]-based indexing used?</div>"));
    assert!(html.contains("<li class=\"choice\">No, it's [F_0]</li>"));
    assert!(html.contains("<summary>Answer</summary>\n21\n</details>"));
}

#[test]
fn full_pipeline_without_math() {
    let input = r#"<quiz><short-answer>Costs \$5 and $x$-th.</short-answer></quiz>"#;

    let mut plugins = Plugins::default();
    plugins.render.math_adapter = Some(&EchoMath);
    let html = quiz_to_html_with_plugins(input, &Options::default(), &plugins).unwrap();

    assert!(html.contains("<div class=\"prompt\">Costs \\$5 and $x$-th.</div>"));
}

#[test]
fn attribute_dollars_survive_the_page() {
    let input = r#"<quiz mathjax="true"><short-answer>see <abbr title="costs $5 or $6">this</abbr> now</short-answer></quiz>"#;

    let mut plugins = Plugins::default();
    plugins.render.math_adapter = Some(&EchoMath);
    let html = quiz_to_html_with_plugins(input, &Options::default(), &plugins).unwrap();

    assert!(html.contains(
        "<div class=\"prompt\">see <abbr title=\"costs &#36;5 or &#36;6\">this</abbr> now</div>"
    ));
}

#[test]
fn errors_propagate() {
    assert!(matches!(
        quiz_to_html("<quiz>", &Options::default()),
        Err(Error::Xml(_))
    ));
    assert!(matches!(
        quiz_to_html("<test/>", &Options::default()),
        Err(Error::Schema { .. })
    ));
}
