//! Post-processing of question text between parsing and rendering.

use log::{debug, info};

use crate::nodes::Quiz;
use crate::parser::options::Options;
use crate::sticky;

impl Quiz {
    /// Whether math processing applies to this quiz: the `math` override in
    /// `options` if set, otherwise the document's `mathjax` attribute.
    pub fn math_enabled(&self, options: &Options) -> bool {
        options.parse.math.unwrap_or_else(|| self.mathjax())
    }
}

/// Applies sticky wrapping to each question's display text, in place.
///
/// Nothing happens unless math is enabled for the quiz. Questions marked
/// `raw` are skipped. Only the prompt of a multiple-choice question and the
/// body of a short-answer question are wrapped; choices and answers are not.
pub fn process_questions(quiz: &mut Quiz, options: &Options) {
    if !quiz.math_enabled(options) {
        return;
    }

    let class = options.render.sticky_class();
    let mut wrapped = 0;
    for (ix, question) in quiz.questions.iter_mut().enumerate() {
        if question.raw() {
            debug!("question {}: raw, skipping", ix + 1);
            continue;
        }

        let text = question.display_text_mut();
        let result = sticky::wrap_with_class(text, class);
        if result != *text {
            debug!("question {}: wrapped touching math", ix + 1);
            wrapped += 1;
        }
        *text = result;
    }

    info!(
        "sticky wrapping changed {} of {} questions",
        wrapped,
        quiz.questions.len()
    );
}
