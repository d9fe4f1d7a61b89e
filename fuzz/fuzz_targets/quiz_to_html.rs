#![no_main]

use libfuzzer_sys::fuzz_target;

use taoquiz::{quiz_to_html, Options};

fuzz_target!(|s: &str| {
    let mut options = Options::default();
    options.parse.math = Some(true);
    options.parse.expand_defs = true;
    let _ = quiz_to_html(s, &options);
});
