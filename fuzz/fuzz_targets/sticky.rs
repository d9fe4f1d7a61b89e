#![no_main]

use libfuzzer_sys::fuzz_target;

use taoquiz::sticky::{strip, wrap};

fuzz_target!(|s: &str| {
    let wrapped = wrap(s);
    if !s.contains("<span class=\"sticky\">") {
        assert_eq!(strip(&wrapped, "sticky"), s);
    }
});
