//! Fuzz target for the control-code scanner
//!
//! Feeds arbitrary text through the scanner and the full render path,
//! checking that nothing panics and that the visible text is exactly the
//! input with its formatting stripped.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_render::span::visible_text;
use slirc_render::{scan, strip_formatting, MessageType, RenderOptions, Renderer, Theme};
use std::str;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = str::from_utf8(data) else {
        return;
    };

    let spans = scan(input, &RenderOptions::default());
    assert_eq!(visible_text(&spans), strip_formatting(input));

    let mut renderer = Renderer::new(Theme::default());
    renderer.submit_line(input, MessageType::Normal);
    renderer.submit_line(input, MessageType::OwnText);
    let markup = renderer.markup();
    assert_eq!(renderer.rebuild(), markup);
});
