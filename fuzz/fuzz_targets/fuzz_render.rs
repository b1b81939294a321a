#![no_main]

use arbitrary::Arbitrary;
use dragonwords_core::config::MAX_GRID_SPACING;
use dragonwords_core::{CODE_LEN, CODE_SPACE, WordMapping};
use dragonwords_layout::{FontMetrics, GridPolicy, ViewportPx, render_panel, text_width};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RenderInput {
    words: Vec<String>,
    width_px: f64,
    height_px: f64,
    cell_width: f64,
    cell_height: f64,
    edge_margin: u16,
    cell_padding: u16,
}

fuzz_target!(|input: RenderInput| {
    if input.words.len() > 512 || input.words.iter().any(|w| w.len() > 256) {
        return;
    }

    let mapping = WordMapping::from_candidates(input.words.iter().map(String::as_str));
    let policy = GridPolicy {
        edge_margin: usize::from(input.edge_margin),
        cell_padding: usize::from(input.cell_padding),
    };
    let viewport = ViewportPx::new(input.width_px, input.height_px);
    let font = FontMetrics::new(input.cell_width, input.cell_height);

    // Arbitrary metrics (NaN, negative, huge) must never panic.
    let panel = render_panel(viewport, font, &mapping, policy);
    let geometry = panel.geometry;

    assert!(geometry.column_count >= 1);
    assert!(panel.text.ends_with('\n'));
    assert!(mapping.len() <= CODE_SPACE);

    if !mapping.is_empty() && !mapping.words().any(|w| w.contains('\n')) {
        assert_eq!(panel.text.matches('\n').count(), geometry.row_count);
    }

    // Rendering is pure.
    let again = render_panel(viewport, font, &mapping, policy);
    assert_eq!(again, panel);

    // Every column fits its code and the longest word, with padding capped.
    let longest = mapping.words().map(text_width).max().unwrap_or(0);
    assert!(geometry.column_width <= longest + MAX_GRID_SPACING + CODE_LEN);
    for word in mapping.words() {
        assert!(text_width(word) + CODE_LEN <= geometry.column_width);
    }
});
