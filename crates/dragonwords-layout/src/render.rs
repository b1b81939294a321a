#![forbid(unsafe_code)]

//! Panel text rendering.
//!
//! Each entry becomes one cell, `code + " " + word`, right-padded with spaces
//! to the column width. Cells are concatenated `column_count` at a time and
//! every row ends with `\n`; the last row may be short.
//!
//! An empty mapping renders as a single `"\n"`.

use dragonwords_core::WordMapping;

use crate::geometry::{GridPolicy, PanelGeometry};
use crate::metrics::{FontMetrics, ViewportPx};

/// Width of `text` in panel columns: one column per `char`.
#[inline]
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Widest word in the mapping, or 0 when it is empty.
#[must_use]
pub fn longest_word_width(mapping: &WordMapping) -> usize {
    mapping.words().map(text_width).max().unwrap_or(0)
}

/// Render `mapping` with a precomputed geometry.
///
/// Pure: the same mapping and geometry always yield the same text.
#[must_use]
pub fn render_mapping(mapping: &WordMapping, geometry: &PanelGeometry) -> String {
    if mapping.is_empty() {
        return "\n".to_string();
    }

    let columns = geometry.column_count.max(1);
    let mut text = String::new();
    let entries: Vec<_> = mapping.iter().collect();

    for row in entries.chunks(columns) {
        for (code, word) in row {
            let used = code.as_str().len() + 1 + text_width(word);
            text.push_str(code.as_str());
            text.push(' ');
            text.push_str(word);
            text.extend(std::iter::repeat_n(' ', geometry.column_width.saturating_sub(used)));
        }
        text.push('\n');
    }

    text
}

/// Geometry and text produced by one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPanel {
    pub geometry: PanelGeometry,
    pub text: String,
}

/// Measure the panel and render `mapping` into it.
#[must_use]
pub fn render_panel(
    viewport: ViewportPx,
    font: FontMetrics,
    mapping: &WordMapping,
    policy: GridPolicy,
) -> RenderedPanel {
    let geometry = PanelGeometry::from_pixels(viewport, font, mapping, policy);
    tracing::trace!(
        width = geometry.panel_width_chars,
        height = geometry.panel_height_chars,
        column_width = geometry.column_width,
        columns = geometry.column_count,
        rows = geometry.row_count,
        "panel geometry"
    );
    if geometry.overflows_height() {
        tracing::debug!(
            rows = geometry.row_count,
            visible = geometry.panel_height_chars,
            "word panel taller than its viewport"
        );
    }

    let text = render_mapping(mapping, &geometry);
    RenderedPanel { geometry, text }
}
