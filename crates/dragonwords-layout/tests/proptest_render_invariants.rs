//! Property tests for panel geometry and rendering.
//!
//! Random candidate lists and panel sizes must always produce a grid where
//! every cell has the column width, rows respect the column count, and the
//! entries read back in code order.

use dragonwords_core::{CODE_SPACE, WordMapping};
use dragonwords_layout::{
    CharGrid, FontMetrics, GridPolicy, PanelGeometry, ViewportPx, render_mapping, render_panel,
    text_width,
};
use proptest::prelude::*;

fn candidates() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}", 0..=CODE_SPACE)
}

proptest! {
    #[test]
    fn row_count_matches_lines(words in candidates(), width in 0usize..200) {
        let mapping = WordMapping::from_candidates(words);
        let geometry = PanelGeometry::compute(CharGrid::new(width, 20), &mapping, GridPolicy::default());
        let text = render_mapping(&mapping, &geometry);

        prop_assert!(text.ends_with('\n'));
        if mapping.is_empty() {
            prop_assert_eq!(text.as_str(), "\n");
        } else {
            prop_assert_eq!(text.lines().count(), geometry.row_count);
        }
    }

    #[test]
    fn column_count_is_at_least_one(words in candidates(), width in 0usize..200) {
        let mapping = WordMapping::from_candidates(words);
        let geometry = PanelGeometry::compute(CharGrid::new(width, 20), &mapping, GridPolicy::default());
        prop_assert!(geometry.column_count >= 1);
        if geometry.column_count > 1 {
            prop_assert!(geometry.column_count * geometry.column_width <= width);
        }
    }

    #[test]
    fn lines_are_whole_cells(words in candidates(), width in 0usize..200) {
        let mapping = WordMapping::from_candidates(words);
        if mapping.is_empty() {
            return Ok(());
        }
        let geometry = PanelGeometry::compute(CharGrid::new(width, 20), &mapping, GridPolicy::default());
        let text = render_mapping(&mapping, &geometry);
        let lines: Vec<&str> = text.lines().collect();

        for (i, line) in lines.iter().enumerate() {
            let line_width = text_width(line);
            prop_assert_eq!(line_width % geometry.column_width, 0);
            let cells = line_width / geometry.column_width;
            if i + 1 < lines.len() {
                prop_assert_eq!(cells, geometry.column_count);
            } else {
                prop_assert!(cells >= 1 && cells <= geometry.column_count);
            }
        }
    }

    #[test]
    fn entries_read_back_in_order(words in candidates(), width in 0usize..200) {
        let mapping = WordMapping::from_candidates(words);
        let geometry = PanelGeometry::compute(CharGrid::new(width, 20), &mapping, GridPolicy::default());
        let text = render_mapping(&mapping, &geometry);

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let expected: Vec<String> = mapping
            .iter()
            .flat_map(|(code, word)| [code.to_string(), word.to_string()])
            .collect();
        prop_assert_eq!(tokens, expected);
    }

    #[test]
    fn render_is_idempotent(
        words in candidates(),
        px_width in 0.0f64..2000.0,
        px_height in 0.0f64..1000.0,
    ) {
        let mapping = WordMapping::from_candidates(words);
        let viewport = ViewportPx::new(px_width, px_height);
        let font = FontMetrics::new(8.0, 16.0);
        let first = render_panel(viewport, font, &mapping, GridPolicy::default());
        let second = render_panel(viewport, font, &mapping, GridPolicy::default());
        prop_assert_eq!(first, second);
    }
}
