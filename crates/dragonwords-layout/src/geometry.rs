#![forbid(unsafe_code)]

//! Column/row geometry for the word panel.
//!
//! Every column has the same width: the longest word, the code, and a fixed
//! amount of padding. The panel holds as many whole columns as fit; entries
//! fill rows left to right.
//!
//! ```text
//! |<------------- panel_width_chars ------------->|
//! |la foo       |lb bar       |lc bazqux    |     |
//! |<- column ->|
//! ```
//!
//! # Narrow panels
//!
//! When the panel is narrower than a single column the column count is
//! clamped to 1: each entry gets its own line and the text overflows to the
//! right instead of the layout collapsing.

use dragonwords_core::config::{MAX_GRID_SPACING, PanelConfig};
use dragonwords_core::{CODE_LEN, WordMapping};

use crate::metrics::{CharGrid, FontMetrics, ViewportPx};
use crate::render::longest_word_width;

/// Spacing rules for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPolicy {
    /// Cells subtracted from each panel axis before layout.
    pub edge_margin: usize,
    /// Cells added to every column beyond code and word.
    pub cell_padding: usize,
}

impl Default for GridPolicy {
    fn default() -> Self {
        Self {
            edge_margin: 1,
            cell_padding: 5,
        }
    }
}

impl GridPolicy {
    /// Both spacings capped at [`MAX_GRID_SPACING`].
    #[must_use]
    pub fn bounded(self) -> Self {
        Self {
            edge_margin: self.edge_margin.min(MAX_GRID_SPACING),
            cell_padding: self.cell_padding.min(MAX_GRID_SPACING),
        }
    }
}

impl From<&PanelConfig> for GridPolicy {
    fn from(config: &PanelConfig) -> Self {
        Self {
            edge_margin: config.edge_margin,
            cell_padding: config.cell_padding,
        }
        .bounded()
    }
}

/// Derived layout of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    /// Usable panel width in cells.
    pub panel_width_chars: usize,
    /// Usable panel height in lines.
    pub panel_height_chars: usize,
    /// Width of every column in cells.
    pub column_width: usize,
    /// Columns per row (at least 1).
    pub column_count: usize,
    /// Rows needed to place every entry.
    pub row_count: usize,
}

impl PanelGeometry {
    /// Lay `mapping` out on an already-measured grid.
    #[must_use]
    pub fn compute(grid: CharGrid, mapping: &WordMapping, policy: GridPolicy) -> Self {
        let policy = policy.bounded();
        let column_width = longest_word_width(mapping)
            .saturating_add(policy.cell_padding)
            .saturating_add(CODE_LEN);
        let column_count = (grid.width / column_width).max(1);
        let row_count = mapping.len().div_ceil(column_count);

        Self {
            panel_width_chars: grid.width,
            panel_height_chars: grid.height,
            column_width,
            column_count,
            row_count,
        }
    }

    /// Measure the viewport, then lay `mapping` out.
    #[must_use]
    pub fn from_pixels(
        viewport: ViewportPx,
        font: FontMetrics,
        mapping: &WordMapping,
        policy: GridPolicy,
    ) -> Self {
        let grid = CharGrid::from_pixels(viewport, font, policy.bounded().edge_margin);
        Self::compute(grid, mapping, policy)
    }

    /// Whether the rows do not all fit in the visible height.
    #[must_use]
    pub const fn overflows_height(&self) -> bool {
        self.row_count > self.panel_height_chars
    }

    /// Whether a single column is wider than the panel.
    #[must_use]
    pub const fn overflows_width(&self) -> bool {
        self.column_width > self.panel_width_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize) -> CharGrid {
        CharGrid::new(width, height)
    }

    #[test]
    fn three_words_fit_one_row() {
        let mapping = WordMapping::from_candidates(["foo", "bar", "bazqux"]);
        let geometry = PanelGeometry::from_pixels(
            ViewportPx::new(500.0, 100.0),
            FontMetrics::new(10.0, 20.0),
            &mapping,
            GridPolicy::default(),
        );
        assert_eq!(
            geometry,
            PanelGeometry {
                panel_width_chars: 49,
                panel_height_chars: 4,
                column_width: 13,
                column_count: 3,
                row_count: 1,
            }
        );
    }

    #[test]
    fn rows_round_up() {
        let mapping = WordMapping::from_candidates(["a", "b", "c", "d", "e"]);
        // column_width = 1 + 5 + 2 = 8; 20 / 8 = 2 columns; ceil(5 / 2) = 3 rows.
        let geometry = PanelGeometry::compute(grid(20, 10), &mapping, GridPolicy::default());
        assert_eq!(geometry.column_width, 8);
        assert_eq!(geometry.column_count, 2);
        assert_eq!(geometry.row_count, 3);
    }

    #[test]
    fn empty_mapping_has_no_rows() {
        let geometry = PanelGeometry::compute(grid(49, 4), &WordMapping::new(), GridPolicy::default());
        assert_eq!(geometry.column_width, 7);
        assert_eq!(geometry.column_count, 7);
        assert_eq!(geometry.row_count, 0);
    }

    #[test]
    fn narrow_panel_clamps_to_one_column() {
        let mapping = WordMapping::from_candidates(["supercalifragilistic", "x"]);
        let geometry = PanelGeometry::compute(grid(10, 4), &mapping, GridPolicy::default());
        assert_eq!(geometry.column_count, 1);
        assert_eq!(geometry.row_count, 2);
        assert!(geometry.overflows_width());
    }

    #[test]
    fn zero_width_panel_still_lays_out() {
        let mapping = WordMapping::from_candidates(["foo"]);
        let geometry = PanelGeometry::compute(grid(0, 0), &mapping, GridPolicy::default());
        assert_eq!(geometry.column_count, 1);
        assert_eq!(geometry.row_count, 1);
        assert!(geometry.overflows_height());
    }

    #[test]
    fn policy_from_config() {
        let config = PanelConfig {
            edge_margin: 0,
            cell_padding: 2,
            ..PanelConfig::default()
        };
        let policy = GridPolicy::from(&config);
        assert_eq!(policy, GridPolicy { edge_margin: 0, cell_padding: 2 });

        let mapping = WordMapping::from_candidates(["abcd"]);
        let geometry = PanelGeometry::compute(grid(16, 1), &mapping, policy);
        assert_eq!(geometry.column_width, 8);
        assert_eq!(geometry.column_count, 2);
    }

    #[test]
    fn oversized_spacing_is_capped() {
        let config = PanelConfig {
            edge_margin: usize::MAX,
            cell_padding: usize::MAX,
            ..PanelConfig::default()
        };
        let policy = GridPolicy::from(&config);
        assert_eq!(policy.edge_margin, MAX_GRID_SPACING);
        assert_eq!(policy.cell_padding, MAX_GRID_SPACING);

        let mapping = WordMapping::from_candidates(["ab"]);
        let raw = GridPolicy {
            edge_margin: 0,
            cell_padding: usize::MAX,
        };
        let geometry = PanelGeometry::compute(grid(200, 4), &mapping, raw);
        assert_eq!(geometry.column_width, 2 + MAX_GRID_SPACING + CODE_LEN);
        assert_eq!(geometry.column_count, 2);
    }

    #[test]
    fn default_policy_matches_default_config() {
        assert_eq!(GridPolicy::from(&PanelConfig::default()), GridPolicy::default());
    }
}
