#![forbid(unsafe_code)]

//! Pixel measurements and their character-grid projection.
//!
//! Hosts report viewport extents and font cells in (possibly fractional)
//! pixels. Everything downstream works in whole cells, so the conversion
//! floors once here and never again.

/// Visible extent of a view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportPx {
    pub width: f64,
    pub height: f64,
}

impl ViewportPx {
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Size of one character cell of the view's font, in pixels.
///
/// `cell_width` is the em width; `cell_height` is the line height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl FontMetrics {
    #[inline]
    #[must_use]
    pub const fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }
}

/// Usable panel area in whole character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharGrid {
    /// Columns of text.
    pub width: usize,
    /// Lines of text.
    pub height: usize,
}

impl CharGrid {
    #[inline]
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Project a pixel viewport onto the character grid.
    ///
    /// Each axis is `floor(extent / cell) - edge_margin`, saturating at zero.
    /// Non-finite or non-positive measurements yield a zero-sized axis.
    #[must_use]
    pub fn from_pixels(viewport: ViewportPx, font: FontMetrics, edge_margin: usize) -> Self {
        Self {
            width: whole_cells(viewport.width, font.cell_width).saturating_sub(edge_margin),
            height: whole_cells(viewport.height, font.cell_height).saturating_sub(edge_margin),
        }
    }
}

fn whole_cells(extent: f64, cell: f64) -> usize {
    if !extent.is_finite() || !cell.is_finite() || extent <= 0.0 || cell <= 0.0 {
        return 0;
    }
    // Float-to-int `as` saturates, so huge ratios clamp to usize::MAX.
    (extent / cell).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_then_subtracts_margin() {
        let grid = CharGrid::from_pixels(
            ViewportPx::new(500.0, 219.0),
            FontMetrics::new(10.0, 20.0),
            1,
        );
        assert_eq!(grid, CharGrid::new(49, 9));
    }

    #[test]
    fn fractional_metrics_floor() {
        let grid = CharGrid::from_pixels(
            ViewportPx::new(803.5, 400.0),
            FontMetrics::new(7.8, 17.0),
            1,
        );
        // 803.5 / 7.8 = 103.01.., 400 / 17 = 23.52..
        assert_eq!(grid, CharGrid::new(102, 22));
    }

    #[test]
    fn zero_margin_keeps_full_grid() {
        let grid = CharGrid::from_pixels(ViewportPx::new(100.0, 40.0), FontMetrics::new(10.0, 20.0), 0);
        assert_eq!(grid, CharGrid::new(10, 2));
    }

    #[test]
    fn tiny_viewport_saturates_at_zero() {
        let grid = CharGrid::from_pixels(ViewportPx::new(5.0, 5.0), FontMetrics::new(10.0, 20.0), 1);
        assert_eq!(grid, CharGrid::new(0, 0));
    }

    #[test]
    fn degenerate_font_metrics_give_empty_grid() {
        let viewport = ViewportPx::new(500.0, 200.0);
        for font in [
            FontMetrics::new(0.0, 20.0),
            FontMetrics::new(-1.0, 20.0),
            FontMetrics::new(f64::NAN, 20.0),
            FontMetrics::new(f64::INFINITY, 20.0),
        ] {
            assert_eq!(CharGrid::from_pixels(viewport, font, 1).width, 0, "{font:?}");
        }
    }
}
