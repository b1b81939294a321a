#![forbid(unsafe_code)]

//! Window region layouts.
//!
//! A [`WindowLayout`] describes how a window is divided into view groups, in
//! the host's layout vocabulary: `cols` and `rows` are ascending split
//! positions in `[0, 1]`, and each cell `[x0, y0, x1, y1]` spans the grid
//! lines between those positions. Group `i` is `cells[i]`.
//!
//! The word panel uses two shapes: a single full-window group, and the same
//! group with a horizontal strip below it for the panel.
//!
//! ```
//! use dragonwords_layout::WindowLayout;
//!
//! let split = WindowLayout::with_bottom_panel(0.8);
//! assert_eq!(split.group_count(), 2);
//! assert_eq!(
//!     split.to_json(),
//!     r#"{"cols":[0.0,1.0],"rows":[0.0,0.8,1.0],"cells":[[0,0,1,1],[0,1,1,2]]}"#
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Group holding the editing views.
pub const EDITOR_GROUP: usize = 0;
/// Group holding the word panel when it is docked.
pub const PANEL_GROUP: usize = 1;

/// A window split into view groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowLayout {
    /// Vertical grid lines, ascending fractions of the window width.
    pub cols: Vec<f32>,
    /// Horizontal grid lines, ascending fractions of the window height.
    pub rows: Vec<f32>,
    /// One `[x0, y0, x1, y1]` grid-line span per group.
    pub cells: Vec<[u16; 4]>,
}

impl WindowLayout {
    /// One group covering the whole window.
    #[must_use]
    pub fn single() -> Self {
        Self {
            cols: vec![0.0, 1.0],
            rows: vec![0.0, 1.0],
            cells: vec![[0, 0, 1, 1]],
        }
    }

    /// Editing group on top, panel group below starting at `split`.
    #[must_use]
    pub fn with_bottom_panel(split: f32) -> Self {
        Self {
            cols: vec![0.0, 1.0],
            rows: vec![0.0, split, 1.0],
            cells: vec![[0, 0, 1, 1], [0, 1, 1, 2]],
        }
    }

    /// Number of view groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether this layout has room for the panel group.
    #[must_use]
    pub fn has_panel_group(&self) -> bool {
        self.group_count() > PANEL_GROUP
    }

    /// Serialize in the host's JSON layout shape.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self::single()
    }
}
