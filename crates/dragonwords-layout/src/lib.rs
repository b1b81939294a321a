#![forbid(unsafe_code)]

//! Panel geometry and text layout.
//!
//! This crate converts a panel's pixel viewport into a character grid and
//! lays a [`WordMapping`](dragonwords_core::WordMapping) out as fixed-width
//! columns:
//!
//! - [`CharGrid`] - pixel viewport + font cell size, floored to whole cells
//! - [`PanelGeometry`] - column width, column count, and row count
//! - [`render_mapping`] / [`render_panel`] - the panel text itself
//! - [`WindowLayout`] - the window region descriptions used to dock the panel
//!
//! # Example
//!
//! ```
//! use dragonwords_core::WordMapping;
//! use dragonwords_layout::{FontMetrics, GridPolicy, ViewportPx, render_panel};
//!
//! let mapping = WordMapping::from_candidates(["foo", "bar", "bazqux"]);
//! let panel = render_panel(
//!     ViewportPx::new(500.0, 100.0),
//!     FontMetrics::new(10.0, 20.0),
//!     &mapping,
//!     GridPolicy::default(),
//! );
//! assert_eq!(panel.geometry.column_count, 3);
//! assert_eq!(panel.text, "la foo       lb bar       lc bazqux    \n");
//! ```

pub mod geometry;
pub mod metrics;
pub mod render;
pub mod window_layout;

pub use geometry::{GridPolicy, PanelGeometry};
pub use metrics::{CharGrid, FontMetrics, ViewportPx};
pub use render::{RenderedPanel, longest_word_width, render_mapping, render_panel, text_width};
pub use window_layout::{EDITOR_GROUP, PANEL_GROUP, WindowLayout};
