#![forbid(unsafe_code)]

//! Panel configuration.
//!
//! Defaults reproduce the stock panel: a `DragonWords` view docked under the
//! editing region at an 80/20 split, a `Letters:` prompt, one cell of edge
//! margin, and five cells of padding per column. Every knob can be overridden
//! through `DRAGONWORDS_*` environment variables; values that fail to parse
//! are ignored, and spacing above [`MAX_GRID_SPACING`] falls back to the
//! default.

use serde::{Deserialize, Serialize};

/// Environment variable naming the panel view.
const ENV_PANEL_NAME: &str = "DRAGONWORDS_PANEL_NAME";
/// Environment variable for the lookup prompt caption.
const ENV_PROMPT: &str = "DRAGONWORDS_PROMPT";
/// Environment variable for the editing-region fraction (`0 < split < 1`).
const ENV_PANEL_SPLIT: &str = "DRAGONWORDS_PANEL_SPLIT";
/// Environment variable for the edge margin in cells.
const ENV_EDGE_MARGIN: &str = "DRAGONWORDS_EDGE_MARGIN";
/// Environment variable for per-column padding in cells.
const ENV_CELL_PADDING: &str = "DRAGONWORDS_CELL_PADDING";

/// Default panel view name.
pub const DEFAULT_PANEL_NAME: &str = "DragonWords";
/// Default prompt caption.
pub const DEFAULT_PROMPT_CAPTION: &str = "Letters:";
/// Default fraction of the window height kept for editing.
pub const DEFAULT_PANEL_SPLIT: f32 = 0.8;
/// Default cells kept free at the right and bottom edges.
pub const DEFAULT_EDGE_MARGIN: usize = 1;
/// Default padding added to each column on top of code and word.
pub const DEFAULT_CELL_PADDING: usize = 5;
/// Largest accepted edge margin or cell padding, in cells.
pub const MAX_GRID_SPACING: usize = 64;

/// Panel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Name given to the panel view; also how the panel is found again.
    pub panel_name: String,
    /// Caption of the code prompt.
    pub prompt_caption: String,
    /// Fraction of the window height above the panel.
    pub panel_split: f32,
    /// Cells subtracted from the panel width and height before layout.
    pub edge_margin: usize,
    /// Extra cells per column beyond the code and the longest word.
    pub cell_padding: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_name: DEFAULT_PANEL_NAME.to_string(),
            prompt_caption: DEFAULT_PROMPT_CAPTION.to_string(),
            panel_split: DEFAULT_PANEL_SPLIT,
            edge_margin: DEFAULT_EDGE_MARGIN,
            cell_padding: DEFAULT_CELL_PADDING,
        }
    }
}

impl PanelConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read configuration using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            panel_name: get_env(ENV_PANEL_NAME)
                .and_then(|v| non_empty(&v))
                .unwrap_or(defaults.panel_name),
            prompt_caption: get_env(ENV_PROMPT)
                .and_then(|v| non_empty(&v))
                .unwrap_or(defaults.prompt_caption),
            panel_split: get_env(ENV_PANEL_SPLIT)
                .and_then(|v| parse_split(&v))
                .unwrap_or(defaults.panel_split),
            edge_margin: get_env(ENV_EDGE_MARGIN)
                .and_then(|v| parse_spacing(&v))
                .unwrap_or(defaults.edge_margin),
            cell_padding: get_env(ENV_CELL_PADDING)
                .and_then(|v| parse_spacing(&v))
                .unwrap_or(defaults.cell_padding),
        }
    }

    /// Serialize the configuration to JSON (for diagnostics).
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_split(value: &str) -> Option<f32> {
    let split: f32 = value.trim().parse().ok()?;
    (split > 0.0 && split < 1.0).then_some(split)
}

fn parse_spacing(value: &str) -> Option<usize> {
    let cells: usize = value.trim().parse().ok()?;
    (cells <= MAX_GRID_SPACING).then_some(cells)
}
