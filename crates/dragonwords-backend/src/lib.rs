#![forbid(unsafe_code)]
#![doc = "Editor host boundary for DragonWords."]
#![doc = ""]
#![doc = "The word panel never talks to an editor directly. Everything it needs from"]
#![doc = "the host (view text and metrics, window groups and focus, the code prompt,"]
#![doc = "and text injection) goes through [`EditorHost`]. Hosts are driven from a"]
#![doc = "single dispatch thread, so every method takes `&self` or `&mut self` and"]
#![doc = "returns immediately."]

use core::fmt;

use dragonwords_core::PanelId;
use dragonwords_layout::{FontMetrics, ViewportPx, WindowLayout};

pub mod injection;
#[cfg(feature = "memory-host")]
pub mod memory;

pub use injection::InjectionTarget;
#[cfg(feature = "memory-host")]
pub use memory::{MemoryHost, MemoryHostError};

/// Host identifier of a view (a document or the word panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Registry key for this view when it is a word panel.
    #[must_use]
    pub const fn panel_id(self) -> PanelId {
        PanelId::new(self.0)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Host identifier of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Everything the word panel needs from an editor.
///
/// Groups are indexed in layout order (`cells[i]` of the current
/// [`WindowLayout`]). Query methods that can only fail because an id is
/// stale return `Option`/empty collections; mutations return
/// `Result<_, Self::Error>`.
pub trait EditorHost {
    /// Host-specific error type.
    type Error: fmt::Debug + fmt::Display;

    // --- Views -------------------------------------------------------------

    /// Window containing `view`, or `None` if the view is detached.
    fn window_of(&self, view: ViewId) -> Option<WindowId>;

    /// Display name of `view`.
    fn view_name(&self, view: ViewId) -> Result<String, Self::Error>;

    /// Rename `view`.
    fn set_view_name(&mut self, view: ViewId, name: &str) -> Result<(), Self::Error>;

    /// Mark `view` as scratch (never prompts to save).
    fn set_scratch(&mut self, view: ViewId, scratch: bool) -> Result<(), Self::Error>;

    /// Completion candidates the editor currently offers for `view`.
    ///
    /// `Ok(None)` means the host has no completion list at all.
    fn completion_candidates(&self, view: ViewId) -> Result<Option<Vec<String>>, Self::Error>;

    /// Visible extent of `view` in pixels.
    fn viewport_px(&self, view: ViewId) -> Result<ViewportPx, Self::Error>;

    /// Font cell size of `view` in pixels.
    fn font_metrics(&self, view: ViewId) -> Result<FontMetrics, Self::Error>;

    /// Allow or forbid edits to `view`.
    fn set_read_only(&mut self, view: ViewId, read_only: bool) -> Result<(), Self::Error>;

    /// Replace the entire text of `view`.
    fn replace_text(&mut self, view: ViewId, text: &str) -> Result<(), Self::Error>;

    /// Whether `view` is backed by a terminal rather than a document buffer.
    fn is_terminal(&self, view: ViewId) -> Result<bool, Self::Error>;

    // --- Windows -----------------------------------------------------------

    /// All views of `window`, in group order.
    fn views(&self, window: WindowId) -> Vec<ViewId>;

    /// Index of the focused group.
    fn active_group(&self, window: WindowId) -> usize;

    /// Focus `group`.
    fn focus_group(&mut self, window: WindowId, group: usize) -> Result<(), Self::Error>;

    /// Focus `view` (and therefore its group).
    fn focus_view(&mut self, window: WindowId, view: ViewId) -> Result<(), Self::Error>;

    /// Focused view of the focused group.
    fn active_view(&self, window: WindowId) -> Option<ViewId>;

    /// Front-most view of `group`.
    fn active_view_in_group(&self, window: WindowId, group: usize) -> Option<ViewId>;

    /// Views of `group`.
    fn views_in_group(&self, window: WindowId, group: usize) -> Vec<ViewId>;

    /// Current group layout of `window`.
    fn layout(&self, window: WindowId) -> Option<WindowLayout>;

    /// Replace the group layout of `window`.
    fn set_layout(&mut self, window: WindowId, layout: &WindowLayout) -> Result<(), Self::Error>;

    /// Open a new empty view in the focused group and focus it.
    fn new_view(&mut self, window: WindowId) -> Result<ViewId, Self::Error>;

    /// Close `view`.
    fn close_view(&mut self, view: ViewId) -> Result<(), Self::Error>;

    /// Open the single-line input prompt.
    ///
    /// The host reports the outcome later through the controller's
    /// prompt-submitted / prompt-cancelled entry points.
    fn show_prompt(&mut self, window: WindowId, caption: &str) -> Result<(), Self::Error>;

    // --- Injection ---------------------------------------------------------

    /// Insert `text` as a snippet at every selection of `view`.
    fn insert_snippet(&mut self, view: ViewId, text: &str) -> Result<(), Self::Error>;

    /// Send `text` to the terminal attached to `window`.
    fn send_to_terminal(&mut self, window: WindowId, text: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_id_maps_to_panel_id() {
        let view = ViewId::new(12);
        assert_eq!(view.panel_id(), PanelId::new(12));
        assert_eq!(view.get(), 12);
    }

    #[test]
    fn ids_display() {
        assert_eq!(ViewId::new(3).to_string(), "view#3");
        assert_eq!(WindowId::new(1).to_string(), "window#1");
    }
}
