#![forbid(unsafe_code)]

//! In-memory [`EditorHost`].
//!
//! Models just enough of a real editor to exercise the word panel end to end:
//!
//! - Windows own a [`WindowLayout`] and a focused group.
//! - Each group remembers its front-most view; focusing a view brings it to
//!   the front and focuses its group.
//! - New views open in the focused group.
//! - Shrinking the layout moves views of removed groups into the last
//!   remaining group.
//! - Read-only views reject text replacement.
//!
//! Everything the panel does is recorded (prompts, snippets, terminal sends)
//! so tests can assert on it.

use std::collections::BTreeMap;
use std::fmt;

use dragonwords_layout::{FontMetrics, ViewportPx, WindowLayout};

use crate::{EditorHost, ViewId, WindowId};

/// Viewport given to newly opened views.
pub const DEFAULT_VIEWPORT: ViewportPx = ViewportPx::new(500.0, 200.0);
/// Font metrics given to newly opened views.
pub const DEFAULT_FONT: FontMetrics = FontMetrics::new(10.0, 20.0);

/// Errors reported by [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryHostError {
    UnknownView(ViewId),
    UnknownWindow(WindowId),
    NotInWindow { view: ViewId, window: WindowId },
    NoSuchGroup { window: WindowId, group: usize, groups: usize },
    ReadOnly(ViewId),
    /// Write refused because [`MemoryHost::reject_writes`] is set.
    Rejected(ViewId),
}

impl fmt::Display for MemoryHostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownView(view) => write!(f, "unknown view {view}"),
            Self::UnknownWindow(window) => write!(f, "unknown window {window}"),
            Self::NotInWindow { view, window } => write!(f, "{view} is not in {window}"),
            Self::NoSuchGroup {
                window,
                group,
                groups,
            } => write!(f, "{window} has {groups} groups, no group {group}"),
            Self::ReadOnly(view) => write!(f, "{view} is read-only"),
            Self::Rejected(view) => write!(f, "write to {view} rejected"),
        }
    }
}

impl std::error::Error for MemoryHostError {}

#[derive(Debug, Clone)]
struct MemoryView {
    window: Option<WindowId>,
    group: usize,
    name: String,
    text: String,
    read_only: bool,
    scratch: bool,
    terminal: bool,
    candidates: Option<Vec<String>>,
    viewport: ViewportPx,
    font: FontMetrics,
    snippets: Vec<String>,
}

impl MemoryView {
    fn new(window: WindowId, group: usize) -> Self {
        Self {
            window: Some(window),
            group,
            name: String::new(),
            text: String::new(),
            read_only: false,
            scratch: false,
            terminal: false,
            candidates: None,
            viewport: DEFAULT_VIEWPORT,
            font: DEFAULT_FONT,
            snippets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct MemoryWindow {
    layout: WindowLayout,
    active_group: usize,
    /// Front-most view per group.
    front: Vec<Option<ViewId>>,
    prompts: Vec<String>,
    terminal_output: Vec<String>,
}

/// In-memory editor host.
#[derive(Debug, Default)]
pub struct MemoryHost {
    last_id: u64,
    windows: BTreeMap<WindowId, MemoryWindow>,
    views: BTreeMap<ViewId, MemoryView>,
    reject_writes: bool,
    layout_changes: usize,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn window_ref(&self, window: WindowId) -> Result<&MemoryWindow, MemoryHostError> {
        self.windows
            .get(&window)
            .ok_or(MemoryHostError::UnknownWindow(window))
    }

    fn window_mut(&mut self, window: WindowId) -> Result<&mut MemoryWindow, MemoryHostError> {
        self.windows
            .get_mut(&window)
            .ok_or(MemoryHostError::UnknownWindow(window))
    }

    fn view_ref(&self, view: ViewId) -> Result<&MemoryView, MemoryHostError> {
        self.views.get(&view).ok_or(MemoryHostError::UnknownView(view))
    }

    fn view_mut(&mut self, view: ViewId) -> Result<&mut MemoryView, MemoryHostError> {
        self.views
            .get_mut(&view)
            .ok_or(MemoryHostError::UnknownView(view))
    }

    fn group_views(&self, window: WindowId, group: usize) -> impl Iterator<Item = ViewId> + '_ {
        self.views
            .iter()
            .filter(move |(_, v)| v.window == Some(window) && v.group == group)
            .map(|(id, _)| *id)
    }

    // --- Setup ---------------------------------------------------------------

    /// Open a window with a single group.
    pub fn open_window(&mut self) -> WindowId {
        let id = WindowId::new(self.next_id());
        self.windows.insert(
            id,
            MemoryWindow {
                layout: WindowLayout::single(),
                active_group: 0,
                front: vec![None],
                prompts: Vec::new(),
                terminal_output: Vec::new(),
            },
        );
        id
    }

    /// Open a document view in the focused group of `window`.
    pub fn open_view(&mut self, window: WindowId) -> Result<ViewId, MemoryHostError> {
        self.new_view(window)
    }

    /// Set the completion candidates `view` reports.
    pub fn set_candidates<I, S>(&mut self, view: ViewId, candidates: Option<I>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(v) = self.views.get_mut(&view) {
            v.candidates = candidates.map(|c| c.into_iter().map(Into::into).collect());
        }
    }

    pub fn set_viewport(&mut self, view: ViewId, viewport: ViewportPx) {
        if let Some(v) = self.views.get_mut(&view) {
            v.viewport = viewport;
        }
    }

    pub fn set_font(&mut self, view: ViewId, font: FontMetrics) {
        if let Some(v) = self.views.get_mut(&view) {
            v.font = font;
        }
    }

    pub fn set_terminal(&mut self, view: ViewId, terminal: bool) {
        if let Some(v) = self.views.get_mut(&view) {
            v.terminal = terminal;
        }
    }

    /// Detach `view` from its window (it keeps existing, windowless).
    pub fn detach(&mut self, view: ViewId) {
        let Some(v) = self.views.get_mut(&view) else {
            return;
        };
        let (Some(window), group) = (v.window.take(), v.group) else {
            return;
        };
        self.refresh_front(window, group);
    }

    /// Make every subsequent [`EditorHost::replace_text`] fail.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    // --- Inspection ----------------------------------------------------------

    #[must_use]
    pub fn contains_view(&self, view: ViewId) -> bool {
        self.views.contains_key(&view)
    }

    #[must_use]
    pub fn text(&self, view: ViewId) -> Option<&str> {
        self.views.get(&view).map(|v| v.text.as_str())
    }

    #[must_use]
    pub fn is_read_only(&self, view: ViewId) -> Option<bool> {
        self.views.get(&view).map(|v| v.read_only)
    }

    #[must_use]
    pub fn is_scratch(&self, view: ViewId) -> Option<bool> {
        self.views.get(&view).map(|v| v.scratch)
    }

    #[must_use]
    pub fn group_of(&self, view: ViewId) -> Option<usize> {
        self.views.get(&view).map(|v| v.group)
    }

    /// Snippets inserted into `view`, oldest first.
    #[must_use]
    pub fn snippets(&self, view: ViewId) -> &[String] {
        self.views
            .get(&view)
            .map(|v| v.snippets.as_slice())
            .unwrap_or_default()
    }

    /// Text sent to the terminal of `window`, oldest first.
    #[must_use]
    pub fn terminal_output(&self, window: WindowId) -> &[String] {
        self.windows
            .get(&window)
            .map(|w| w.terminal_output.as_slice())
            .unwrap_or_default()
    }

    /// Captions of every prompt opened in `window`.
    #[must_use]
    pub fn prompts(&self, window: WindowId) -> &[String] {
        self.windows
            .get(&window)
            .map(|w| w.prompts.as_slice())
            .unwrap_or_default()
    }

    /// Number of successful [`EditorHost::set_layout`] calls.
    #[must_use]
    pub fn layout_changes(&self) -> usize {
        self.layout_changes
    }

    fn refresh_front(&mut self, window: WindowId, group: usize) {
        let current = self
            .windows
            .get(&window)
            .and_then(|w| w.front.get(group).copied().flatten());
        let still_there = current.is_some_and(|id| {
            self.views
                .get(&id)
                .is_some_and(|v| v.window == Some(window) && v.group == group)
        });
        if still_there {
            return;
        }
        let replacement = self.group_views(window, group).last();
        if let Some(slot) = self
            .windows
            .get_mut(&window)
            .and_then(|w| w.front.get_mut(group))
        {
            *slot = replacement;
        }
    }
}

impl EditorHost for MemoryHost {
    type Error = MemoryHostError;

    fn window_of(&self, view: ViewId) -> Option<WindowId> {
        self.views.get(&view).and_then(|v| v.window)
    }

    fn view_name(&self, view: ViewId) -> Result<String, Self::Error> {
        Ok(self.view_ref(view)?.name.clone())
    }

    fn set_view_name(&mut self, view: ViewId, name: &str) -> Result<(), Self::Error> {
        self.view_mut(view)?.name = name.to_string();
        Ok(())
    }

    fn set_scratch(&mut self, view: ViewId, scratch: bool) -> Result<(), Self::Error> {
        self.view_mut(view)?.scratch = scratch;
        Ok(())
    }

    fn completion_candidates(&self, view: ViewId) -> Result<Option<Vec<String>>, Self::Error> {
        Ok(self.view_ref(view)?.candidates.clone())
    }

    fn viewport_px(&self, view: ViewId) -> Result<ViewportPx, Self::Error> {
        Ok(self.view_ref(view)?.viewport)
    }

    fn font_metrics(&self, view: ViewId) -> Result<FontMetrics, Self::Error> {
        Ok(self.view_ref(view)?.font)
    }

    fn set_read_only(&mut self, view: ViewId, read_only: bool) -> Result<(), Self::Error> {
        self.view_mut(view)?.read_only = read_only;
        Ok(())
    }

    fn replace_text(&mut self, view: ViewId, text: &str) -> Result<(), Self::Error> {
        let reject = self.reject_writes;
        let v = self.view_mut(view)?;
        if reject {
            return Err(MemoryHostError::Rejected(view));
        }
        if v.read_only {
            return Err(MemoryHostError::ReadOnly(view));
        }
        v.text = text.to_string();
        Ok(())
    }

    fn is_terminal(&self, view: ViewId) -> Result<bool, Self::Error> {
        Ok(self.view_ref(view)?.terminal)
    }

    fn views(&self, window: WindowId) -> Vec<ViewId> {
        let mut views: Vec<(usize, ViewId)> = self
            .views
            .iter()
            .filter(|(_, v)| v.window == Some(window))
            .map(|(id, v)| (v.group, *id))
            .collect();
        views.sort();
        views.into_iter().map(|(_, id)| id).collect()
    }

    fn active_group(&self, window: WindowId) -> usize {
        self.windows.get(&window).map_or(0, |w| w.active_group)
    }

    fn focus_group(&mut self, window: WindowId, group: usize) -> Result<(), Self::Error> {
        let w = self.window_mut(window)?;
        let groups = w.layout.group_count();
        if group >= groups {
            return Err(MemoryHostError::NoSuchGroup {
                window,
                group,
                groups,
            });
        }
        w.active_group = group;
        Ok(())
    }

    fn focus_view(&mut self, window: WindowId, view: ViewId) -> Result<(), Self::Error> {
        let v = self.view_ref(view)?;
        if v.window != Some(window) {
            return Err(MemoryHostError::NotInWindow { view, window });
        }
        let group = v.group;
        let w = self.window_mut(window)?;
        w.active_group = group;
        if let Some(slot) = w.front.get_mut(group) {
            *slot = Some(view);
        }
        Ok(())
    }

    fn active_view(&self, window: WindowId) -> Option<ViewId> {
        let w = self.windows.get(&window)?;
        w.front.get(w.active_group).copied().flatten()
    }

    fn active_view_in_group(&self, window: WindowId, group: usize) -> Option<ViewId> {
        self.windows
            .get(&window)?
            .front
            .get(group)
            .copied()
            .flatten()
    }

    fn views_in_group(&self, window: WindowId, group: usize) -> Vec<ViewId> {
        self.group_views(window, group).collect()
    }

    fn layout(&self, window: WindowId) -> Option<WindowLayout> {
        self.windows.get(&window).map(|w| w.layout.clone())
    }

    fn set_layout(&mut self, window: WindowId, layout: &WindowLayout) -> Result<(), Self::Error> {
        self.window_ref(window)?;
        let groups = layout.group_count().max(1);

        for v in self.views.values_mut() {
            if v.window == Some(window) && v.group >= groups {
                v.group = groups - 1;
            }
        }

        let w = self.window_mut(window)?;
        w.layout = layout.clone();
        w.front.resize(groups, None);
        w.active_group = w.active_group.min(groups - 1);

        for group in 0..groups {
            self.refresh_front(window, group);
        }
        self.layout_changes += 1;
        Ok(())
    }

    fn new_view(&mut self, window: WindowId) -> Result<ViewId, Self::Error> {
        let group = self.window_ref(window)?.active_group;
        let id = ViewId::new(self.next_id());
        self.views.insert(id, MemoryView::new(window, group));
        let w = self.window_mut(window)?;
        if let Some(slot) = w.front.get_mut(group) {
            *slot = Some(id);
        }
        Ok(id)
    }

    fn close_view(&mut self, view: ViewId) -> Result<(), Self::Error> {
        let closed = self
            .views
            .remove(&view)
            .ok_or(MemoryHostError::UnknownView(view))?;
        if let Some(window) = closed.window {
            self.refresh_front(window, closed.group);
        }
        Ok(())
    }

    fn show_prompt(&mut self, window: WindowId, caption: &str) -> Result<(), Self::Error> {
        self.window_mut(window)?.prompts.push(caption.to_string());
        Ok(())
    }

    fn insert_snippet(&mut self, view: ViewId, text: &str) -> Result<(), Self::Error> {
        self.view_mut(view)?.snippets.push(text.to_string());
        Ok(())
    }

    fn send_to_terminal(&mut self, window: WindowId, text: &str) -> Result<(), Self::Error> {
        self.window_mut(window)?
            .terminal_output
            .push(text.to_string());
        Ok(())
    }
}
