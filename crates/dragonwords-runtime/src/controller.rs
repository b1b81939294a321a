#![forbid(unsafe_code)]

//! Panel lifecycle, updates, and lookups.
//!
//! The controller keeps no view state of its own besides the word registry
//! and a pending prompt. Whether a panel exists, and whether it is showing,
//! is read back from the host on every call, so the controller never drifts
//! out of sync when the user closes or rearranges views by hand.
//!
//! # State machine
//!
//! ```text
//!            toggle                     toggle
//! Closed ───────────▶ Visible ◀──────────────────── Hidden
//!   ▲                  │                              ▲
//!   │     toggle       │   another view in front      │
//!   └──────────────────┘──────────────────────────────┘
//! ```

use std::fmt;

use dragonwords_backend::{EditorHost, InjectionTarget, ViewId, WindowId};
use dragonwords_core::{PanelConfig, PanelRegistry, build_mapping};
use dragonwords_layout::{
    EDITOR_GROUP, GridPolicy, PANEL_GROUP, RenderedPanel, WindowLayout, render_panel,
};

/// Where the panel stands in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    /// No panel view in the window.
    Closed,
    /// The panel exists but another view is in front of its group.
    Hidden(ViewId),
    /// The panel is the front view of the panel group.
    Visible(ViewId),
}

impl PanelVisibility {
    /// The panel view, if one exists.
    #[must_use]
    pub const fn panel(self) -> Option<ViewId> {
        match self {
            Self::Closed => None,
            Self::Hidden(view) | Self::Visible(view) => Some(view),
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible(_))
    }
}

/// Why an operation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The view is not attached to a window.
    Detached,
    /// The window has no panel.
    NoPanel,
    /// The event came from the panel itself.
    PanelIsSource,
    /// The typed code has no word in the panel's mapping.
    UnknownCode,
    /// A prompt result arrived with no lookup waiting for it.
    NoPendingLookup,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Detached => "view is not in a window",
            Self::NoPanel => "window has no word panel",
            Self::PanelIsSource => "view is the word panel",
            Self::UnknownCode => "no word for that code",
            Self::NoPendingLookup => "no lookup in progress",
        })
    }
}

/// Result of [`PanelController::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A new panel view was created.
    Created(ViewId),
    /// An existing, hidden panel was brought to the front.
    Shown(ViewId),
    /// The panel was closed; `collapsed` when the panel region was removed.
    Hidden { collapsed: bool },
    Failed(String),
}

/// Result of [`PanelController::update_on_source_change`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Rendered { panel: ViewId, entries: usize },
    Skipped(SkipReason),
    Failed(String),
}

/// Result of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Injected {
        word: String,
        target: InjectionTarget,
    },
    Skipped(SkipReason),
    Failed(String),
}

/// Result of [`PanelController::request_lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The host prompt is open; the answer arrives as a submitted prompt.
    Opened,
    Skipped(SkipReason),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingLookup {
    source: ViewId,
}

fn host_failed<E: fmt::Display>(operation: &'static str, err: &E) -> String {
    tracing::warn!(operation, error = %err, "editor host call failed");
    err.to_string()
}

/// Drives the word panel for every window of one host.
#[derive(Debug)]
pub struct PanelController {
    config: PanelConfig,
    policy: GridPolicy,
    registry: PanelRegistry,
    pending: Option<PendingLookup>,
}

impl PanelController {
    /// Create a controller with an empty registry.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self {
            policy: GridPolicy::from(&config),
            config,
            registry: PanelRegistry::new(),
            pending: None,
        }
    }

    /// Create a controller configured from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(PanelConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    /// Whether a lookup prompt is waiting for an answer.
    #[must_use]
    pub fn has_pending_lookup(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `view` is a word panel.
    pub fn is_panel<H: EditorHost>(&self, host: &H, view: ViewId) -> bool {
        host.view_name(view)
            .is_ok_and(|name| name == self.config.panel_name)
    }

    /// The panel view of `window`, if any.
    pub fn find_panel<H: EditorHost>(&self, host: &H, window: WindowId) -> Option<ViewId> {
        host.views(window)
            .into_iter()
            .find(|&view| self.is_panel(host, view))
    }

    pub fn visibility<H: EditorHost>(&self, host: &H, window: WindowId) -> PanelVisibility {
        match self.find_panel(host, window) {
            None => PanelVisibility::Closed,
            Some(panel) if host.active_view_in_group(window, PANEL_GROUP) == Some(panel) => {
                PanelVisibility::Visible(panel)
            }
            Some(panel) => PanelVisibility::Hidden(panel),
        }
    }

    // --- Lifecycle -----------------------------------------------------------

    /// Show the panel if it is closed or hidden, hide it if it is visible.
    pub fn toggle<H: EditorHost>(&mut self, host: &mut H, window: WindowId) -> ToggleOutcome {
        let result = match self.visibility(host, window) {
            PanelVisibility::Visible(panel) => Self::hide(host, window, panel),
            PanelVisibility::Hidden(panel) => Self::bring_to_front(host, window, panel),
            PanelVisibility::Closed => self.create(host, window).map(ToggleOutcome::Created),
        };
        result.unwrap_or_else(|err| ToggleOutcome::Failed(host_failed("toggle", &err)))
    }

    fn create<H: EditorHost>(&mut self, host: &mut H, window: WindowId) -> Result<ViewId, H::Error> {
        let previous_group = host.active_group(window);
        host.set_layout(
            window,
            &WindowLayout::with_bottom_panel(self.config.panel_split),
        )?;
        host.focus_group(window, PANEL_GROUP)?;
        let panel = host.new_view(window)?;
        host.set_scratch(panel, true)?;
        host.set_view_name(panel, &self.config.panel_name)?;
        host.set_read_only(panel, true)?;
        host.focus_group(window, previous_group)?;
        tracing::info!(%window, %panel, "word panel created");

        if let Some(source) = host.active_view(window).filter(|&view| view != panel) {
            self.update_on_source_change(host, source);
        }
        Ok(panel)
    }

    fn bring_to_front<H: EditorHost>(
        host: &mut H,
        window: WindowId,
        panel: ViewId,
    ) -> Result<ToggleOutcome, H::Error> {
        host.focus_view(window, panel)?;
        host.focus_group(window, EDITOR_GROUP)?;
        tracing::info!(%window, %panel, "word panel shown");
        Ok(ToggleOutcome::Shown(panel))
    }

    fn hide<H: EditorHost>(
        host: &mut H,
        window: WindowId,
        panel: ViewId,
    ) -> Result<ToggleOutcome, H::Error> {
        let previous_group = host.active_group(window);
        host.close_view(panel)?;
        host.focus_group(window, previous_group)?;

        let collapsed = host.views_in_group(window, PANEL_GROUP).is_empty();
        if collapsed {
            host.set_layout(window, &WindowLayout::single())?;
        }
        tracing::info!(%window, %panel, collapsed, "word panel hidden");
        Ok(ToggleOutcome::Hidden { collapsed })
    }

    // --- Updates -------------------------------------------------------------

    /// Rebuild and redraw the panel of `source`'s window from `source`'s
    /// completion candidates.
    pub fn update_on_source_change<H: EditorHost>(
        &mut self,
        host: &mut H,
        source: ViewId,
    ) -> UpdateOutcome {
        let panel = match self.panel_for_source(host, source) {
            Ok((_, panel)) => panel,
            Err(reason) => {
                tracing::debug!(%source, %reason, "panel update skipped");
                return UpdateOutcome::Skipped(reason);
            }
        };

        match self.refresh(host, source, panel) {
            Ok(entries) => UpdateOutcome::Rendered { panel, entries },
            Err(err) => UpdateOutcome::Failed(host_failed("update", &err)),
        }
    }

    fn panel_for_source<H: EditorHost>(
        &self,
        host: &H,
        source: ViewId,
    ) -> Result<(WindowId, ViewId), SkipReason> {
        if self.is_panel(host, source) {
            return Err(SkipReason::PanelIsSource);
        }
        let window = host.window_of(source).ok_or(SkipReason::Detached)?;
        let panel = self
            .find_panel(host, window)
            .ok_or(SkipReason::NoPanel)?;
        Ok((window, panel))
    }

    fn refresh<H: EditorHost>(
        &mut self,
        host: &mut H,
        source: ViewId,
        panel: ViewId,
    ) -> Result<usize, H::Error> {
        let mapping = build_mapping(host.completion_candidates(source)?);
        let entries = mapping.len();
        self.registry.save(panel.panel_id(), mapping);
        self.render(host, panel)?;
        Ok(entries)
    }

    /// Render the mapping saved for `panel` and write it into the panel.
    ///
    /// The panel is unlocked only for the duration of the write and is
    /// locked again even when the write fails.
    pub fn render<H: EditorHost>(
        &self,
        host: &mut H,
        panel: ViewId,
    ) -> Result<RenderedPanel, H::Error> {
        let viewport = host.viewport_px(panel)?;
        let font = host.font_metrics(panel)?;
        let rendered = render_panel(
            viewport,
            font,
            self.registry.get(panel.panel_id()),
            self.policy,
        );

        host.set_read_only(panel, false)?;
        let written = host.replace_text(panel, &rendered.text);
        let relocked = host.set_read_only(panel, true);
        written.and(relocked)?;
        Ok(rendered)
    }

    // --- Lookups -------------------------------------------------------------

    /// Inject the word assigned to `typed` into `source`.
    pub fn lookup<H: EditorHost>(
        &self,
        host: &mut H,
        source: ViewId,
        typed: &str,
    ) -> LookupOutcome {
        let (window, panel) = match self.panel_for_source(host, source) {
            Ok(found) => found,
            Err(reason) => {
                tracing::debug!(%source, %reason, "lookup skipped");
                return LookupOutcome::Skipped(reason);
            }
        };

        // Prompts may hand back the submitting line break; nothing else is stripped.
        let typed = typed.trim_end_matches(['\r', '\n']);
        let Some(word) = self
            .registry
            .lookup(panel.panel_id(), typed)
            .filter(|word| !word.is_empty())
        else {
            tracing::debug!(%panel, code = typed, "lookup skipped: unknown code");
            return LookupOutcome::Skipped(SkipReason::UnknownCode);
        };

        let injected = InjectionTarget::resolve(host, source, window)
            .and_then(|target| target.inject(host, word).map(|()| target));
        match injected {
            Ok(target) => LookupOutcome::Injected {
                word: word.to_string(),
                target,
            },
            Err(err) => LookupOutcome::Failed(host_failed("lookup", &err)),
        }
    }

    /// Ask the host for a code to look up on behalf of `source`.
    pub fn request_lookup<H: EditorHost>(&mut self, host: &mut H, source: ViewId) -> PromptOutcome {
        if self.is_panel(host, source) {
            return PromptOutcome::Skipped(SkipReason::PanelIsSource);
        }
        let Some(window) = host.window_of(source) else {
            return PromptOutcome::Skipped(SkipReason::Detached);
        };

        match host.show_prompt(window, &self.config.prompt_caption) {
            Ok(()) => {
                self.pending = Some(PendingLookup { source });
                PromptOutcome::Opened
            }
            Err(err) => PromptOutcome::Failed(host_failed("prompt", &err)),
        }
    }

    /// Finish the lookup started by [`request_lookup`](Self::request_lookup).
    pub fn prompt_submitted<H: EditorHost>(&mut self, host: &mut H, text: &str) -> LookupOutcome {
        match self.pending.take() {
            Some(PendingLookup { source }) => self.lookup(host, source, text),
            None => LookupOutcome::Skipped(SkipReason::NoPendingLookup),
        }
    }

    /// Drop the pending lookup. Returns whether one was waiting.
    pub fn prompt_cancelled(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}
