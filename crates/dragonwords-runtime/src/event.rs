#![forbid(unsafe_code)]

//! Host callbacks.
//!
//! Hosts translate their own callbacks into [`HostEvent`]s and hand them to
//! [`PanelController::handle_event`]. Events are processed one at a time on
//! the host's dispatch thread.

use dragonwords_backend::{EditorHost, ViewId, WindowId};

use crate::controller::{LookupOutcome, PanelController, PromptOutcome, ToggleOutcome, UpdateOutcome};

/// Something the host wants the panel to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A view gained focus.
    SourceActivated(ViewId),
    /// A view's text changed.
    SourceModified(ViewId),
    /// The user asked for the panel to be refreshed from a view.
    UpdatePanelRequested(ViewId),
    /// The user asked to show or hide the panel.
    ToggleRequested(WindowId),
    /// The user asked to insert a word into a view by its code.
    WordLookupRequested(ViewId),
    /// The lookup prompt was submitted.
    PromptSubmitted(String),
    /// The lookup prompt was dismissed.
    PromptCancelled,
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Update(UpdateOutcome),
    Toggle(ToggleOutcome),
    Prompt(PromptOutcome),
    Lookup(LookupOutcome),
    /// Whether a pending lookup was dropped.
    Cancelled(bool),
}

impl PanelController {
    /// Dispatch one host event.
    pub fn handle_event<H: EditorHost>(&mut self, host: &mut H, event: HostEvent) -> EventOutcome {
        tracing::trace!(?event, "host event");
        match event {
            HostEvent::SourceActivated(view)
            | HostEvent::SourceModified(view)
            | HostEvent::UpdatePanelRequested(view) => {
                EventOutcome::Update(self.update_on_source_change(host, view))
            }
            HostEvent::ToggleRequested(window) => EventOutcome::Toggle(self.toggle(host, window)),
            HostEvent::WordLookupRequested(view) => {
                EventOutcome::Prompt(self.request_lookup(host, view))
            }
            HostEvent::PromptSubmitted(text) => {
                EventOutcome::Lookup(self.prompt_submitted(host, &text))
            }
            HostEvent::PromptCancelled => EventOutcome::Cancelled(self.prompt_cancelled()),
        }
    }
}
