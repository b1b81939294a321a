//! One scripted panel session against [`MemoryHost`].
//!
//! The session mirrors what an editor does at startup: a window with one
//! document whose completion list is the input words, the panel toggled
//! open, the document activated, and optionally a code looked up through
//! the prompt.

use serde::Serialize;

use dragonwords::{
    Code, EventOutcome, FontMetrics, HostEvent, LookupOutcome, MemoryHost, PanelConfig,
    PanelController, PromptOutcome, SkipReason, ToggleOutcome, UpdateOutcome, ViewportPx,
};

use crate::error::{HarnessError, Result};

/// Panel size and font used for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionMetrics {
    pub viewport: ViewportPx,
    pub font: FontMetrics,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self {
            viewport: ViewportPx::new(500.0, 200.0),
            font: FontMetrics::new(10.0, 20.0),
        }
    }
}

/// What the session produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub entries: usize,
    pub columns: usize,
    pub rows: usize,
    pub overflows_height: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injected: Option<String>,
}

/// Collect candidate words, one per line, ignoring blank lines.
pub fn read_words<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let word = line.as_ref().trim();
            (!word.is_empty()).then(|| word.to_string())
        })
        .collect()
}

pub fn run_session(
    config: PanelConfig,
    metrics: SessionMetrics,
    words: Vec<String>,
    lookup: Option<Code>,
) -> Result<SessionReport> {
    let mut host = MemoryHost::new();
    let window = host.open_window();
    let source = host.open_view(window)?;
    host.set_candidates(source, Some(words));

    let mut controller = PanelController::new(config);
    let panel = match controller.handle_event(&mut host, HostEvent::ToggleRequested(window)) {
        EventOutcome::Toggle(ToggleOutcome::Created(panel)) => panel,
        EventOutcome::Toggle(ToggleOutcome::Failed(message)) => {
            return Err(HarnessError::Host(message));
        }
        other => return Err(HarnessError::not_rendered(format!("{other:?}"))),
    };
    host.set_viewport(panel, metrics.viewport);
    host.set_font(panel, metrics.font);

    let entries = match controller.handle_event(&mut host, HostEvent::SourceActivated(source)) {
        EventOutcome::Update(UpdateOutcome::Rendered { entries, .. }) => entries,
        EventOutcome::Update(UpdateOutcome::Failed(message)) => {
            return Err(HarnessError::Host(message));
        }
        EventOutcome::Update(UpdateOutcome::Skipped(reason)) => {
            return Err(HarnessError::not_rendered(reason.to_string()));
        }
        other => return Err(HarnessError::not_rendered(format!("{other:?}"))),
    };
    let rendered = controller.render(&mut host, panel)?;
    tracing::info!(entries, rows = rendered.geometry.row_count, "panel rendered");

    let injected = match lookup {
        Some(code) => Some(lookup_word(&mut controller, &mut host, source, code)?),
        None => None,
    };

    Ok(SessionReport {
        entries,
        columns: rendered.geometry.column_count,
        rows: rendered.geometry.row_count,
        overflows_height: rendered.geometry.overflows_height(),
        text: host.text(panel).unwrap_or_default().to_string(),
        injected,
    })
}

fn lookup_word(
    controller: &mut PanelController,
    host: &mut MemoryHost,
    source: dragonwords::ViewId,
    code: Code,
) -> Result<String> {
    match controller.handle_event(host, HostEvent::WordLookupRequested(source)) {
        EventOutcome::Prompt(PromptOutcome::Opened) => {}
        EventOutcome::Prompt(PromptOutcome::Failed(message)) => {
            return Err(HarnessError::Host(message));
        }
        other => return Err(HarnessError::not_rendered(format!("{other:?}"))),
    }

    match controller.handle_event(host, HostEvent::PromptSubmitted(code.to_string())) {
        EventOutcome::Lookup(LookupOutcome::Injected { word, .. }) => Ok(word),
        EventOutcome::Lookup(LookupOutcome::Skipped(SkipReason::UnknownCode)) => {
            Err(HarnessError::UnknownCode {
                code: code.to_string(),
            })
        }
        EventOutcome::Lookup(LookupOutcome::Failed(message)) => Err(HarnessError::Host(message)),
        other => Err(HarnessError::not_rendered(format!("{other:?}"))),
    }
}
