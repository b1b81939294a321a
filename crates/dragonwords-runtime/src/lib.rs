#![forbid(unsafe_code)]

//! DragonWords Runtime
//!
//! The panel controller ties the core and layout crates to an editor host.
//!
//! # Key Components
//!
//! - [`PanelController`] - Owns the word registry and drives the panel lifecycle
//! - [`PanelVisibility`] - Closed / hidden / visible, derived from host state
//! - [`HostEvent`] - Entry points the host calls, dispatched by
//!   [`PanelController::handle_event`]
//!
//! # How it fits in the system
//! The host reports focus changes, edits, and commands as [`HostEvent`]s. The
//! controller rebuilds the source view's [`WordMapping`](dragonwords_core::WordMapping),
//! stores it per panel, renders it through `dragonwords-layout`, and writes
//! the text back into the panel view. Lookups go the other way: a typed code
//! is resolved through the registry and the word is injected into the source.
//!
//! Nothing here raises to the host. Missing panels and unknown codes come
//! back as `Skipped` outcomes; host errors are logged and come back as
//! `Failed`.

pub mod controller;
pub mod event;

pub use controller::{
    LookupOutcome, PanelController, PanelVisibility, PromptOutcome, SkipReason, ToggleOutcome,
    UpdateOutcome,
};
pub use event::{EventOutcome, HostEvent};
