#![forbid(unsafe_code)]

//! Core: mnemonic codes, the word index, and panel configuration.
//!
//! # Role in DragonWords
//! `dragonwords-core` owns the data model. It knows nothing about pixels,
//! windows, or editors:
//!
//! - [`Code`] / [`codes`]: the fixed, ordered space of 234 two-letter codes.
//! - [`WordMapping`]: an ordered `code -> word` table built from completion
//!   candidates.
//! - [`PanelRegistry`]: which mapping belongs to which panel.
//! - [`PanelConfig`]: naming, prompt caption, and layout knobs read from the
//!   environment.
//!
//! # How it fits in the system
//! `dragonwords-layout` turns a [`WordMapping`] into panel text, and
//! `dragonwords-runtime` drives both against an editor host.

pub mod code;
pub mod config;
pub mod word_index;

pub use code::{CODE_LEN, CODE_SPACE, Code, CodeParseError, Codes, FIRST_LETTERS, codes};
pub use config::PanelConfig;
pub use word_index::{PanelId, PanelRegistry, WordMapping, build_mapping};
