#![forbid(unsafe_code)]

//! DragonWords public facade crate.
//!
//! Re-exports the types an editor integration needs from the internal crates
//! and offers a prelude for day-to-day usage.
//!
//! ```
//! use dragonwords::prelude::*;
//!
//! let mapping = build_mapping(Some(["foo", "bar", "bazqux"]));
//! let panel = render_panel(
//!     ViewportPx::new(500.0, 200.0),
//!     FontMetrics::new(10.0, 20.0),
//!     &mapping,
//!     GridPolicy::default(),
//! );
//! assert_eq!(panel.text, "la foo       lb bar       lc bazqux    \n");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use dragonwords_core::{
    CODE_LEN, CODE_SPACE, Code, CodeParseError, FIRST_LETTERS, PanelConfig, PanelId,
    PanelRegistry, WordMapping, build_mapping, codes,
};

// --- Layout re-exports -----------------------------------------------------

pub use dragonwords_layout::{
    CharGrid, FontMetrics, GridPolicy, PanelGeometry, RenderedPanel, ViewportPx, WindowLayout,
    render_mapping, render_panel,
};

// --- Backend re-exports ----------------------------------------------------

pub use dragonwords_backend::{EditorHost, InjectionTarget, ViewId, WindowId};
#[cfg(feature = "memory-host")]
pub use dragonwords_backend::{MemoryHost, MemoryHostError};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use dragonwords_runtime::{
    EventOutcome, HostEvent, LookupOutcome, PanelController, PanelVisibility, PromptOutcome,
    SkipReason, ToggleOutcome, UpdateOutcome,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Code, EditorHost, FontMetrics, GridPolicy, PanelConfig, ViewId, ViewportPx, WindowId,
        WordMapping, build_mapping, render_panel,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{HostEvent, PanelController};

    pub use crate::{backend, core, layout};
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use dragonwords_backend as backend;
pub use dragonwords_core as core;
pub use dragonwords_layout as layout;
#[cfg(feature = "runtime")]
pub use dragonwords_runtime as runtime;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_covers_mapping_and_lookup() {
        let mapping = build_mapping(Some(["foo", "bar"]));
        let code: Code = "lb".parse().unwrap();
        assert_eq!(mapping.get_code(code), Some("bar"));
        assert_eq!(crate::core::CODE_SPACE, 234);
        assert_eq!(crate::layout::PANEL_GROUP, 1);
    }
}
