#![forbid(unsafe_code)]

//! Where a looked-up word goes.
//!
//! Document views receive the word as a snippet at their selections; views
//! backed by a terminal get it sent to the window's terminal instead. The
//! choice is made once per lookup by [`InjectionTarget::resolve`].

use crate::{EditorHost, ViewId, WindowId};

/// Destination for injected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionTarget {
    /// Insert into an editable document.
    Document(ViewId),
    /// Send to the terminal attached to a window.
    Terminal(WindowId),
}

impl InjectionTarget {
    /// Pick the target for text typed while `view` (in `window`) had focus.
    pub fn resolve<H: EditorHost>(
        host: &H,
        view: ViewId,
        window: WindowId,
    ) -> Result<Self, H::Error> {
        if host.is_terminal(view)? {
            Ok(Self::Terminal(window))
        } else {
            Ok(Self::Document(view))
        }
    }

    /// Deliver `text` to this target.
    pub fn inject<H: EditorHost>(self, host: &mut H, text: &str) -> Result<(), H::Error> {
        tracing::trace!(target_kind = self.kind(), len = text.len(), "injecting word");
        match self {
            Self::Document(view) => host.insert_snippet(view, text),
            Self::Terminal(window) => host.send_to_terminal(window, text),
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Document(_) => "document",
            Self::Terminal(_) => "terminal",
        }
    }
}
