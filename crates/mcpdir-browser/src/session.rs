//! Interactive browsing session.

use std::time::Instant;

use mcpdir_catalog::Catalog;

use crate::clipboard::Clipboard;
use crate::detail::DetailView;
use crate::error::{Error, Result};
use crate::state::{Action, Effect, Listing, ViewState};

/// Catalog, state, clipboard and clock for one front-end session.
pub struct Session<C: Clipboard> {
    catalog: Catalog,
    state: ViewState,
    clipboard: C,
    started: Instant,
}

impl<C: Clipboard> Session<C> {
    pub fn new(catalog: Catalog, state: ViewState, clipboard: C) -> Self {
        Self {
            catalog,
            state,
            clipboard,
            started: Instant::now(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Milliseconds since the session started.
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Apply an action and perform its effect.
    ///
    /// A failed clipboard write is logged and otherwise treated like a
    /// successful one.
    pub fn dispatch(&mut self, action: Action) {
        if let Some(Effect::WriteClipboard(text)) = self.state.reduce(&self.catalog, action)
            && let Err(e) = self.clipboard.write_text(&text)
        {
            tracing::warn!(error = %e, "Clipboard write failed");
        }
    }

    /// Open the detail view for `id`, failing if the catalog lacks it.
    pub fn open(&mut self, id: &str) -> Result<()> {
        if !self.catalog.contains(id) {
            return Err(Error::UnknownTool { id: id.to_string() });
        }
        self.dispatch(Action::Select(id.to_string()));
        Ok(())
    }

    /// Copy the open detail view's snippet body. Returns false when no
    /// detail view is open.
    pub fn copy_snippet(&mut self) -> bool {
        let Some(text) = self.detail().map(|view| view.snippet.body) else {
            return false;
        };
        let now_ms = self.now_ms();
        self.dispatch(Action::Copy { text, now_ms });
        true
    }

    /// Dismiss the acknowledgment once its display window has passed.
    pub fn tick(&mut self) {
        let now_ms = self.now_ms();
        self.dispatch(Action::Tick { now_ms });
    }

    pub fn listing(&self) -> Listing<'_> {
        self.state.listing(&self.catalog)
    }

    pub fn detail(&self) -> Option<DetailView<'_>> {
        self.state.detail(&self.catalog)
    }
}
