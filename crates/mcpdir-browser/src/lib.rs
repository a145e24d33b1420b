//! Browser state for MCP Directory.
//!
//! All UI state lives in one serializable [`ViewState`] value. Front ends
//! feed it [`Action`]s and render from it; nothing else holds mutable UI
//! state. This keeps every transition testable without a terminal.
//!
//! - [`ViewState::reduce`] applies an action synchronously and returns the
//!   side effect (if any) the front end should perform.
//! - [`DetailView`] is derived from the state for the selected record.
//! - [`Session`] wires a catalog, a state, a clipboard and a clock together
//!   for interactive front ends.

pub mod clipboard;
pub mod detail;
pub mod error;
pub mod session;
pub mod state;
pub mod toast;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use detail::{DetailView, ENV_PLACEHOLDER, EnvVarRow, NO_ENV_MESSAGE};
pub use error::{Error, Result};
pub use session::Session;
pub use state::{Action, Effect, Listing, ViewState};
pub use toast::{COPIED_MESSAGE, TOAST_DURATION_MS, Toast};
