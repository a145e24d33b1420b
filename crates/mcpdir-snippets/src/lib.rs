//! Configuration snippet generation for MCP Directory.
//!
//! Each host platform consumes MCP server definitions differently. This
//! crate turns a catalog [`ToolRecord`](mcpdir_catalog::ToolRecord) into the
//! text a user pastes into that platform.
//!
//! # Architecture
//!
//! - [`Platform`] is the closed set of supported hosts, in tab order.
//! - [`SnippetFormat`] describes how a platform wants its snippet: a JSON
//!   document, a key/value block, or step-by-step instructions. The
//!   per-platform descriptions live in [`formats`].
//! - [`generate`] dispatches on the format and returns a [`Snippet`].
//!
//! Generation is pure: the same record and platform always produce the same
//! bytes.

pub mod block;
pub mod error;
pub mod formats;
pub mod instructions;
pub mod json;
pub mod platform;
pub mod snippet;

pub use error::{Error, Result};
pub use formats::{BlockSpec, InstructionSpec, JsonSpec, SnippetFormat};
pub use platform::Platform;
pub use snippet::{Snippet, generate};
