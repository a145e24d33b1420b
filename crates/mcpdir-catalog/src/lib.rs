//! MCP server catalog for MCP Directory.
//!
//! This crate owns the static list of cataloged MCP servers and the
//! operations the browser performs over it.
//!
//! # Architecture
//!
//! - [`ToolRecord`] describes one cataloged server: metadata plus the
//!   invocation (command, ordered args, optional env placeholders).
//! - [`Catalog`] holds records in authoring order. The built-in list is
//!   defined once in `builtins` and never mutated at runtime.
//! - [`Filter`] narrows a record list by a case-insensitive text query and a
//!   [`CategoryFilter`], producing a [`FilterResult`].

pub mod builtins;
pub mod error;
pub mod filter;
pub mod record;
pub mod store;

pub use builtins::{BUILTIN_COUNT, FEATURED_IDS};
pub use error::{Error, Result};
pub use filter::{CategoryFilter, Filter, FilterResult};
pub use record::{Category, ToolRecord, Vendor};
pub use store::Catalog;
