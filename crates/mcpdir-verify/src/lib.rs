//! Link verification for the MCP Directory catalog.
//!
//! Walks catalog records one at a time and checks that each homepage points
//! at an existing GitHub repository and that any scoped npm package in the
//! invocation exists on the registry. Checks are best-effort: no retries, a
//! fixed delay between records, and transport failures never abort the run.
//!
//! HTTP access goes through the [`LinkProbe`] trait so the runner can be
//! exercised without network access.

pub mod config;
pub mod error;
pub mod github;
pub mod npm;
pub mod probe;
pub mod report;
pub mod runner;

pub use config::VerifyConfig;
pub use error::{Error, Result};
pub use github::GithubCheck;
pub use npm::NpmCheck;
pub use probe::{HttpProbe, LinkProbe, ProbeResponse};
pub use report::{Outcome, Report, ReportEntry};
pub use runner::Verifier;
