//! Browser-facing utilities.
//!
//! Provides:
//! - [`load_projects`] - Repository listing raced against a timeout
//! - [`dom`] - Focus and element measurement helpers
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
mod fetch;
pub mod logger;

pub use fetch::{
    BrowserTimer, GithubClient, RaceResult, RepoSource, Timer, load_projects, race_with_timeout,
};
