//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`OutputEntry`], [`OutputData`], [`OutputLog`] - Terminal output
//! - [`Repository`] - Project rows for the `projects` command
//! - [`Profile`], [`ProfileCard`] - The personal profile document

mod profile;
mod repository;
mod terminal;

pub use profile::{Github, InProgress, Link, Linkedin, Profile, ProfileCard, PromptConfig};
pub use repository::{Repository, merge_projects};
pub use terminal::{ErrorBlock, HelpLine, OutputData, OutputEntry, OutputKind, OutputLog};
