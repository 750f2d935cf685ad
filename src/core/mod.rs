//! Interpreter core for the terminal.
//!
//! This module provides:
//! - [`LineBuffer`] and [`HistoryStore`] for line editing and recall
//! - [`autocomplete::suggest`] for typeahead
//! - [`CommandRegistry`] and the [`Dispatcher`] submission lifecycle
//! - [`Session`], the owned context tying them together
//! - [`ScrollController`] and [`ThemeManager`]
//!
//! Nothing here touches the DOM, so all of it runs under native tests.

pub mod autocomplete;
mod buffer;
pub mod commands;
mod dispatcher;
pub mod error;
mod history;
pub mod parser;
mod scroll;
mod session;
mod theme;

pub use autocomplete::{Suggestion, suggest};
pub use buffer::LineBuffer;
pub use commands::{CommandName, CommandRegistry, ProjectFormat, TokenClass, classify_first_token};
pub use dispatcher::{
    DispatchContext, Dispatcher, Lifecycle, ProjectsRequest, Settlement, Submission, Ticket,
};
pub use history::HistoryStore;
pub use scroll::{EditPoint, ScrollController, ScrollTrigger, Viewport};
pub use session::{Key, Session};
pub use theme::{Theme, ThemeManager};
