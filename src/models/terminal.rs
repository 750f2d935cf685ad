//! Terminal output types.
//!
//! Each submission produces one [`OutputEntry`]: the prompt and input as
//! typed, plus the rendered result. Entries are immutable once settled; the
//! only in-place change is an async `Loading` entry being replaced by its
//! result.

use std::collections::VecDeque;

use crate::config::MAX_OUTPUT_ENTRIES;
use crate::core::commands::CommandName;
use crate::core::error::CommandError;
use crate::core::Theme;

use super::{ProfileCard, Repository};

/// Coarse result category of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Text,
    Table,
    Json,
    Error,
}

impl OutputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::Json => "json",
            Self::Error => "error",
        }
    }
}

/// One `key  description` row of the help sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpLine {
    pub key: &'static str,
    pub description: &'static str,
}

/// Error message with optional detail lines and usage block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBlock {
    pub message: String,
    pub details: Vec<String>,
    pub usage: Option<&'static str>,
}

impl ErrorBlock {
    /// Generic message for any failure of the repository request.
    pub fn transport() -> Self {
        Self {
            message: "error: failed to load project data".to_string(),
            details: vec!["try again later".to_string()],
            usage: None,
        }
    }
}

impl From<CommandError> for ErrorBlock {
    fn from(err: CommandError) -> Self {
        let message = err.to_string();
        match err {
            CommandError::UnknownCommand(_) => Self {
                message,
                details: vec![CommandName::listing()],
                usage: None,
            },
            CommandError::UnexpectedFlag { usage, .. }
            | CommandError::UnexpectedArgument { usage, .. } => Self {
                message,
                details: vec![],
                usage: Some(usage),
            },
            CommandError::UnknownTheme(_) => Self {
                message,
                details: vec![Theme::listing()],
                usage: None,
            },
        }
    }
}

/// The rendered result of a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputData {
    /// Plain text
    Text(String),
    /// Blank line (`echo` with no arguments)
    Empty,
    /// Transient placeholder while an async command runs
    Loading,
    /// Rejected input or failed request
    Error(ErrorBlock),
    /// Overview help: one line per command and per keybinding
    Help {
        commands: Vec<HelpLine>,
        keybindings: Vec<HelpLine>,
    },
    /// Detail help for one command
    CommandHelp {
        name: &'static str,
        description: &'static str,
        usage: &'static str,
    },
    /// `fetch` summary card
    Profile(ProfileCard),
    /// `projects` rows, rendered as a table or list depending on width
    Projects(Vec<Repository>),
    /// Pretty-printed JSON document
    Json(String),
}

impl OutputData {
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Error(_) => OutputKind::Error,
            Self::Projects(_) => OutputKind::Table,
            Self::Json(_) => OutputKind::Json,
            _ => OutputKind::Text,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl From<CommandError> for OutputData {
    fn from(err: CommandError) -> Self {
        Self::Error(err.into())
    }
}

/// A single submission in the output log, with a unique ID for keyed rendering.
#[derive(Clone, Debug)]
pub struct OutputEntry {
    pub id: usize,
    pub prompt: String,
    pub input: String,
    /// `None` for a blank submission (prompt only).
    pub data: Option<OutputData>,
}

impl PartialEq for OutputEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.prompt == other.prompt && self.input == other.input && self.data == other.data
    }
}

/// Append-only log of entries, oldest first.
///
/// Holds at most [`MAX_OUTPUT_ENTRIES`]; older entries fall off the front.
#[derive(Clone, Debug, Default)]
pub struct OutputLog {
    entries: VecDeque<OutputEntry>,
    next_id: usize,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns its ID.
    pub fn push(
        &mut self,
        prompt: impl Into<String>,
        input: impl Into<String>,
        data: Option<OutputData>,
    ) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(OutputEntry {
            id,
            prompt: prompt.into(),
            input: input.into(),
            data,
        });
        if self.entries.len() > MAX_OUTPUT_ENTRIES {
            self.entries.pop_front();
        }
        id
    }

    /// Replaces the payload of an existing entry. Returns `false` if it is gone.
    pub fn replace(&mut self, id: usize, data: OutputData) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.data = Some(data);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: usize) -> Option<&OutputEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn last(&self) -> Option<&OutputEntry> {
        self.entries.back()
    }

    /// Truncates to empty. IDs keep increasing.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &OutputEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<OutputEntry> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kinds() {
        assert_eq!(OutputData::text("hi").kind(), OutputKind::Text);
        assert_eq!(OutputData::Empty.kind(), OutputKind::Text);
        assert_eq!(OutputData::Projects(vec![]).kind(), OutputKind::Table);
        assert_eq!(OutputData::Json("[]".into()).kind(), OutputKind::Json);
        assert_eq!(
            OutputData::Error(ErrorBlock::transport()).kind(),
            OutputKind::Error
        );
    }

    #[test]
    fn test_unknown_command_error_lists_commands() {
        let block = ErrorBlock::from(CommandError::UnknownCommand("ls".into()));
        assert_eq!(block.message, "command 'ls' is not supported");
        assert_eq!(
            block.details,
            ["available commands: clear, echo, fetch, help, projects, theme"]
        );
        assert_eq!(block.usage, None);
    }

    #[test]
    fn test_unexpected_flag_error_carries_usage() {
        let block = ErrorBlock::from(CommandError::UnexpectedFlag {
            flag: "-u".into(),
            usage: "projects",
        });
        assert_eq!(block.message, "unexpected flag: -u");
        assert_eq!(block.usage, Some("projects"));
    }

    #[test]
    fn test_unexpected_argument_error_carries_usage() {
        let block = ErrorBlock::from(CommandError::UnexpectedArgument {
            arg: "dracula".into(),
            usage: "theme [THEME]",
        });
        assert_eq!(block.message, "unexpected argument: dracula");
        assert_eq!(block.usage, Some("theme [THEME]"));
    }

    #[test]
    fn test_unknown_theme_error_lists_themes() {
        let block = ErrorBlock::from(CommandError::UnknownTheme("notfound".into()));
        assert_eq!(block.message, "theme 'notfound' is not supported");
        assert_eq!(block.details, [Theme::listing()]);
        assert!(block.details[0].contains("rose-pine"));
        assert_eq!(block.usage, None);
    }

    #[test]
    fn test_transport_error_is_generic() {
        let block = ErrorBlock::transport();
        assert_eq!(block.message, "error: failed to load project data");
        assert_eq!(block.details, ["try again later"]);
    }

    #[test]
    fn test_unique_ids() {
        let mut log = OutputLog::new();
        let a = log.push("p", "echo first", Some(OutputData::text("first")));
        let b = log.push("p", "echo first", Some(OutputData::text("first")));
        assert_ne!(a, b);
        // Content equality ignores IDs
        assert_eq!(log.get(a), log.get(b));
    }

    #[test]
    fn test_replace_in_place() {
        let mut log = OutputLog::new();
        let id = log.push("p", "projects", Some(OutputData::Loading));
        log.push("p", "echo", Some(OutputData::Empty));
        assert!(log.replace(id, OutputData::Json("[]".into())));
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next().unwrap().data, Some(OutputData::Json("[]".into())));
    }

    #[test]
    fn test_clear_keeps_ids_increasing() {
        let mut log = OutputLog::new();
        let first = log.push("p", "a", None);
        log.clear();
        assert!(log.is_empty());
        assert!(!log.replace(first, OutputData::Empty));
        assert!(log.push("p", "b", None) > first);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = OutputLog::new();
        for i in 0..MAX_OUTPUT_ENTRIES + 5 {
            log.push("p", i.to_string(), None);
        }
        assert_eq!(log.len(), MAX_OUTPUT_ENTRIES);
        assert_eq!(log.iter().next().unwrap().input, "5");
    }
}
