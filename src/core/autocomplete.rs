//! Typeahead completion for the prompt line.
//!
//! A suggestion is the text that would be appended to the buffer on Tab.
//! Three sources are tried in order; the first that yields wins:
//! - Command names (e.g., "he" → "lp")
//! - The command's fixed vocabulary: flags, theme names, help targets
//! - Previously submitted lines, most recent first
//!
//! A prefix that matches two or more candidates within a source yields
//! nothing from that source rather than an arbitrary pick.

use crate::core::commands::CommandRegistry;

// ============================================================================
// Public Types
// ============================================================================

/// Inline continuation of the current input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Buffer text the suggestion was computed for.
    pub prefix: String,
    /// Text to append on accept.
    pub continuation: String,
}

impl Suggestion {
    fn new(prefix: &str, continuation: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            continuation: continuation.to_string(),
        }
    }

    /// The buffer text after accepting.
    pub fn accepted(&self) -> String {
        format!("{}{}", self.prefix, self.continuation)
    }
}

type Source = fn(&str, &CommandRegistry, &[String]) -> Option<Suggestion>;

/// Sources in precedence order.
const SOURCES: [Source; 3] = [from_command_names, from_vocabulary, from_history];

// ============================================================================
// Public API
// ============================================================================

/// Computes the suggestion for `input`, if any.
pub fn suggest(input: &str, registry: &CommandRegistry, history: &[String]) -> Option<Suggestion> {
    if input.trim().is_empty() {
        return None;
    }
    SOURCES
        .iter()
        .find_map(|source| source(input, registry, history))
}

/// Completes a partially typed command name.
///
/// Applies only while the input is a single token.
pub fn from_command_names(
    input: &str,
    registry: &CommandRegistry,
    _history: &[String],
) -> Option<Suggestion> {
    let partial = input.trim_start();
    if partial.contains(char::is_whitespace) {
        return None;
    }
    let name = unique_extension(partial, registry.names())?;
    Some(Suggestion::new(input, &name[partial.len()..]))
}

/// Completes the trailing token from the command's vocabulary.
///
/// Applies once the first token is a complete command name followed by
/// whitespace.
pub fn from_vocabulary(
    input: &str,
    registry: &CommandRegistry,
    _history: &[String],
) -> Option<Suggestion> {
    let trimmed = input.trim_start();
    let (command, rest) = trimmed.split_once(char::is_whitespace)?;

    let trailing = if rest.ends_with(char::is_whitespace) || rest.is_empty() {
        ""
    } else {
        rest.rsplit(char::is_whitespace).next().unwrap_or(rest)
    };

    let word = unique_extension(trailing, registry.vocabulary(command).into_iter())?;
    Some(Suggestion::new(input, &word[trailing.len()..]))
}

/// Completes from history: the newest entry that strictly extends the input.
pub fn from_history(
    input: &str,
    _registry: &CommandRegistry,
    history: &[String],
) -> Option<Suggestion> {
    history
        .iter()
        .rev()
        .find(|entry| entry.len() > input.len() && entry.starts_with(input))
        .map(|entry| Suggestion::new(input, &entry[input.len()..]))
}

// ============================================================================
// Utilities
// ============================================================================

/// The only candidate that strictly extends `partial`, or `None` when there
/// are zero or several.
fn unique_extension<'a>(
    partial: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let mut matches = candidates.filter(|c| c.len() > partial.len() && c.starts_with(partial));
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

// ============================================================================
// Tests
// ============================================================================
