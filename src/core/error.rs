//! Error types for the interpreter.
//!
//! - [`CommandError`] - user input the interpreter refuses (always recoverable)
//! - [`FetchError`] - transport failures while loading remote data
//! - [`ConfigError`] - a malformed profile document

use thiserror::Error;

/// Invalid user input, rendered inline as an `error` output entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// First token does not name a registered command.
    #[error("command '{0}' is not supported")]
    UnknownCommand(String),
    /// Flag not declared by the command's grammar.
    #[error("unexpected flag: {flag}")]
    UnexpectedFlag { flag: String, usage: &'static str },
    /// Operand past the single one the command takes.
    #[error("unexpected argument: {arg}")]
    UnexpectedArgument { arg: String, usage: &'static str },
    /// Theme name outside the fixed enumeration.
    #[error("theme '{0}' is not supported")]
    UnknownTheme(String),
}

/// Network/fetch-related errors for the repository listing request.
///
/// The detail is logged; users only ever see a generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or was aborted
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Response body was not the expected JSON
    #[error("JSON parse error: {0}")]
    Decode(String),
    /// Request lost the race against the timeout
    #[error("request timed out")]
    Timeout,
}

/// Profile document errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid profile config: {0}")]
    Parse(#[from] toml::de::Error),
}
