//! Command execution result type.

use crate::core::error::CommandError;
use crate::models::OutputData;

/// Output format requested for `projects`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectFormat {
    /// Table on wide viewports, list on narrow ones
    Table,
    /// Raw JSON document (`-j`, `--json`)
    Json,
}

/// Work a command hands back to the dispatcher instead of finishing inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsyncJob {
    /// Summary card from the local profile document
    Profile,
    /// Repository listing from the remote API
    Projects(ProjectFormat),
}

/// Result of executing a validated command.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandResult {
    /// Settled with this output.
    Output(OutputData),
    /// Truncate the output log and hide the banner.
    Clear,
    /// Handler refused its operand.
    Rejected(CommandError),
    /// Enter `Running`; the dispatcher completes the job.
    Deferred(AsyncJob),
}

impl CommandResult {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Output(OutputData::Text(s.into()))
    }
}
