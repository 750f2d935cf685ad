//! Command execution logic.
//!
//! Contains the synchronous handlers. Async commands only pick their job
//! here; the dispatcher owns the `Running` lifecycle.

use crate::core::error::CommandError;
use crate::core::theme::{Theme, ThemeManager};
use crate::models::OutputData;

use super::{
    AsyncJob, CommandName, CommandRegistry, CommandResult, Invocation, KEYBINDINGS, ProjectFormat,
};

/// Mutable session state a handler may touch.
pub struct ExecContext<'a> {
    pub registry: &'a CommandRegistry,
    pub theme: &'a mut ThemeManager,
}

/// Execute a validated invocation.
pub fn execute(inv: Invocation, ctx: &mut ExecContext<'_>) -> CommandResult {
    match inv.command {
        CommandName::Clear => CommandResult::Clear,
        CommandName::Echo => execute_echo(&inv.operands),
        CommandName::Fetch => CommandResult::Deferred(AsyncJob::Profile),
        CommandName::Help => execute_help(inv.first_operand(), ctx.registry),
        CommandName::Projects => {
            let format = if inv.has_flag("--json") {
                ProjectFormat::Json
            } else {
                ProjectFormat::Table
            };
            CommandResult::Deferred(AsyncJob::Projects(format))
        }
        CommandName::Theme => execute_theme(&inv, ctx.theme),
    }
}

/// Execute `echo`: operands joined by single spaces, or a blank line.
fn execute_echo(operands: &[String]) -> CommandResult {
    if operands.is_empty() {
        CommandResult::Output(OutputData::Empty)
    } else {
        CommandResult::text(operands.join(" "))
    }
}

/// Execute `help` / `help <command>`.
fn execute_help(target: Option<&str>, registry: &CommandRegistry) -> CommandResult {
    let Some(target) = target else {
        return CommandResult::Output(OutputData::Help {
            commands: registry.specs().iter().map(|s| s.one_line()).collect(),
            keybindings: KEYBINDINGS.to_vec(),
        });
    };

    match target.parse::<CommandName>() {
        Ok(name) => match registry.get(name.as_str()) {
            Some(spec) => CommandResult::Output(OutputData::CommandHelp {
                name: spec.name.as_str(),
                description: spec.description,
                usage: spec.usage,
            }),
            None => CommandResult::Rejected(CommandError::UnknownCommand(target.to_string())),
        },
        Err(err) => CommandResult::Rejected(err),
    }
}

/// Execute `theme`, `theme <name>` or `theme --list`.
fn execute_theme(inv: &Invocation, themes: &mut ThemeManager) -> CommandResult {
    if inv.has_flag("--list") {
        return CommandResult::text(Theme::listing());
    }

    match themes.select(inv.first_operand()) {
        Ok(selected) => CommandResult::text(format!("theme '{selected}' selected")),
        Err(err) => CommandResult::Rejected(err),
    }
}
