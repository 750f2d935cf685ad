//! Command registry: names, argument grammar, help metadata.
//!
//! The registry is a static table built once at startup. Each entry declares
//! which flags the command accepts and what its operands look like; the
//! dispatcher validates input against it before any handler runs, so an
//! unknown flag never reaches a handler (and never triggers a request).

mod execute;
mod result;

use std::fmt;
use std::str::FromStr;

pub use execute::{ExecContext, execute};
pub use result::{AsyncJob, CommandResult, ProjectFormat};

use crate::core::error::CommandError;
use crate::core::parser::{ParsedLine, first_token, is_flag};
use crate::core::theme::Theme;
use crate::models::HelpLine;

// =============================================================================
// Command Names
// =============================================================================

/// Every registered command, in sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandName {
    Clear,
    Echo,
    Fetch,
    Help,
    Projects,
    Theme,
}

impl CommandName {
    pub const ALL: [CommandName; 6] = [
        Self::Clear,
        Self::Echo,
        Self::Fetch,
        Self::Help,
        Self::Projects,
        Self::Theme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Echo => "echo",
            Self::Fetch => "fetch",
            Self::Help => "help",
            Self::Projects => "projects",
            Self::Theme => "theme",
        }
    }

    /// `available commands: ...` line used by rejections.
    pub fn listing() -> String {
        let names: Vec<_> = Self::ALL.iter().map(|c| c.as_str()).collect();
        format!("available commands: {}", names.join(", "))
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

// =============================================================================
// Argument Grammar
// =============================================================================

/// A flag accepted by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    pub short: Option<&'static str>,
    pub long: &'static str,
}

impl Flag {
    fn matches(&self, token: &str) -> bool {
        self.long == token || self.short == Some(token)
    }
}

/// Fixed word lists a command's operand is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    Commands,
    Themes,
}

impl Vocabulary {
    fn words(self) -> Vec<&'static str> {
        match self {
            Self::Commands => CommandName::ALL.iter().map(|c| c.as_str()).collect(),
            Self::Themes => Theme::names(),
        }
    }
}

/// Shape of a command's non-flag arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// Extra arguments are ignored.
    None,
    /// Free text; dashes are literal, no flag parsing at all.
    Text,
    /// At most one word, ideally from the vocabulary. A second is rejected.
    One(Vocabulary),
}

/// Whether the handler settles immediately or goes through `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Sync,
    Async,
}

/// Registry entry for one command.
#[derive(Debug)]
pub struct CommandSpec {
    pub name: CommandName,
    pub description: &'static str,
    pub usage: &'static str,
    pub flags: &'static [Flag],
    pub operands: Operands,
    pub handler: HandlerKind,
}

impl CommandSpec {
    /// Words the completion engine may offer after the command name.
    pub fn vocabulary(&self) -> Vec<&'static str> {
        let mut words: Vec<&'static str> = match self.operands {
            Operands::One(vocab) => vocab.words(),
            Operands::None | Operands::Text => vec![],
        };
        for flag in self.flags {
            words.extend(flag.short);
            words.push(flag.long);
        }
        words
    }

    /// One-line summary for the overview help.
    pub fn one_line(&self) -> HelpLine {
        HelpLine {
            key: self.name.as_str(),
            description: self.description,
        }
    }
}

static SPECS: [CommandSpec; 6] = [
    CommandSpec {
        name: CommandName::Clear,
        description: "clear screen",
        usage: "clear",
        flags: &[],
        operands: Operands::None,
        handler: HandlerKind::Sync,
    },
    CommandSpec {
        name: CommandName::Echo,
        description: "display a line of text",
        usage: "echo [STRING]...",
        flags: &[],
        operands: Operands::Text,
        handler: HandlerKind::Sync,
    },
    CommandSpec {
        name: CommandName::Fetch,
        description: "get a summary about me",
        usage: "fetch",
        flags: &[],
        operands: Operands::None,
        handler: HandlerKind::Async,
    },
    CommandSpec {
        name: CommandName::Help,
        description: "show help message",
        usage: "help            show the overview help\n\
                help [command]  show help for a specific command",
        flags: &[],
        operands: Operands::One(Vocabulary::Commands),
        handler: HandlerKind::Sync,
    },
    CommandSpec {
        name: CommandName::Projects,
        description: "explore my projects",
        usage: "projects             use table format\n\
                projects -j, --json  use JSON format",
        flags: &[Flag {
            short: Some("-j"),
            long: "--json",
        }],
        operands: Operands::None,
        handler: HandlerKind::Async,
    },
    CommandSpec {
        name: CommandName::Theme,
        description: "change the theme",
        usage: "theme             pick a random theme\n\
                theme [THEME]     use the specified theme\n\
                theme -l, --list  list available themes",
        flags: &[Flag {
            short: Some("-l"),
            long: "--list",
        }],
        operands: Operands::One(Vocabulary::Themes),
        handler: HandlerKind::Sync,
    },
];

/// Keybindings listed by `help`.
pub const KEYBINDINGS: [HelpLine; 5] = [
    HelpLine {
        key: "[arrow up]",
        description: "previous command",
    },
    HelpLine {
        key: "[arrow down]",
        description: "next command",
    },
    HelpLine {
        key: "[ctrl+c]",
        description: "clear input",
    },
    HelpLine {
        key: "[ctrl+l]",
        description: "clear screen",
    },
    HelpLine {
        key: "[tab]",
        description: "accept completion",
    },
];

// =============================================================================
// Registry
// =============================================================================

/// A validated call: known command, accepted flags, operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: CommandName,
    /// Accepted flags, normalized to their long form.
    pub flags: Vec<&'static str>,
    pub operands: Vec<String>,
}

impl Invocation {
    pub fn has_flag(&self, long: &str) -> bool {
        self.flags.iter().any(|f| *f == long)
    }

    pub fn first_operand(&self) -> Option<&str> {
        self.operands.first().map(String::as_str)
    }
}

/// Immutable table of registered commands.
#[derive(Debug, Clone, Copy)]
pub struct CommandRegistry {
    specs: &'static [CommandSpec],
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandRegistry {
    /// The built-in command set.
    pub fn builtin() -> Self {
        Self { specs: &SPECS }
    }

    pub fn specs(&self) -> &'static [CommandSpec] {
        self.specs
    }

    /// Looks up a command by exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&'static CommandSpec> {
        self.specs.iter().find(|s| s.name.as_str() == name)
    }

    /// Command names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.specs.iter().map(|s| s.name.as_str())
    }

    /// Vocabulary offered after `name`, empty for unknown commands.
    pub fn vocabulary(&self, name: &str) -> Vec<&'static str> {
        self.get(name).map(CommandSpec::vocabulary).unwrap_or_default()
    }

    /// Checks a parsed line against the command's grammar.
    pub fn validate(&self, line: &ParsedLine) -> Result<Invocation, CommandError> {
        let spec = self
            .get(&line.name)
            .ok_or_else(|| CommandError::UnknownCommand(line.name.clone()))?;

        if spec.operands == Operands::Text {
            return Ok(Invocation {
                command: spec.name,
                flags: vec![],
                operands: line.args.clone(),
            });
        }

        let mut flags = Vec::new();
        let mut operands = Vec::new();
        for arg in &line.args {
            if !is_flag(arg) {
                operands.push(arg.clone());
                continue;
            }
            let flag = spec
                .flags
                .iter()
                .find(|f| f.matches(arg))
                .ok_or_else(|| CommandError::UnexpectedFlag {
                    flag: arg.clone(),
                    usage: spec.usage,
                })?;
            if !flags.contains(&flag.long) {
                flags.push(flag.long);
            }
        }

        if let (Operands::One(_), Some(extra)) = (spec.operands, operands.get(1)) {
            return Err(CommandError::UnexpectedArgument {
                arg: extra.clone(),
                usage: spec.usage,
            });
        }

        Ok(Invocation {
            command: spec.name,
            flags,
            operands,
        })
    }
}

// =============================================================================
// First-token Classification
// =============================================================================

/// Live validity of the command-name token while typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Pass,
    Fail,
}

/// `Pass` only when the first token is exactly a registered command.
pub fn classify_first_token(text: &str) -> TokenClass {
    let token = first_token(text);
    if CommandRegistry::builtin().get(token).is_some() {
        TokenClass::Pass
    } else {
        TokenClass::Fail
    }
}
