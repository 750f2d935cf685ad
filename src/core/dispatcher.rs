//! Submission lifecycle.
//!
//! Every submitted line runs `Idle → validated | rejected → settled`. The
//! `projects` command additionally passes through `Running` while its request
//! is in flight. There is a single pending slot: while `Running`, further
//! submissions are refused, and only the completion carrying the current
//! [`Ticket`] may settle the loading entry. Anything else is discarded.

use crate::config::GITHUB_API_BASE;
use crate::core::commands::{
    AsyncJob, CommandRegistry, CommandResult, ExecContext, ProjectFormat, execute,
};
use crate::core::error::FetchError;
use crate::core::history::HistoryStore;
use crate::core::parser::parse_line;
use crate::core::theme::ThemeManager;
use crate::models::{
    ErrorBlock, OutputData, OutputLog, Profile, ProfileCard, Repository, merge_projects,
};

// ============================================================================
// Lifecycle Types
// ============================================================================

/// Identifies one outbound request. A completion with any other ticket is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Dispatcher state between submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    /// Waiting on the repository request; `entry_id` is the loading entry.
    Running { ticket: Ticket, entry_id: usize },
}

/// Terminal state of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// Synchronous command completed (including blank input and `clear`)
    Settled,
    /// Unknown command, unexpected flag or invalid operand
    Rejected,
    /// Async command rendered its result
    Succeeded,
    /// Request failed before the timeout
    Failed,
    /// Timeout won the race
    TimedOut,
}

/// Request the view layer must run, then report back through `settle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectsRequest {
    pub ticket: Ticket,
    pub url: String,
    pub format: ProjectFormat,
}

/// What happened to a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Settled(Settlement),
    Running(ProjectsRequest),
    /// Refused because an earlier submission is still running.
    Busy,
}

/// Session state the dispatcher reads and writes during a submission.
pub struct DispatchContext<'a> {
    pub history: &'a mut HistoryStore,
    pub output: &'a mut OutputLog,
    pub theme: &'a mut ThemeManager,
    pub profile: &'a Profile,
    pub banner_visible: &'a mut bool,
}

// ============================================================================
// Dispatcher
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    registry: CommandRegistry,
    lifecycle: Lifecycle,
    format: Option<ProjectFormat>,
    next_ticket: u64,
    last: Option<Settlement>,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Running { .. })
    }

    /// Terminal state of the most recent submission, if it has settled.
    pub fn last_settlement(&self) -> Option<Settlement> {
        self.last
    }

    /// Runs one submitted line. The caller clears the input buffer unless
    /// the result is [`Submission::Busy`].
    pub fn submit(&mut self, line: &str, prompt: &str, ctx: DispatchContext<'_>) -> Submission {
        if self.is_busy() {
            log::debug!("submission refused while running: {line:?}");
            return Submission::Busy;
        }

        let Some(parsed) = parse_line(line) else {
            ctx.output.push(prompt, line, None);
            return self.finish(Settlement::Settled);
        };

        ctx.history.append(line);

        let invocation = match self.registry.validate(&parsed) {
            Ok(invocation) => invocation,
            Err(err) => {
                log::debug!("rejected {line:?}: {err}");
                ctx.output.push(prompt, line, Some(err.into()));
                return self.finish(Settlement::Rejected);
            }
        };
        if let Some(spec) = self.registry.get(invocation.command.as_str()) {
            log::debug!("dispatching {} ({:?})", spec.name, spec.handler);
        }

        let mut exec = ExecContext {
            registry: &self.registry,
            theme: ctx.theme,
        };
        match execute(invocation, &mut exec) {
            CommandResult::Output(data) => {
                ctx.output.push(prompt, line, Some(data));
                self.finish(Settlement::Settled)
            }
            CommandResult::Clear => {
                ctx.output.clear();
                *ctx.banner_visible = false;
                self.finish(Settlement::Settled)
            }
            CommandResult::Rejected(err) => {
                ctx.output.push(prompt, line, Some(err.into()));
                self.finish(Settlement::Rejected)
            }
            CommandResult::Deferred(AsyncJob::Profile) => {
                // The profile is local: no request, no `Running`, no loading entry.
                let card = ProfileCard::from(ctx.profile);
                ctx.output.push(prompt, line, Some(OutputData::Profile(card)));
                self.finish(Settlement::Succeeded)
            }
            CommandResult::Deferred(AsyncJob::Projects(format)) => {
                let entry_id = ctx.output.push(prompt, line, Some(OutputData::Loading));
                let ticket = Ticket(self.next_ticket);
                self.next_ticket += 1;
                self.lifecycle = Lifecycle::Running { ticket, entry_id };
                self.format = Some(format);
                self.last = None;
                log::debug!("running projects request {ticket:?}");
                Submission::Running(ProjectsRequest {
                    ticket,
                    url: ctx.profile.github.api_url(GITHUB_API_BASE),
                    format,
                })
            }
        }
    }

    /// Completes the running request. Returns `false` and changes nothing when
    /// `ticket` is not the pending one.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Repository>, FetchError>,
        output: &mut OutputLog,
        profile: &Profile,
    ) -> bool {
        let entry_id = match self.lifecycle {
            Lifecycle::Running {
                ticket: pending,
                entry_id,
            } if pending == ticket => entry_id,
            _ => {
                log::warn!("discarding stale completion {ticket:?}");
                return false;
            }
        };
        let format = self.format.take().unwrap_or(ProjectFormat::Table);

        let (data, settlement) = match result {
            Ok(live) => {
                let projects =
                    merge_projects(live, &profile.github.repos, &profile.github.in_progress);
                render_projects(projects, format)
            }
            Err(err) => {
                log::warn!("projects request failed: {err}");
                let settlement = if err == FetchError::Timeout {
                    Settlement::TimedOut
                } else {
                    Settlement::Failed
                };
                (OutputData::Error(ErrorBlock::transport()), settlement)
            }
        };

        if !output.replace(entry_id, data) {
            log::debug!("loading entry {entry_id} no longer in the log");
        }
        self.lifecycle = Lifecycle::Idle;
        self.finish(settlement);
        true
    }

    fn finish(&mut self, settlement: Settlement) -> Submission {
        log::debug!("settled: {settlement:?}");
        self.last = Some(settlement);
        Submission::Settled(settlement)
    }
}

fn render_projects(projects: Vec<Repository>, format: ProjectFormat) -> (OutputData, Settlement) {
    match format {
        ProjectFormat::Table => (OutputData::Projects(projects), Settlement::Succeeded),
        ProjectFormat::Json => match serde_json::to_string_pretty(&projects) {
            Ok(json) => (OutputData::Json(json), Settlement::Succeeded),
            Err(err) => {
                log::warn!("failed to encode projects: {err}");
                (OutputData::Error(ErrorBlock::transport()), Settlement::Failed)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Github, InProgress};

    struct Fixture {
        dispatcher: Dispatcher,
        history: HistoryStore,
        output: OutputLog,
        theme: ThemeManager,
        profile: Profile,
        banner_visible: bool,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dispatcher: Dispatcher::new(CommandRegistry::builtin()),
                history: HistoryStore::new(),
                output: OutputLog::new(),
                theme: ThemeManager::default(),
                profile: Profile {
                    github: Github {
                        username: "octo".to_string(),
                        repos: vec![],
                        in_progress: vec![
                            InProgress {
                                name: "alpha".to_string(),
                                description: "first".to_string(),
                            },
                            InProgress {
                                name: "beta".to_string(),
                                description: "second".to_string(),
                            },
                        ],
                    },
                    ..Profile::default()
                },
                banner_visible: true,
            }
        }

        fn submit(&mut self, line: &str) -> Submission {
            let ctx = DispatchContext {
                history: &mut self.history,
                output: &mut self.output,
                theme: &mut self.theme,
                profile: &self.profile,
                banner_visible: &mut self.banner_visible,
            };
            self.dispatcher.submit(line, "u@h:~$", ctx)
        }

        fn settle(&mut self, ticket: Ticket, result: Result<Vec<Repository>, FetchError>) -> bool {
            self.dispatcher
                .settle(ticket, result, &mut self.output, &self.profile)
        }

        fn last_data(&self) -> Option<&OutputData> {
            self.output.last().and_then(|e| e.data.as_ref())
        }

        fn running(&mut self, line: &str) -> ProjectsRequest {
            match self.submit(line) {
                Submission::Running(request) => request,
                other => panic!("Expected running submission, got {other:?}"),
            }
        }
    }

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            html_url: Some(format!("https://github.com/octo/{name}")),
            description: None,
            stargazers_count: Some(1),
            in_progress: false,
        }
    }

    #[test]
    fn test_echo_settles() {
        let mut f = Fixture::new();
        assert_eq!(f.submit("echo a  b"), Submission::Settled(Settlement::Settled));
        assert_eq!(f.last_data(), Some(&OutputData::text("a b")));
        assert_eq!(f.history.entries(), ["echo a  b"]);
        assert_eq!(f.output.last().unwrap().prompt, "u@h:~$");
    }

    #[test]
    fn test_blank_line_is_prompt_only() {
        let mut f = Fixture::new();
        assert_eq!(f.submit("   "), Submission::Settled(Settlement::Settled));
        assert_eq!(f.output.len(), 1);
        assert_eq!(f.output.last().unwrap().data, None);
        assert!(f.history.is_empty());
    }

    #[test]
    fn test_unknown_command_rejected_and_recorded() {
        let mut f = Fixture::new();
        assert_eq!(f.submit("ls"), Submission::Settled(Settlement::Rejected));
        match f.last_data() {
            Some(OutputData::Error(block)) => {
                assert_eq!(block.message, "command 'ls' is not supported");
            }
            other => panic!("Expected error, got {other:?}"),
        }
        assert_eq!(f.history.entries(), ["ls"]);
    }

    #[test]
    fn test_unknown_flag_never_starts_request() {
        let mut f = Fixture::new();
        assert_eq!(
            f.submit("projects -u"),
            Submission::Settled(Settlement::Rejected)
        );
        assert_eq!(f.dispatcher.lifecycle(), Lifecycle::Idle);
        match f.last_data() {
            Some(OutputData::Error(block)) => {
                assert_eq!(block.message, "unexpected flag: -u");
                assert!(block.usage.is_some());
            }
            other => panic!("Expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_clear_truncates_and_hides_banner() {
        let mut f = Fixture::new();
        f.submit("echo one");
        f.submit("echo two");
        f.submit("clear");
        assert!(f.output.is_empty());
        assert!(!f.banner_visible);
        f.submit("help");
        assert!(!f.banner_visible);
        assert_eq!(f.output.len(), 1);
    }

    #[test]
    fn test_fetch_renders_profile_without_loading_step() {
        let mut f = Fixture::new();
        assert_eq!(f.submit("fetch"), Submission::Settled(Settlement::Succeeded));
        assert_eq!(f.output.len(), 1);
        match f.last_data() {
            Some(OutputData::Profile(card)) => {
                assert_eq!(card.github.label, "github.com/octo");
            }
            other => panic!("Expected profile card, got {other:?}"),
        }
        assert!(f.output.iter().all(|e| e.data != Some(OutputData::Loading)));
        assert_eq!(f.dispatcher.lifecycle(), Lifecycle::Idle);
    }

    #[test]
    fn test_projects_runs_with_loading_entry() {
        let mut f = Fixture::new();
        let request = f.running("projects");
        assert_eq!(request.url, "https://api.github.com/users/octo/repos");
        assert_eq!(request.format, ProjectFormat::Table);
        assert!(f.dispatcher.is_busy());
        assert_eq!(f.last_data(), Some(&OutputData::Loading));
        assert_eq!(f.dispatcher.last_settlement(), None);
    }

    #[test]
    fn test_busy_refuses_submission() {
        let mut f = Fixture::new();
        f.running("projects");
        assert_eq!(f.submit("echo hi"), Submission::Busy);
        assert_eq!(f.output.len(), 1);
        assert_eq!(f.history.len(), 1);
    }

    #[test]
    fn test_settle_success_replaces_loading_in_place() {
        let mut f = Fixture::new();
        f.submit("echo before");
        let request = f.running("projects");
        assert!(f.settle(request.ticket, Ok(vec![repo("one")])));

        assert_eq!(f.output.len(), 2);
        match f.last_data() {
            Some(OutputData::Projects(rows)) => {
                let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, ["one", "alpha", "beta"]);
                assert!(rows[1].in_progress && rows[2].in_progress);
            }
            other => panic!("Expected projects, got {other:?}"),
        }
        assert_eq!(f.dispatcher.lifecycle(), Lifecycle::Idle);
        assert_eq!(f.dispatcher.last_settlement(), Some(Settlement::Succeeded));
    }

    #[test]
    fn test_settle_json_format() {
        let mut f = Fixture::new();
        let request = f.running("projects --json");
        assert!(f.settle(request.ticket, Ok(vec![repo("one")])));
        match f.last_data() {
            Some(OutputData::Json(json)) => {
                let value: serde_json::Value = serde_json::from_str(json).unwrap();
                assert_eq!(value.as_array().unwrap().len(), 3);
                assert_eq!(value[2]["in_progress"], true);
            }
            other => panic!("Expected json, got {other:?}"),
        }
    }

    #[test]
    fn test_settle_failure_and_timeout() {
        for (err, expected) in [
            (FetchError::Network("aborted".into()), Settlement::Failed),
            (FetchError::Http(500), Settlement::Failed),
            (FetchError::Timeout, Settlement::TimedOut),
        ] {
            let mut f = Fixture::new();
            let request = f.running("projects");
            assert!(f.settle(request.ticket, Err(err)));
            assert_eq!(f.output.len(), 1);
            assert_eq!(
                f.last_data(),
                Some(&OutputData::Error(ErrorBlock::transport()))
            );
            assert_eq!(f.dispatcher.last_settlement(), Some(expected));
        }
    }

    #[test]
    fn test_stale_completion_discarded() {
        let mut f = Fixture::new();
        let request = f.running("projects");
        assert!(f.settle(request.ticket, Err(FetchError::Timeout)));

        // The request finishing after the timeout changes nothing.
        assert!(!f.settle(request.ticket, Ok(vec![repo("late")])));
        assert_eq!(
            f.last_data(),
            Some(&OutputData::Error(ErrorBlock::transport()))
        );

        // Nor does it touch a newer request's entry.
        let second = f.running("projects");
        assert_ne!(second.ticket, request.ticket);
        assert!(!f.settle(request.ticket, Ok(vec![])));
        assert_eq!(f.last_data(), Some(&OutputData::Loading));
    }

    #[test]
    fn test_allow_list_filters_live_repos() {
        let mut f = Fixture::new();
        f.profile.github.repos = vec!["keep".to_string()];
        let request = f.running("projects");
        f.settle(request.ticket, Ok(vec![repo("keep"), repo("drop")]));
        match f.last_data() {
            Some(OutputData::Projects(rows)) => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[0].name, "keep");
            }
            other => panic!("Expected projects, got {other:?}"),
        }
    }
}
