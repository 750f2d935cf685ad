//! Interpreter session: the single owned context behind one terminal.
//!
//! Holds the input buffer, history, theme, output log and dispatcher, and
//! turns key events into mutations of them. The suggestion is recomputed
//! after every change to the buffer or history, so it always describes the
//! text currently on screen.

use crate::core::autocomplete::{Suggestion, suggest};
use crate::core::buffer::LineBuffer;
use crate::core::commands::{CommandRegistry, TokenClass, classify_first_token};
use crate::core::dispatcher::{
    DispatchContext, Dispatcher, Lifecycle, Settlement, Submission, Ticket,
};
use crate::core::error::FetchError;
use crate::core::history::HistoryStore;
use crate::core::theme::{Theme, ThemeManager};
use crate::models::{OutputLog, Profile, Repository};

/// A key event the interpreter reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Recall an older history entry
    Up,
    /// Recall a newer history entry
    Down,
    /// Accept the suggestion
    Tab,
    Enter,
    /// Ctrl+L
    ClearScreen,
    /// Ctrl+C
    ClearInput,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value. Unhandled keys return `None` and
    /// are left to the browser.
    pub fn from_dom(key: &str, ctrl: bool) -> Option<Self> {
        if ctrl {
            return match key {
                "l" | "L" => Some(Self::ClearScreen),
                "c" | "C" => Some(Self::ClearInput),
                _ => None,
            };
        }
        match key {
            "Backspace" => Some(Self::Backspace),
            "Delete" => Some(Self::Delete),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "Tab" => Some(Self::Tab),
            "Enter" => Some(Self::Enter),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Self::Char(ch)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    profile: Profile,
    buffer: LineBuffer,
    history: HistoryStore,
    theme: ThemeManager,
    output: OutputLog,
    dispatcher: Dispatcher,
    suggestion: Option<Suggestion>,
    banner_visible: bool,
}

impl Session {
    pub fn new(profile: Profile) -> Self {
        Self::with_theme(profile, Theme::default())
    }

    pub fn with_theme(profile: Profile, theme: Theme) -> Self {
        Self {
            profile,
            buffer: LineBuffer::new(),
            history: HistoryStore::new(),
            theme: ThemeManager::new(theme),
            output: OutputLog::new(),
            dispatcher: Dispatcher::new(CommandRegistry::builtin()),
            suggestion: None,
            banner_visible: true,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestion.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    pub fn is_busy(&self) -> bool {
        self.dispatcher.is_busy()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.dispatcher.lifecycle()
    }

    pub fn last_settlement(&self) -> Option<Settlement> {
        self.dispatcher.last_settlement()
    }

    pub fn prompt(&self) -> String {
        self.profile.prompt()
    }

    /// Live validity of the command name being typed.
    pub fn first_token_class(&self) -> TokenClass {
        classify_first_token(self.buffer.text())
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Applies one key event. Returns the submission outcome for `Enter` and
    /// `ClearScreen`, `None` for pure editing keys.
    pub fn handle_key(&mut self, key: Key) -> Option<Submission> {
        match key {
            Key::Char(ch) => {
                self.buffer.insert(ch);
                self.history.reset_recall();
            }
            Key::Backspace => {
                if self.buffer.delete_backward() {
                    self.history.reset_recall();
                }
            }
            Key::Delete => {
                if self.buffer.delete_forward() {
                    self.history.reset_recall();
                }
            }
            Key::Left => self.buffer.move_left(),
            Key::Right => self.buffer.move_right(),
            Key::Home => self.buffer.move_home(),
            Key::End => self.buffer.move_end(),
            Key::Up => {
                if let Some(text) = self.history.recall_previous() {
                    self.buffer.set_text(text, true);
                }
            }
            Key::Down => {
                if let Some(text) = self.history.recall_next() {
                    self.buffer.set_text(text, true);
                }
            }
            Key::Tab => {
                if let Some(suggestion) = self.suggestion.take() {
                    self.buffer.set_text(suggestion.accepted(), true);
                    self.history.reset_recall();
                }
            }
            Key::ClearInput => {
                self.buffer.clear();
                self.history.reset_recall();
            }
            Key::Enter => return Some(self.submit()),
            Key::ClearScreen => return Some(self.clear_screen()),
        }
        self.refresh_suggestion();
        None
    }

    /// Inserts pasted or composed text at the cursor.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.buffer.insert_str(text);
        self.history.reset_recall();
        self.refresh_suggestion();
    }

    /// Submits the buffer. The buffer is cleared whatever the outcome, unless
    /// the session is busy.
    pub fn submit(&mut self) -> Submission {
        if self.dispatcher.is_busy() {
            return Submission::Busy;
        }
        let line = self.buffer.text().to_string();
        let prompt = self.profile.prompt();
        self.buffer.clear();

        let ctx = DispatchContext {
            history: &mut self.history,
            output: &mut self.output,
            theme: &mut self.theme,
            profile: &self.profile,
            banner_visible: &mut self.banner_visible,
        };
        let submission = self.dispatcher.submit(&line, &prompt, ctx);
        self.refresh_suggestion();
        submission
    }

    /// Reports the outcome of a [`ProjectsRequest`](crate::core::ProjectsRequest).
    /// Returns `false` when the completion is stale and was discarded.
    pub fn settle(&mut self, ticket: Ticket, result: Result<Vec<Repository>, FetchError>) -> bool {
        self.dispatcher
            .settle(ticket, result, &mut self.output, &self.profile)
    }

    /// Ctrl+L: same effect as `clear`, without touching the input or history.
    fn clear_screen(&mut self) -> Submission {
        if self.dispatcher.is_busy() {
            return Submission::Busy;
        }
        self.output.clear();
        self.banner_visible = false;
        Submission::Settled(Settlement::Settled)
    }

    fn refresh_suggestion(&mut self) {
        self.suggestion = suggest(
            self.buffer.text(),
            self.dispatcher.registry(),
            self.history.entries(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputData;

    fn session() -> Session {
        let mut profile = Profile::default();
        profile.prompt.username = "guest".to_string();
        profile.prompt.hostname = "web".to_string();
        profile.github.username = "octo".to_string();
        Session::new(profile)
    }

    fn type_str(s: &mut Session, text: &str) {
        for ch in text.chars() {
            s.handle_key(Key::Char(ch));
        }
    }

    fn run(s: &mut Session, line: &str) -> Submission {
        type_str(s, line);
        s.handle_key(Key::Enter).unwrap()
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("a", false), Some(Key::Char('a')));
        assert_eq!(Key::from_dom(" ", false), Some(Key::Char(' ')));
        assert_eq!(Key::from_dom("ArrowUp", false), Some(Key::Up));
        assert_eq!(Key::from_dom("l", true), Some(Key::ClearScreen));
        assert_eq!(Key::from_dom("c", true), Some(Key::ClearInput));
        assert_eq!(Key::from_dom("v", true), None);
        assert_eq!(Key::from_dom("Shift", false), None);
        assert_eq!(Key::from_dom("F5", false), None);
    }

    #[test]
    fn test_prompt() {
        assert_eq!(session().prompt(), "guest@web:~$");
    }

    #[test]
    fn test_enter_clears_buffer_even_when_rejected() {
        let mut s = session();
        assert_eq!(run(&mut s, "nope"), Submission::Settled(Settlement::Rejected));
        assert!(s.buffer().is_empty());
        assert_eq!(s.buffer().cursor(), 0);
    }

    #[test]
    fn test_history_recall_collapses_adjacent_duplicates() {
        let mut s = session();
        for line in ["echo hello", "clear", "clear", "help"] {
            run(&mut s, line);
        }
        let mut seen = Vec::new();
        for _ in 0..4 {
            s.handle_key(Key::Up);
            seen.push(s.buffer().text().to_string());
            assert_eq!(s.buffer().cursor(), s.buffer().len());
        }
        assert_eq!(seen, ["help", "clear", "echo hello", "echo hello"]);
    }

    #[test]
    fn test_down_past_newest_restores_empty_input() {
        let mut s = session();
        run(&mut s, "echo a");
        s.handle_key(Key::Up);
        assert_eq!(s.buffer().text(), "echo a");
        s.handle_key(Key::Down);
        assert_eq!(s.buffer().text(), "");
        assert_eq!(s.history().recall_index(), None);
    }

    #[test]
    fn test_edit_resets_recall() {
        let mut s = session();
        run(&mut s, "echo a");
        run(&mut s, "echo b");
        s.handle_key(Key::Up);
        s.handle_key(Key::Char('!'));
        assert_eq!(s.history().recall_index(), None);
        s.handle_key(Key::Up);
        assert_eq!(s.buffer().text(), "echo b");
    }

    #[test]
    fn test_tab_accepts_history_suggestion() {
        let mut s = session();
        run(&mut s, "echo hello world");
        type_str(&mut s, "echo hello");
        assert_eq!(s.suggestion().map(|x| x.continuation.as_str()), Some(" world"));
        s.handle_key(Key::Tab);
        assert_eq!(s.buffer().text(), "echo hello world");
        assert_eq!(s.buffer().cursor(), s.buffer().len());
        assert_eq!(s.suggestion(), None);
    }

    #[test]
    fn test_tab_without_suggestion_is_noop() {
        let mut s = session();
        type_str(&mut s, "xyz");
        s.handle_key(Key::Tab);
        assert_eq!(s.buffer().text(), "xyz");
    }

    #[test]
    fn test_suggestion_tracks_every_mutation() {
        let mut s = session();
        type_str(&mut s, "he");
        assert_eq!(s.suggestion().map(|x| x.continuation.as_str()), Some("lp"));
        s.handle_key(Key::Backspace);
        s.handle_key(Key::Backspace);
        assert_eq!(s.suggestion(), None);
        s.insert_text("the");
        assert_eq!(s.suggestion().map(|x| x.continuation.as_str()), Some("me"));
    }

    #[test]
    fn test_suggestion_cleared_after_submit() {
        let mut s = session();
        type_str(&mut s, "he");
        s.handle_key(Key::Enter);
        assert_eq!(s.suggestion(), None);
    }

    #[test]
    fn test_ctrl_c_clears_input_only() {
        let mut s = session();
        run(&mut s, "echo keep");
        type_str(&mut s, "echo discard");
        assert_eq!(s.handle_key(Key::ClearInput), None);
        assert!(s.buffer().is_empty());
        assert_eq!(s.output().len(), 1);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_ctrl_l_matches_clear_command() {
        let mut a = session();
        let mut b = session();
        for s in [&mut a, &mut b] {
            run(s, "echo one");
        }
        run(&mut a, "clear");
        type_str(&mut b, "echo draft");
        b.handle_key(Key::ClearScreen);

        for s in [&a, &b] {
            assert!(s.output().is_empty());
            assert!(!s.banner_visible());
        }
        // Ctrl+L keeps the draft and does not record history
        assert_eq!(b.buffer().text(), "echo draft");
        assert_eq!(b.history().len(), 1);
    }

    #[test]
    fn test_banner_stays_hidden() {
        let mut s = session();
        assert!(s.banner_visible());
        run(&mut s, "clear");
        run(&mut s, "echo x");
        run(&mut s, "help");
        assert!(!s.banner_visible());
    }

    #[test]
    fn test_echo_without_args_is_one_empty_entry() {
        let mut s = session();
        run(&mut s, "echo");
        assert_eq!(s.output().len(), 1);
        assert_eq!(s.output().last().unwrap().data, Some(OutputData::Empty));
    }

    #[test]
    fn test_busy_keeps_buffer_and_allows_editing() {
        let mut s = session();
        let Submission::Running(request) = run(&mut s, "projects") else {
            panic!("Expected running submission");
        };
        type_str(&mut s, "echo next");
        assert_eq!(s.handle_key(Key::Enter), Some(Submission::Busy));
        assert_eq!(s.handle_key(Key::ClearScreen), Some(Submission::Busy));
        assert_eq!(s.buffer().text(), "echo next");
        assert_eq!(s.output().len(), 1);

        assert!(s.settle(request.ticket, Err(FetchError::Timeout)));
        assert_eq!(s.lifecycle(), Lifecycle::Idle);
        assert_eq!(s.last_settlement(), Some(Settlement::TimedOut));
        assert_eq!(
            s.handle_key(Key::Enter),
            Some(Submission::Settled(Settlement::Settled))
        );
    }

    #[test]
    fn test_theme_command_changes_session_theme() {
        let mut s = Session::with_theme(Profile::default(), Theme::Dracula);
        run(&mut s, "theme");
        assert_ne!(s.theme(), Theme::Dracula);
        run(&mut s, "theme nord");
        assert_eq!(s.theme(), Theme::Nord);
    }

    #[test]
    fn test_first_token_class() {
        let mut s = session();
        assert_eq!(s.first_token_class(), TokenClass::Fail);
        type_str(&mut s, "the");
        assert_eq!(s.first_token_class(), TokenClass::Fail);
        type_str(&mut s, "me");
        assert_eq!(s.first_token_class(), TokenClass::Pass);
    }

    #[test]
    fn test_cursor_invariant_under_mixed_keys() {
        let mut s = session();
        run(&mut s, "echo history");
        let keys = [
            Key::Char('a'),
            Key::Left,
            Key::Left,
            Key::Home,
            Key::Delete,
            Key::Backspace,
            Key::End,
            Key::Right,
            Key::Up,
            Key::Left,
            Key::Char('z'),
            Key::Down,
            Key::Tab,
            Key::ClearInput,
            Key::Backspace,
        ];
        for key in keys {
            s.handle_key(key);
            assert!(s.buffer().cursor() <= s.buffer().len());
        }
    }
}
