//! Color theme selection.
//!
//! The theme set is closed: eleven named themes, addressed by their
//! kebab-case name. The view keys its palette off [`Theme::as_str`]; the
//! interpreter itself never reads the current theme.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::error::CommandError;

/// One of the fixed color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Catppuccin,
    Dracula,
    Everforest,
    GithubDark,
    GithubLight,
    Houston,
    Kanagawa,
    Nord,
    Precious,
    RosePine,
    TokyoNight,
}

impl Theme {
    /// Every theme, in listing order.
    pub const ALL: [Theme; 11] = [
        Self::Catppuccin,
        Self::Dracula,
        Self::Everforest,
        Self::GithubDark,
        Self::GithubLight,
        Self::Houston,
        Self::Kanagawa,
        Self::Nord,
        Self::Precious,
        Self::RosePine,
        Self::TokyoNight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catppuccin => "catppuccin",
            Self::Dracula => "dracula",
            Self::Everforest => "everforest",
            Self::GithubDark => "github-dark",
            Self::GithubLight => "github-light",
            Self::Houston => "houston",
            Self::Kanagawa => "kanagawa",
            Self::Nord => "nord",
            Self::Precious => "precious",
            Self::RosePine => "rose-pine",
            Self::TokyoNight => "tokyo-night",
        }
    }

    /// All theme names, in listing order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }

    /// `available themes: a, b, ...` line shared by `theme --list` and errors.
    pub fn listing() -> String {
        format!("available themes: {}", Self::names().join(", "))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CommandError::UnknownTheme(s.to_string()))
    }
}

/// Owns the session's current theme.
#[derive(Clone, Debug, Default)]
pub struct ThemeManager {
    current: Theme,
}

impl ThemeManager {
    pub fn new(initial: Theme) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Selects a theme by name, or a random different one when `name` is `None`.
    pub fn select(&mut self, name: Option<&str>) -> Result<Theme, CommandError> {
        self.select_with(name, &mut rand::thread_rng())
    }

    /// [`select`](Self::select) with an explicit random source.
    pub fn select_with<R: Rng + ?Sized>(
        &mut self,
        name: Option<&str>,
        rng: &mut R,
    ) -> Result<Theme, CommandError> {
        let selected = match name {
            Some(name) => name.parse()?,
            None => self.random_except_current(rng),
        };
        log::info!("theme changed: {} -> {}", self.current, selected);
        self.current = selected;
        Ok(selected)
    }

    fn random_except_current<R: Rng + ?Sized>(&self, rng: &mut R) -> Theme {
        let others: Vec<Theme> = Theme::ALL
            .into_iter()
            .filter(|t| *t != self.current)
            .collect();
        // Eleven themes, so `others` always has ten candidates.
        others.choose(rng).copied().unwrap_or(self.current)
    }
}
