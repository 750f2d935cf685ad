use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Profile Document
// =============================================================================

/// Personal profile read from `config.toml`.
///
/// Read-only for the lifetime of a session: it feeds the prompt, the `fetch`
/// card and the `projects` request.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub title: String,
    pub name: String,
    pub email: String,
    pub prompt: PromptConfig,
    pub github: Github,
    pub linkedin: Linkedin,
}

impl Profile {
    /// Parses a TOML profile document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Prompt shown before the input line, e.g. `guest@host:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.prompt.username, self.prompt.hostname)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptConfig {
    pub username: String,
    pub hostname: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Github {
    pub username: String,
    /// Repository names to show; empty shows everything the API returns.
    #[serde(default)]
    pub repos: Vec<String>,
    #[serde(default)]
    pub in_progress: Vec<InProgress>,
}

impl Github {
    pub fn url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }

    pub fn short_url(&self) -> String {
        format!("github.com/{}", self.username)
    }

    /// Repository listing endpoint under the given API base.
    pub fn api_url(&self, base: &str) -> String {
        format!("{}/users/{}/repos", base.trim_end_matches('/'), self.username)
    }
}

/// Unpublished project listed alongside the live repositories.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InProgress {
    pub name: String,
    pub description: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Linkedin {
    pub username: String,
}

impl Linkedin {
    pub fn url(&self) -> String {
        format!("https://linkedin.com/in/{}", self.username)
    }

    pub fn short_url(&self) -> String {
        format!("linkedin.com/in/{}", self.username)
    }
}

// =============================================================================
// Profile Card (`fetch` output)
// =============================================================================

/// A labelled hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Personal-info summary rendered by `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub email: Link,
    pub github: Link,
    pub linkedin: Link,
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: Link {
                label: profile.email.clone(),
                href: format!("mailto:{}", profile.email),
            },
            github: Link {
                label: profile.github.short_url(),
                href: profile.github.url(),
            },
            linkedin: Link {
                label: profile.linkedin.short_url(),
                href: profile.linkedin.url(),
            },
        }
    }
}
