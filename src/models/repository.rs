use serde::{Deserialize, Serialize};

use super::InProgress;

/// A project row: either a live GitHub repository or an in-progress placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub html_url: Option<String>,
    /// GitHub sends `null` for repositories without a description.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(skip_deserializing)]
    pub in_progress: bool,
}

impl Repository {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or_default()
    }
}

impl From<&InProgress> for Repository {
    fn from(item: &InProgress) -> Self {
        Self {
            name: item.name.clone(),
            html_url: None,
            description: Some(item.description.clone()),
            stargazers_count: None,
            in_progress: true,
        }
    }
}

/// Combines the API response with the configured in-progress placeholders.
///
/// A non-empty `allow` list keeps only the named repositories. Placeholders
/// always come last.
pub fn merge_projects(
    live: Vec<Repository>,
    allow: &[String],
    in_progress: &[InProgress],
) -> Vec<Repository> {
    live.into_iter()
        .filter(|r| allow.is_empty() || allow.contains(&r.name))
        .chain(in_progress.iter().map(Repository::from))
        .collect()
}
