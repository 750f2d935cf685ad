//! Repository listing request with timeout support.
//!
//! The request and a timer race as two futures; whichever finishes first
//! decides the outcome and the other is dropped unpolled. Transport and timer
//! sit behind [`RepoSource`] and [`Timer`] so the race runs on a virtual clock
//! in tests.

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::Request;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::models::Repository;

// =============================================================================
// Racing Utilities
// =============================================================================

/// Result of a future raced against a timeout.
#[derive(Debug, PartialEq, Eq)]
pub enum RaceResult<T> {
    /// The future completed before the timeout.
    Completed(T),
    /// The timeout fired first.
    TimedOut,
}

/// Race `future` against `timeout`. The loser is dropped.
pub async fn race_with_timeout<F, T>(future: F, timeout: T) -> RaceResult<F::Output>
where
    F: Future,
    T: Future<Output = ()>,
{
    let future = pin!(future);
    let timeout = pin!(timeout);
    match select(future, timeout).await {
        Either::Left((output, _)) => RaceResult::Completed(output),
        Either::Right(((), _)) => RaceResult::TimedOut,
    }
}

// =============================================================================
// Collaborators
// =============================================================================

/// Something that can list repositories for a URL.
pub trait RepoSource {
    fn list(&self, url: &str) -> impl Future<Output = Result<Vec<Repository>, FetchError>>;
}

/// Something that can wait.
pub trait Timer {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// GitHub REST client over the browser Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GithubClient;

impl RepoSource for GithubClient {
    async fn list(&self, url: &str) -> Result<Vec<Repository>, FetchError> {
        let response = Request::get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Http(response.status()));
        }

        response
            .json::<Vec<Repository>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// `setTimeout`-backed timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Load the repository listing, giving up after [`FETCH_TIMEOUT_MS`].
pub async fn load_projects<S, T>(
    source: &S,
    timer: &T,
    url: &str,
) -> Result<Vec<Repository>, FetchError>
where
    S: RepoSource,
    T: Timer,
{
    match race_with_timeout(source.list(url), timer.sleep(FETCH_TIMEOUT_MS)).await {
        RaceResult::Completed(result) => result,
        RaceResult::TimedOut => Err(FetchError::Timeout),
    }
}
