//! Browser terminal portfolio.
//!
//! - [`core`] - Line editing, history, completion and command dispatch
//! - [`models`] - Output entries, profile and repository data
//! - [`components`] - Leptos views over the session
//! - [`utils`] - Browser glue: fetch with timeout, DOM helpers, console logger

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
