//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`terminal`] - Terminal emulator interface

pub mod icons;
pub mod terminal;
