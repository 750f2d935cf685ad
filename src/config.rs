//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets and the profile document are loaded at compile time using
//! `include_str!`.

use crate::core::error::ConfigError;
use crate::models::Profile;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner displayed above the first prompt.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Profile document (`config.toml` at the crate root).
pub const PROFILE_TOML: &str = include_str!("../config.toml");

/// Parse the embedded profile document.
pub fn load_profile() -> Result<Profile, ConfigError> {
    Profile::from_toml(PROFILE_TOML)
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Application version shown in the banner.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Repository request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 5000;

/// GitHub REST API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of output entries kept on screen.
pub const MAX_OUTPUT_ENTRIES: usize = 500;

/// Narrowest viewport (px) that renders `projects` as a table.
pub const WIDE_LAYOUT_MIN_WIDTH: u32 = 1024;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
