//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    // Lucide has no brand marks; borrow the Bootstrap ones.
    pub use icondata::{
        BsGithub as Github, BsLinkedin as Linkedin, LuHourglass as InProgress, LuMail as Email,
        LuStar as Star, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsEnvelope as Email, BsGithub as Github, BsHourglassSplit as InProgress,
        BsLinkedin as Linkedin, BsPerson as User, BsStar as Star,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(USER, User);
themed_icon!(EMAIL, Email);
themed_icon!(GITHUB, Github);
themed_icon!(LINKEDIN, Linkedin);
themed_icon!(STAR, Star);
themed_icon!(IN_PROGRESS, InProgress);
