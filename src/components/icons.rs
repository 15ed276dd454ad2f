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
    pub use icondata::{
        LuCheck as Check, LuCircleAlert as Alert, LuExternalLink as ExternalLink,
        LuGithub as Github, LuGlobe as Network, LuLoaderCircle as Loader, LuMoon as Moon,
        LuSun as Sun, LuWallet as Wallet,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Loader, BsBoxArrowUpRight as ExternalLink, BsCheckLg as Check,
        BsExclamationCircle as Alert, BsGithub as Github, BsGlobe as Network, BsMoon as Moon,
        BsSun as Sun, BsWallet2 as Wallet,
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

themed_icon!(WALLET, Wallet);
themed_icon!(LOADER, Loader);
themed_icon!(NETWORK, Network);
themed_icon!(ALERT, Alert);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(GITHUB, Github);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(CHECK, Check);
