use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose panel/animation tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Height of the fixed navigation bar, including its top padding.
pub const NAV_HEIGHT: f64 = 112.0;
/// Gap between the navigation bar and a floating panel.
pub const PANEL_GAP: f64 = 16.0;
/// Distance between a hotspot marker and the top of its popover.
pub const HOTSPOT_GAP: f64 = 20.0;

/// Fraction of the viewport height the top edge of a section has to cross.
pub const REVEAL_START: f64 = 0.8;

pub const PARALLAX_BACKGROUND: f64 = 0.4;
pub const PARALLAX_FOREGROUND: f64 = 0.15;

/// How long a hover-opened panel survives after the pointer left its trigger.
pub const HOVER_CLOSE_GRACE_MS: u32 = 120;

pub const BRAND_BACKGROUND: &str = "#3C4433";
