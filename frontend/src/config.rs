use log::Level;

const DEFAULT_FORM_ENDPOINT: &str = "https://forminit.com/f/gsit32ht1ex";

/// Pixels subtracted from a section's top so it lands below the fixed nav bar.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// Vertical offset after which the nav bar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 30.0;

pub const LOADING_SHOW_MS: u32 = 1_800;
pub const LOADING_FADE_MS: u32 = 600;

pub const COUNTER_DURATION_MS: u32 = 2_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const BRAND_GREEN: &str = "#9DA352";
pub const BRAND_GREY: &str = "#9A9A9A";

/// Intake endpoint for the pilot form. Can be pointed elsewhere at build time
/// with `H2_FORM_ENDPOINT`.
pub fn get_form_endpoint() -> &'static str {
    option_env!("H2_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
