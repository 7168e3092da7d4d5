//! Shared constants for the page controller.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Scroll thresholds ───────────────────────────────────────────

/// Page offset (px) past which the navbar gets its shadow.
pub const NAVBAR_SHADOW_THRESHOLD_PX: f64 = 50.0;

/// Page offset (px) past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Extra lead (px) subtracted from a section's top when highlighting nav links.
pub const SECTION_LEAD_PX: f64 = 100.0;

// ── Timers (ms) ─────────────────────────────────────────────────

pub const SCROLL_DEBOUNCE_MS: u32 = 10;
pub const THEME_SPIN_MS: u32 = 300;
pub const FORM_SUCCESS_MS: u32 = 5_000;
pub const RESUME_FEEDBACK_MS: u32 = 2_000;
pub const TYPING_START_DELAY_MS: u32 = 500;
pub const TYPING_CHAR_MS: u32 = 100;
pub const EASTER_EGG_VISIBLE_MS: u32 = 3_000;
pub const EASTER_EGG_FADE_MS: u32 = 500;
pub const IMAGE_FADE_DELAY_MS: u32 = 50;

// ── Scroll reveal ───────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; the negative bottom edge delays reveal slightly.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Cosmetics ───────────────────────────────────────────────────

/// Divisor applied to the pointer offset from card center, in degrees per px.
pub const TILT_DIVISOR: f64 = 20.0;

/// Seconds between consecutive skill-card animation starts.
pub const STAGGER_STEP_S: f64 = 0.1;

// ── CSS classes ─────────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_FADE_IN: &str = "fade-in";

pub const ICON_MOON: &str = "fa-moon";
pub const ICON_SUN: &str = "fa-sun";
pub const ICON_BARS: &str = "fa-bars";
pub const ICON_TIMES: &str = "fa-times";

/// Background shown on the resume button while it confirms a download.
pub const RESUME_CONFIRM_COLOR: &str = "#28a745";

/// Label shown on the resume button while it confirms a download.
pub const RESUME_CONFIRM_LABEL: &str = r#"<i class="fas fa-check"></i> Downloaded!"#;
