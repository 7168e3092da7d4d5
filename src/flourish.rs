//! Cosmetic effects: card tilt, staggered delays, the hero typewriter, the
//! hidden key combo, and console branding.

#[cfg(test)]
#[path = "flourish_test.rs"]
mod flourish_test;

use crate::consts::{STAGGER_STEP_S, TILT_DIVISOR};

// ── Card tilt ───────────────────────────────────────────────────

/// CSS transform tilting a card toward the pointer.
///
/// `x`/`y` are the pointer position relative to the card's top-left corner.
#[must_use]
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let rotate_x = (y - height / 2.0) / TILT_DIVISOR;
    let rotate_y = (width / 2.0 - x) / TILT_DIVISOR;
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateY(-8px)")
}

// ── Stagger ─────────────────────────────────────────────────────

/// `animation-delay` value for the card at `index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delay(index: usize) -> String {
    let seconds = (index as f64 * STAGGER_STEP_S * 10.0).round() / 10.0;
    format!("{seconds}s")
}

// ── Typewriter ──────────────────────────────────────────────────

/// Reveals a fixed text one character at a time.
#[derive(Clone, Debug, Default)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), shown: 0 }
    }

    /// Reveal one more character and return the visible prefix, or `None`
    /// once the whole text is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

// ── Key combo ───────────────────────────────────────────────────

pub const KEY_COMBO: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Tracks progress through [`KEY_COMBO`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyCombo {
    progress: usize,
}

impl KeyCombo {
    /// Feed one key. Returns `true` when the combo completes; progress then
    /// restarts. Any wrong key resets progress to zero.
    pub fn push(&mut self, key: &str) -> bool {
        if KEY_COMBO.get(self.progress) == Some(&key) {
            self.progress += 1;
            if self.progress == KEY_COMBO.len() {
                self.progress = 0;
                return true;
            }
        } else {
            self.progress = 0;
        }
        false
    }

    #[must_use]
    pub fn progress(self) -> usize {
        self.progress
    }
}

pub const EASTER_EGG_HTML: &str = "\u{1F389} You found the secret! \u{1F389}<br>\
    <small style=\"font-size: 1rem;\">You're a true developer!</small>";

pub const EASTER_EGG_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); \
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; \
    padding: 2rem 3rem; border-radius: 1rem; font-size: 1.5rem; font-weight: bold; \
    z-index: 10000; box-shadow: 0 20px 60px rgba(0,0,0,0.3); \
    animation: fadeInUp 0.5s ease-out;";

pub const EASTER_EGG_FADE_ANIMATION: &str = "fadeOut 0.5s ease-out";

// ── Console branding ────────────────────────────────────────────

/// `(text, css)` pairs printed to the console at startup.
pub const CONSOLE_BRANDING: [(&str, &str); 3] = [
    ("%c Folio", "font-size: 20px; font-weight: bold; color: #4A90E2;"),
    ("%cLove the code? Let's connect.", "font-size: 14px; color: #666;"),
    ("%cBuilt with Rust and WebAssembly", "font-size: 12px; color: #999;"),
];
