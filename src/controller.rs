//! Page state machine.
//!
//! `PageController` owns every piece of UI state on the page and never touches
//! the DOM. Each handler returns the [`Effect`]s the browser host must apply,
//! which keeps the whole interaction model testable natively.
//!
//! TIMERS
//! ======
//! Deferred work is requested with [`Effect::Schedule`]. Each [`TimerKind`]
//! has at most one live [`TimerTicket`]; scheduling again supersedes the old
//! ticket, and a superseded ticket is ignored by [`PageController::on_timer`]
//! even if the host fails to cancel it.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::HashMap;

use crate::consts::{
    EASTER_EGG_FADE_MS, EASTER_EGG_VISIBLE_MS, FORM_SUCCESS_MS, RESUME_FEEDBACK_MS, SCROLL_DEBOUNCE_MS,
    THEME_SPIN_MS, TYPING_CHAR_MS, TYPING_START_DELAY_MS,
};
use crate::contact::{ContactForm, FormPhase};
use crate::flourish::{KeyCombo, Typewriter};
use crate::nav::{self, MenuState, ScrollSnapshot};
use crate::profile::Profile;
use crate::resume;
use crate::reveal::RevealTracker;
use crate::theme::{self, PreferenceStore, Theme};

/// Deferred actions the controller can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Scroll events have gone quiet; measure the page.
    ScrollSettle,
    ThemeSpinReset,
    FormReset,
    ResumeFeedbackReset,
    TypingTick,
    EasterEggFade,
    EasterEggRemove,
}

/// One scheduled deferral. Only the latest ticket per kind is honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    pub kind: TimerKind,
    pub seq: u64,
}

/// DOM work requested by the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Set `data-theme` on `<html>` and swap the toggle icon.
    ApplyTheme(Theme),
    /// Start (`true`) or clear (`false`) the toggle's rotation.
    SpinThemeToggle(bool),
    /// Open/close the mobile menu, swap its icon, lock/unlock body scroll.
    SetMenuOpen(bool),
    SetNavbarScrolled(bool),
    SetScrollTopVisible(bool),
    /// Mark the nav link for this section active and clear all others.
    HighlightSection(Option<String>),
    /// Measure a [`ScrollSnapshot`] and pass it to [`PageController::apply_scroll`].
    MeasureScroll,
    /// Blocking alert with this message.
    Alert(String),
    /// Hide the contact form and show the success banner.
    ShowFormSuccess,
    /// Clear and show the contact form, hide the success banner.
    ResetForm,
    DownloadResume {
        file_name: &'static str,
        contents: String,
    },
    /// Show (`true`) or restore (`false`) the resume button's confirmation.
    SetResumeFeedback(bool),
    /// Mark the observed element at this index active and stop observing it.
    Reveal(usize),
    /// Replace the hero role text.
    SetHeroRole(String),
    ShowEasterEgg,
    FadeEasterEgg,
    RemoveEasterEgg,
    Schedule {
        ticket: TimerTicket,
        delay_ms: u32,
    },
}

/// Navbar, scroll-top and highlight state derived from one measurement.
#[derive(Clone, Debug, PartialEq)]
struct ScrollView {
    navbar_scrolled: bool,
    scroll_top_visible: bool,
    active_section: Option<String>,
}

/// UI state for one page load.
pub struct PageController<S: PreferenceStore> {
    store: S,
    profile: Profile,
    theme: Theme,
    menu: MenuState,
    /// Last applied scroll measurement; `None` until the first one.
    scroll: Option<ScrollView>,
    form: FormPhase,
    resume_feedback: bool,
    reveal: RevealTracker,
    typewriter: Option<Typewriter>,
    combo: KeyCombo,
    timers: HashMap<TimerKind, u64>,
    next_seq: u64,
}

impl<S: PreferenceStore> PageController<S> {
    #[must_use]
    pub fn new(store: S, profile: Profile) -> Self {
        Self {
            store,
            profile,
            theme: Theme::default(),
            menu: MenuState::default(),
            scroll: None,
            form: FormPhase::default(),
            resume_feedback: false,
            reveal: RevealTracker::new(),
            typewriter: None,
            combo: KeyCombo::default(),
            timers: HashMap::new(),
            next_seq: 0,
        }
    }

    // --- Theme ---

    /// Load the persisted theme and apply it.
    pub fn init_theme(&mut self) -> Vec<Effect> {
        self.theme = theme::load_theme(&self.store);
        vec![Effect::ApplyTheme(self.theme)]
    }

    /// Flip the theme, persist it, and spin the toggle briefly.
    pub fn toggle_theme(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        theme::save_theme(&mut self.store, self.theme);
        vec![
            Effect::ApplyTheme(self.theme),
            Effect::SpinThemeToggle(true),
            self.schedule(TimerKind::ThemeSpinReset, THEME_SPIN_MS),
        ]
    }

    // --- Navigation ---

    pub fn toggle_menu(&mut self) -> Vec<Effect> {
        vec![Effect::SetMenuOpen(self.menu.toggle())]
    }

    /// A nav link was followed; close the menu if it is open.
    pub fn nav_link_clicked(&mut self) -> Vec<Effect> {
        if self.menu.is_open() { self.toggle_menu() } else { Vec::new() }
    }

    /// Debounce raw scroll events.
    pub fn scroll_event(&mut self) -> Vec<Effect> {
        vec![self.schedule(TimerKind::ScrollSettle, SCROLL_DEBOUNCE_MS)]
    }

    /// Derive navbar, scroll-top and highlight state from a measurement.
    ///
    /// Only changes are emitted, except on the first measurement which emits
    /// everything so the DOM matches the controller.
    pub fn apply_scroll(&mut self, snapshot: &ScrollSnapshot) -> Vec<Effect> {
        let next = ScrollView {
            navbar_scrolled: nav::navbar_scrolled(snapshot.offset),
            scroll_top_visible: nav::scroll_top_visible(snapshot.offset),
            active_section: snapshot.active_section().map(str::to_owned),
        };
        let prev = self.scroll.take();
        let mut effects = Vec::new();

        if prev.as_ref().is_none_or(|p| p.navbar_scrolled != next.navbar_scrolled) {
            effects.push(Effect::SetNavbarScrolled(next.navbar_scrolled));
        }
        if prev.as_ref().is_none_or(|p| p.scroll_top_visible != next.scroll_top_visible) {
            effects.push(Effect::SetScrollTopVisible(next.scroll_top_visible));
        }
        if prev.as_ref().is_none_or(|p| p.active_section != next.active_section) {
            effects.push(Effect::HighlightSection(next.active_section.clone()));
        }

        self.scroll = Some(next);
        effects
    }

    // --- Contact form ---

    /// Validate a submission and either alert or show the success banner.
    pub fn submit_contact(&mut self, form: ContactForm) -> Vec<Effect> {
        if self.form == FormPhase::ShowingSuccess {
            log::debug!("contact form submitted during success window; ignored");
            return Vec::new();
        }
        if let Err(e) = form.validate() {
            return vec![Effect::Alert(e.to_string())];
        }
        match serde_json::to_string(&form) {
            Ok(json) => log::info!("contact form submitted: {json}"),
            Err(e) => log::warn!("contact form submitted but could not be logged: {e}"),
        }
        self.form = FormPhase::ShowingSuccess;
        vec![Effect::ShowFormSuccess, self.schedule(TimerKind::FormReset, FORM_SUCCESS_MS)]
    }

    // --- Resume ---

    pub fn download_resume(&mut self, page_url: &str) -> Vec<Effect> {
        self.resume_feedback = true;
        vec![
            Effect::DownloadResume {
                file_name: resume::RESUME_FILE_NAME,
                contents: resume::render(&self.profile, page_url),
            },
            Effect::SetResumeFeedback(true),
            self.schedule(TimerKind::ResumeFeedbackReset, RESUME_FEEDBACK_MS),
        ]
    }

    // --- Scroll reveal ---

    /// Register an element for reveal and return its index.
    pub fn observe_reveal(&mut self) -> usize {
        self.reveal.observe()
    }

    pub fn element_visible(&mut self, index: usize) -> Vec<Effect> {
        if self.reveal.mark_visible(index) { vec![Effect::Reveal(index)] } else { Vec::new() }
    }

    // --- Flourishes ---

    /// Clear the hero role and retype `text` after a short delay.
    pub fn start_typing(&mut self, text: &str) -> Vec<Effect> {
        self.typewriter = Some(Typewriter::new(text));
        vec![
            Effect::SetHeroRole(String::new()),
            self.schedule(TimerKind::TypingTick, TYPING_START_DELAY_MS),
        ]
    }

    pub fn key_pressed(&mut self, key: &str) -> Vec<Effect> {
        if !self.combo.push(key) {
            return Vec::new();
        }
        log::debug!("key combo completed");
        // A fade still in flight belongs to the egg being replaced.
        self.timers.remove(&TimerKind::EasterEggRemove);
        vec![Effect::ShowEasterEgg, self.schedule(TimerKind::EasterEggFade, EASTER_EGG_VISIBLE_MS)]
    }

    // --- Timers ---

    /// Run a deferred action. Superseded tickets do nothing.
    pub fn on_timer(&mut self, ticket: TimerTicket) -> Vec<Effect> {
        if self.timers.get(&ticket.kind) != Some(&ticket.seq) {
            log::debug!("stale timer {:?} #{} ignored", ticket.kind, ticket.seq);
            return Vec::new();
        }
        self.timers.remove(&ticket.kind);

        match ticket.kind {
            TimerKind::ScrollSettle => vec![Effect::MeasureScroll],
            TimerKind::ThemeSpinReset => vec![Effect::SpinThemeToggle(false)],
            TimerKind::FormReset => {
                self.form = FormPhase::Idle;
                vec![Effect::ResetForm]
            }
            TimerKind::ResumeFeedbackReset => {
                self.resume_feedback = false;
                vec![Effect::SetResumeFeedback(false)]
            }
            TimerKind::TypingTick => self.type_next(),
            TimerKind::EasterEggFade => {
                vec![Effect::FadeEasterEgg, self.schedule(TimerKind::EasterEggRemove, EASTER_EGG_FADE_MS)]
            }
            TimerKind::EasterEggRemove => vec![Effect::RemoveEasterEgg],
        }
    }

    fn type_next(&mut self) -> Vec<Effect> {
        let Some(prefix) = self.typewriter.as_mut().and_then(Typewriter::advance) else {
            self.typewriter = None;
            return Vec::new();
        };
        let mut effects = vec![Effect::SetHeroRole(prefix)];
        if self.typewriter.as_ref().is_some_and(|w| !w.is_done()) {
            effects.push(self.schedule(TimerKind::TypingTick, TYPING_CHAR_MS));
        }
        effects
    }

    fn schedule(&mut self, kind: TimerKind, delay_ms: u32) -> Effect {
        self.next_seq += 1;
        self.timers.insert(kind, self.next_seq);
        Effect::Schedule { ticket: TimerTicket { kind, seq: self.next_seq }, delay_ms }
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.scroll.as_ref().is_some_and(|v| v.navbar_scrolled)
    }

    #[must_use]
    pub fn scroll_top_visible(&self) -> bool {
        self.scroll.as_ref().is_some_and(|v| v.scroll_top_visible)
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.scroll.as_ref().and_then(|v| v.active_section.as_deref())
    }

    #[must_use]
    pub fn form_phase(&self) -> FormPhase {
        self.form
    }

    #[must_use]
    pub fn resume_feedback(&self) -> bool {
        self.resume_feedback
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveal.is_revealed(index)
    }

    #[must_use]
    pub fn reveal_count(&self) -> usize {
        self.reveal.observed()
    }

    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.timers.contains_key(&kind)
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
