use super::*;
use crate::nav::SectionBounds;
use crate::theme::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn profile() -> Profile {
    Profile {
        name: "Sam".to_owned(),
        about: "About".to_owned(),
        email: "sam@example.com".to_owned(),
        phone: "555".to_owned(),
        address: "Here".to_owned(),
    }
}

fn controller() -> PageController<MemoryStore> {
    PageController::new(MemoryStore::new(), profile())
}

fn ticket_for(effects: &[Effect], kind: TimerKind) -> TimerTicket {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Schedule { ticket, .. } if ticket.kind == kind => Some(*ticket),
            _ => None,
        })
        .expect("timer scheduled")
}

fn delay_for(effects: &[Effect], kind: TimerKind) -> u32 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Schedule { ticket, delay_ms } if ticket.kind == kind => Some(*delay_ms),
            _ => None,
        })
        .expect("timer scheduled")
}

fn form(name: &str, email: &str) -> ContactForm {
    ContactForm {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: "s".to_owned(),
        message: "m".to_owned(),
    }
}

fn page(offset: f64) -> ScrollSnapshot {
    ScrollSnapshot {
        offset,
        navbar_height: 70.0,
        sections: vec![SectionBounds::new("home", 0.0, 600.0), SectionBounds::new("about", 800.0, 500.0)],
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn init_theme_defaults_to_light() {
    let mut c = controller();
    assert_eq!(c.init_theme(), vec![Effect::ApplyTheme(Theme::Light)]);
    assert_eq!(c.theme(), Theme::Light);
}

#[test]
fn init_theme_applies_persisted_dark() {
    let mut c = PageController::new(MemoryStore::with_entry("theme", "dark"), profile());
    assert_eq!(c.init_theme(), vec![Effect::ApplyTheme(Theme::Dark)]);
}

#[test]
fn toggle_persists_and_applies_same_theme() {
    let mut c = controller();
    c.init_theme();
    let effects = c.toggle_theme();
    assert_eq!(effects[0], Effect::ApplyTheme(Theme::Dark));
    assert_eq!(c.store().load("theme").as_deref(), Some("dark"));
    assert_eq!(c.theme(), Theme::Dark);
}

#[test]
fn toggle_twice_restores_theme_and_storage() {
    let mut c = controller();
    c.init_theme();
    c.toggle_theme();
    let effects = c.toggle_theme();
    assert_eq!(effects[0], Effect::ApplyTheme(Theme::Light));
    assert_eq!(c.theme(), Theme::Light);
    assert_eq!(c.store().load("theme").as_deref(), Some(c.theme().as_str()));
}

#[test]
fn toggle_spins_then_resets_after_delay() {
    let mut c = controller();
    let effects = c.toggle_theme();
    assert!(effects.contains(&Effect::SpinThemeToggle(true)));
    assert_eq!(delay_for(&effects, TimerKind::ThemeSpinReset), 300);
    let ticket = ticket_for(&effects, TimerKind::ThemeSpinReset);
    assert_eq!(c.on_timer(ticket), vec![Effect::SpinThemeToggle(false)]);
}

// =============================================================
// Timers
// =============================================================

#[test]
fn only_latest_timer_of_a_kind_fires() {
    let mut c = controller();
    let first = ticket_for(&c.toggle_theme(), TimerKind::ThemeSpinReset);
    let second = ticket_for(&c.toggle_theme(), TimerKind::ThemeSpinReset);
    assert_ne!(first, second);
    assert!(c.on_timer(first).is_empty());
    assert_eq!(c.on_timer(second), vec![Effect::SpinThemeToggle(false)]);
}

#[test]
fn timer_fires_only_once() {
    let mut c = controller();
    let ticket = ticket_for(&c.toggle_theme(), TimerKind::ThemeSpinReset);
    assert!(!c.on_timer(ticket).is_empty());
    assert!(c.on_timer(ticket).is_empty());
    assert!(!c.is_pending(TimerKind::ThemeSpinReset));
}

#[test]
fn kinds_do_not_supersede_each_other() {
    let mut c = controller();
    let spin = ticket_for(&c.toggle_theme(), TimerKind::ThemeSpinReset);
    let feedback = ticket_for(&c.download_resume("u"), TimerKind::ResumeFeedbackReset);
    assert!(!c.on_timer(spin).is_empty());
    assert!(!c.on_timer(feedback).is_empty());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn menu_toggles_and_nav_link_closes_it() {
    let mut c = controller();
    assert_eq!(c.toggle_menu(), vec![Effect::SetMenuOpen(true)]);
    assert!(c.menu_open());
    assert_eq!(c.nav_link_clicked(), vec![Effect::SetMenuOpen(false)]);
    assert!(!c.menu_open());
}

#[test]
fn nav_link_with_closed_menu_does_nothing() {
    let mut c = controller();
    assert!(c.nav_link_clicked().is_empty());
    assert!(!c.menu_open());
}

#[test]
fn scroll_events_debounce_to_one_measurement() {
    let mut c = controller();
    let first = ticket_for(&c.scroll_event(), TimerKind::ScrollSettle);
    let effects = c.scroll_event();
    assert_eq!(delay_for(&effects, TimerKind::ScrollSettle), 10);
    let last = ticket_for(&effects, TimerKind::ScrollSettle);
    assert!(c.on_timer(first).is_empty());
    assert_eq!(c.on_timer(last), vec![Effect::MeasureScroll]);
}

#[test]
fn first_measurement_emits_full_state() {
    let mut c = controller();
    assert_eq!(
        c.apply_scroll(&page(0.0)),
        vec![
            Effect::SetNavbarScrolled(false),
            Effect::SetScrollTopVisible(false),
            Effect::HighlightSection(Some("home".to_owned())),
        ]
    );
}

#[test]
fn later_measurements_emit_only_changes() {
    let mut c = controller();
    c.apply_scroll(&page(0.0));
    assert_eq!(c.apply_scroll(&page(100.0)), vec![Effect::SetNavbarScrolled(true)]);
    assert!(c.apply_scroll(&page(120.0)).is_empty());
    assert_eq!(
        c.apply_scroll(&page(700.0)),
        vec![Effect::SetScrollTopVisible(true), Effect::HighlightSection(Some("about".to_owned()))]
    );
}

#[test]
fn offset_inside_one_section_marks_only_it_active() {
    let mut c = controller();
    c.apply_scroll(&page(900.0));
    assert_eq!(c.active_section(), Some("about"));
    assert!(c.navbar_scrolled());
    assert!(c.scroll_top_visible());
}

#[test]
fn offset_outside_all_sections_clears_highlight() {
    let mut c = controller();
    c.apply_scroll(&page(900.0));
    let effects = c.apply_scroll(&page(5000.0));
    assert_eq!(effects, vec![Effect::HighlightSection(None)]);
    assert_eq!(c.active_section(), None);
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn empty_field_is_rejected_without_state_change() {
    let mut c = controller();
    assert_eq!(
        c.submit_contact(form("", "a@b.com")),
        vec![Effect::Alert("Please fill in all fields".to_owned())]
    );
    assert_eq!(c.form_phase(), FormPhase::Idle);
    assert!(!c.is_pending(TimerKind::FormReset));
}

#[test]
fn malformed_email_is_rejected() {
    let mut c = controller();
    assert_eq!(
        c.submit_contact(form("A", "not-an-email")),
        vec![Effect::Alert("Please enter a valid email address".to_owned())]
    );
    assert_eq!(c.form_phase(), FormPhase::Idle);
}

#[test]
fn accepted_form_shows_success_then_resets() {
    let mut c = controller();
    let effects = c.submit_contact(form("A", "a@b.com"));
    assert_eq!(effects[0], Effect::ShowFormSuccess);
    assert_eq!(delay_for(&effects, TimerKind::FormReset), 5_000);
    assert_eq!(c.form_phase(), FormPhase::ShowingSuccess);

    let ticket = ticket_for(&effects, TimerKind::FormReset);
    assert_eq!(c.on_timer(ticket), vec![Effect::ResetForm]);
    assert_eq!(c.form_phase(), FormPhase::Idle);
}

#[test]
fn submission_during_success_window_is_ignored() {
    let mut c = controller();
    let effects = c.submit_contact(form("A", "a@b.com"));
    let ticket = ticket_for(&effects, TimerKind::FormReset);
    assert!(c.submit_contact(form("B", "b@c.com")).is_empty());
    assert_eq!(c.on_timer(ticket), vec![Effect::ResetForm]);
    assert_eq!(c.submit_contact(form("B", "b@c.com"))[0], Effect::ShowFormSuccess);
}

// =============================================================
// Resume
// =============================================================

#[test]
fn download_resume_emits_file_and_feedback() {
    let mut c = controller();
    let effects = c.download_resume("https://example.com/");
    match &effects[0] {
        Effect::DownloadResume { file_name, contents } => {
            assert_eq!(*file_name, "Resume.txt");
            assert!(contents.starts_with("Sam\n"));
            assert!(contents.ends_with("Portfolio: https://example.com/\n"));
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(effects[1], Effect::SetResumeFeedback(true));
    assert!(c.resume_feedback());
    assert_eq!(delay_for(&effects, TimerKind::ResumeFeedbackReset), 2_000);
}

#[test]
fn repeated_download_restores_label_once() {
    let mut c = controller();
    let first = ticket_for(&c.download_resume("u"), TimerKind::ResumeFeedbackReset);
    let second = ticket_for(&c.download_resume("u"), TimerKind::ResumeFeedbackReset);
    assert!(c.on_timer(first).is_empty());
    assert!(c.resume_feedback());
    assert_eq!(c.on_timer(second), vec![Effect::SetResumeFeedback(false)]);
    assert!(!c.resume_feedback());
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn element_is_revealed_at_most_once() {
    let mut c = controller();
    let index = c.observe_reveal();
    assert_eq!(c.element_visible(index), vec![Effect::Reveal(index)]);
    assert!(c.element_visible(index).is_empty());
    assert!(c.element_visible(index).is_empty());
    assert!(c.is_revealed(index));
}

// =============================================================
// Flourishes
// =============================================================

#[test]
fn typing_reveals_characters_in_order() {
    let mut c = controller();
    let effects = c.start_typing("Hi");
    assert_eq!(effects[0], Effect::SetHeroRole(String::new()));
    assert_eq!(delay_for(&effects, TimerKind::TypingTick), 500);

    let effects = c.on_timer(ticket_for(&effects, TimerKind::TypingTick));
    assert_eq!(effects[0], Effect::SetHeroRole("H".to_owned()));
    assert_eq!(delay_for(&effects, TimerKind::TypingTick), 100);

    let effects = c.on_timer(ticket_for(&effects, TimerKind::TypingTick));
    assert_eq!(effects, vec![Effect::SetHeroRole("Hi".to_owned())]);
    assert!(!c.is_pending(TimerKind::TypingTick));
}

#[test]
fn key_combo_shows_then_fades_easter_egg() {
    let mut c = controller();
    let mut effects = Vec::new();
    for key in crate::flourish::KEY_COMBO {
        effects = c.key_pressed(key);
    }
    assert_eq!(effects[0], Effect::ShowEasterEgg);
    assert_eq!(delay_for(&effects, TimerKind::EasterEggFade), 3_000);

    let effects = c.on_timer(ticket_for(&effects, TimerKind::EasterEggFade));
    assert_eq!(effects[0], Effect::FadeEasterEgg);
    assert_eq!(delay_for(&effects, TimerKind::EasterEggRemove), 500);

    let effects = c.on_timer(ticket_for(&effects, TimerKind::EasterEggRemove));
    assert_eq!(effects, vec![Effect::RemoveEasterEgg]);
}

#[test]
fn repeating_combo_during_fade_keeps_new_egg() {
    let mut c = controller();
    let mut effects = Vec::new();
    for key in crate::flourish::KEY_COMBO {
        effects = c.key_pressed(key);
    }
    let fading = c.on_timer(ticket_for(&effects, TimerKind::EasterEggFade));
    let old_remove = ticket_for(&fading, TimerKind::EasterEggRemove);

    for key in crate::flourish::KEY_COMBO {
        effects = c.key_pressed(key);
    }
    assert_eq!(effects[0], Effect::ShowEasterEgg);
    assert!(c.on_timer(old_remove).is_empty());
    assert!(c.is_pending(TimerKind::EasterEggFade));

    let fading = c.on_timer(ticket_for(&effects, TimerKind::EasterEggFade));
    assert_eq!(fading[0], Effect::FadeEasterEgg);
    let removed = c.on_timer(ticket_for(&fading, TimerKind::EasterEggRemove));
    assert_eq!(removed, vec![Effect::RemoveEasterEgg]);
}

#[test]
fn stray_keys_do_nothing() {
    let mut c = controller();
    assert!(c.key_pressed("Enter").is_empty());
    assert!(c.key_pressed("ArrowUp").is_empty());
}
