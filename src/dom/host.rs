//! Listener wiring and effect application.
//!
//! The host is shared as `Rc<Host>` between listener closures. Controller and
//! timer borrows are always released before effects are applied, so effects
//! may call back into the controller (see [`Effect::MeasureScroll`]).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, Event, EventTarget, FormData, HtmlAnchorElement, HtmlElement,
    HtmlFormElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MouseEvent, NodeList, ScrollBehavior, ScrollToOptions, Url, Window,
};

use super::elements::PageElements;
use super::storage::LocalStore;
use crate::consts::{
    CLASS_ACTIVE, CLASS_FADE_IN, CLASS_SCROLLED, CLASS_SHOW, IMAGE_FADE_DELAY_MS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, RESUME_CONFIRM_COLOR, RESUME_CONFIRM_LABEL,
};
use crate::contact::ContactForm;
use crate::controller::{Effect, PageController, TimerKind, TimerTicket};
use crate::elements;
use crate::error::PageError;
use crate::flourish::{self, CONSOLE_BRANDING, EASTER_EGG_FADE_ANIMATION, EASTER_EGG_HTML, EASTER_EGG_STYLE};
use crate::nav::{self, MenuState, ScrollSnapshot, SectionBounds};
use crate::profile::Profile;
use crate::reveal::{REVEAL_INDEX_ATTR, REVEAL_OPT_IN_SELECTOR, REVEAL_STRUCTURAL_SELECTOR};
use crate::theme::Theme;

struct Host {
    window: Window,
    document: Document,
    elements: PageElements,
    controller: RefCell<PageController<LocalStore>>,
    timers: RefCell<HashMap<TimerKind, Timeout>>,
    observer: RefCell<Option<IntersectionObserver>>,
    easter_egg: RefCell<Option<HtmlElement>>,
    /// Resume button markup before any confirmation swap.
    resume_label: String,
}

/// Locate the page, apply the stored theme, and wire every listener.
///
/// # Errors
///
/// Returns an error if the window or document is unavailable, a required
/// element is missing, the bundled profile does not parse, or a listener
/// cannot be attached.
pub fn mount() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let elements = PageElements::locate(&document)?;
    let profile = Profile::bundled()?;
    let store = LocalStore::from_window(&window);
    let resume_label = elements.download_resume.inner_html();

    let host = Rc::new(Host {
        window,
        document,
        elements,
        controller: RefCell::new(PageController::new(store, profile)),
        timers: RefCell::new(HashMap::new()),
        observer: RefCell::new(None),
        easter_egg: RefCell::new(None),
        resume_label,
    });

    populate_profile(&host)?;
    let effects = host.controller.borrow_mut().init_theme();
    run(&host, effects);

    bind_theme(&host)?;
    bind_menu(&host)?;
    bind_scroll(&host)?;
    bind_anchors(&host)?;
    bind_contact(&host)?;
    bind_resume(&host)?;
    bind_cards(&host)?;
    bind_keys(&host)?;
    enhance_images(&host)?;
    bind_load(&host)?;

    print_branding();
    log::info!("page controller mounted");
    Ok(())
}

// =============================================================
// Effects
// =============================================================

fn run(host: &Rc<Host>, effects: Vec<Effect>) {
    for effect in effects {
        if let Err(e) = apply(host, effect) {
            log::warn!("effect failed: {e}");
        }
    }
}

fn apply(host: &Rc<Host>, effect: Effect) -> Result<(), PageError> {
    let el = &host.elements;
    match effect {
        Effect::ApplyTheme(theme) => apply_theme(host, theme)?,
        Effect::SpinThemeToggle(true) => el.theme_toggle.style().set_property("transform", "rotate(360deg)")?,
        Effect::SpinThemeToggle(false) => {
            el.theme_toggle.style().remove_property("transform")?;
        }
        Effect::SetMenuOpen(open) => apply_menu(host, open)?,
        Effect::SetNavbarScrolled(scrolled) => {
            el.navbar.class_list().toggle_with_force(CLASS_SCROLLED, scrolled)?;
        }
        Effect::SetScrollTopVisible(visible) => {
            el.scroll_top.class_list().toggle_with_force(CLASS_SHOW, visible)?;
        }
        Effect::HighlightSection(active) => {
            for link in query_all::<Element>(&host.document, ".nav-link")? {
                let href = link.get_attribute("href").unwrap_or_default();
                let is_active = active.as_deref().is_some_and(|id| nav::link_targets(&href, id));
                link.class_list().toggle_with_force(CLASS_ACTIVE, is_active)?;
            }
        }
        Effect::MeasureScroll => {
            let snapshot = measure_scroll(host)?;
            let effects = host.controller.borrow_mut().apply_scroll(&snapshot);
            run(host, effects);
        }
        Effect::Alert(message) => host.window.alert_with_message(&message)?,
        Effect::ShowFormSuccess => {
            el.contact_form.style().set_property("display", "none")?;
            el.form_success.class_list().add_1(CLASS_SHOW)?;
        }
        Effect::ResetForm => {
            el.contact_form.reset();
            el.contact_form.style().set_property("display", "block")?;
            el.form_success.class_list().remove_1(CLASS_SHOW)?;
        }
        Effect::DownloadResume { file_name, contents } => download(host, file_name, &contents)?,
        Effect::SetResumeFeedback(true) => {
            el.download_resume.set_inner_html(RESUME_CONFIRM_LABEL);
            el.download_resume.style().set_property("background-color", RESUME_CONFIRM_COLOR)?;
        }
        Effect::SetResumeFeedback(false) => {
            el.download_resume.set_inner_html(&host.resume_label);
            el.download_resume.style().remove_property("background-color")?;
        }
        Effect::Reveal(index) => reveal(host, index)?,
        Effect::SetHeroRole(text) => {
            if let Some(role) = host.document.query_selector(".hero-role")? {
                role.set_text_content(Some(&text));
            }
        }
        Effect::ShowEasterEgg => show_easter_egg(host)?,
        Effect::FadeEasterEgg => {
            if let Some(egg) = host.easter_egg.borrow().as_ref() {
                egg.style().set_property("animation", EASTER_EGG_FADE_ANIMATION)?;
            }
        }
        Effect::RemoveEasterEgg => {
            if let Some(egg) = host.easter_egg.borrow_mut().take() {
                egg.remove();
            }
        }
        Effect::Schedule { ticket, delay_ms } => schedule(host, ticket, delay_ms),
    }
    Ok(())
}

fn apply_theme(host: &Host, theme: Theme) -> Result<(), PageError> {
    let root = host.document.document_element().ok_or(PageError::NoDocument)?;
    root.set_attribute("data-theme", theme.as_str())?;
    swap_icon(&host.elements.theme_toggle, theme.stale_icon(), theme.icon())
}

fn apply_menu(host: &Host, open: bool) -> Result<(), PageError> {
    host.elements.nav_menu.class_list().toggle_with_force(CLASS_ACTIVE, open)?;
    let menu = MenuState::with_open(open);
    swap_icon(&host.elements.mobile_menu_button, menu.stale_icon(), menu.icon())?;
    let body = host.document.body().ok_or(PageError::NoDocument)?;
    if open {
        body.style().set_property("overflow", "hidden")?;
    } else {
        body.style().remove_property("overflow")?;
    }
    Ok(())
}

/// Replace one icon class on the button's `<i>` child.
fn swap_icon(button: &Element, remove: &str, add: &str) -> Result<(), PageError> {
    if let Some(icon) = button.query_selector("i")? {
        let classes = icon.class_list();
        classes.remove_1(remove)?;
        classes.add_1(add)?;
    }
    Ok(())
}

/// Arm a timer, cancelling any pending one of the same kind.
fn schedule(host: &Rc<Host>, ticket: TimerTicket, delay_ms: u32) {
    let weak: Weak<Host> = Rc::downgrade(host);
    let timeout = Timeout::new(delay_ms, move || {
        let Some(host) = weak.upgrade() else {
            return;
        };
        let effects = host.controller.borrow_mut().on_timer(ticket);
        run(&host, effects);
    });
    // Dropping the replaced handle clears its timeout.
    host.timers.borrow_mut().insert(ticket.kind, timeout);
}

// =============================================================
// Listeners
// =============================================================

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PageError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run one controller handler and apply what it returns.
fn dispatch(host: &Rc<Host>, handler: impl FnOnce(&mut PageController<LocalStore>) -> Vec<Effect>) {
    let effects = handler(&mut host.controller.borrow_mut());
    run(host, effects);
}

fn report(context: &str, result: Result<(), PageError>) {
    if let Err(e) = result {
        log::warn!("{context}: {e}");
    }
}

fn bind_theme(host: &Rc<Host>) -> Result<(), PageError> {
    let h = Rc::clone(host);
    listen(&host.elements.theme_toggle, "click", move |_| {
        dispatch(&h, PageController::toggle_theme);
    })
}

fn bind_menu(host: &Rc<Host>) -> Result<(), PageError> {
    let h = Rc::clone(host);
    listen(&host.elements.mobile_menu_button, "click", move |_| {
        dispatch(&h, PageController::toggle_menu);
    })?;
    for link in query_all::<Element>(&host.document, ".nav-link")? {
        let h = Rc::clone(host);
        listen(&link, "click", move |_| {
            dispatch(&h, PageController::nav_link_clicked);
        })?;
    }
    Ok(())
}

fn bind_scroll(host: &Rc<Host>) -> Result<(), PageError> {
    let h = Rc::clone(host);
    listen(&host.window, "scroll", move |_| {
        dispatch(&h, PageController::scroll_event);
    })?;
    let h = Rc::clone(host);
    listen(&host.elements.scroll_top, "click", move |_| {
        smooth_scroll_to(&h.window, 0.0);
    })
}

fn bind_anchors(host: &Rc<Host>) -> Result<(), PageError> {
    for anchor in query_all::<Element>(&host.document, "a[href^=\"#\"]")? {
        let h = Rc::clone(host);
        let target = anchor.clone();
        listen(&anchor, "click", move |ev| {
            let href = target.get_attribute("href").unwrap_or_default();
            if let Some(selector) = nav::anchor_target(&href) {
                ev.prevent_default();
                report("smooth scroll", scroll_to_element(&h, selector));
            }
        })?;
    }
    Ok(())
}

fn bind_contact(host: &Rc<Host>) -> Result<(), PageError> {
    let h = Rc::clone(host);
    listen(&host.elements.contact_form, "submit", move |ev| {
        ev.prevent_default();
        match read_contact_form(&h.elements.contact_form) {
            Ok(form) => dispatch(&h, |c| c.submit_contact(form)),
            Err(e) => log::warn!("contact form could not be read: {e}"),
        }
    })
}

fn bind_resume(host: &Rc<Host>) -> Result<(), PageError> {
    let h = Rc::clone(host);
    listen(&host.elements.download_resume, "click", move |ev| {
        ev.prevent_default();
        match h.window.location().href() {
            Ok(url) => dispatch(&h, |c| c.download_resume(&url)),
            Err(e) => log::warn!("page url unavailable: {e:?}"),
        }
    })
}

fn bind_cards(host: &Rc<Host>) -> Result<(), PageError> {
    for card in query_all::<HtmlElement>(&host.document, ".project-card")? {
        let tilted = card.clone();
        listen(&card, "mousemove", move |ev| {
            let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = tilted.get_bounding_client_rect();
            let x = f64::from(mouse.client_x()) - rect.left();
            let y = f64::from(mouse.client_y()) - rect.top();
            let transform = flourish::tilt_transform(x, y, rect.width(), rect.height());
            if let Err(e) = tilted.style().set_property("transform", &transform) {
                log::warn!("card tilt failed: {e:?}");
            }
        })?;
        let flat = card.clone();
        listen(&card, "mouseleave", move |_| {
            if let Err(e) = flat.style().remove_property("transform") {
                log::warn!("card reset failed: {e:?}");
            }
        })?;
    }
    Ok(())
}

fn bind_keys(host: &Rc<Host>) -> Result<(), PageError> {
    let h = Rc::clone(host);
    listen(&host.document, "keydown", move |ev| {
        if let Some(key) = ev.dyn_ref::<KeyboardEvent>() {
            dispatch(&h, |c| c.key_pressed(&key.key()));
        }
    })
}

/// Reveal, typing and stagger effects wait for the full page load. The wasm
/// module can start after `load` has already fired, so check first.
fn bind_load(host: &Rc<Host>) -> Result<(), PageError> {
    if elements::page_loaded(&host.document.ready_state()) {
        on_load(host);
        return Ok(());
    }
    let h = Rc::clone(host);
    listen(&host.window, "load", move |_| on_load(&h))
}

fn on_load(host: &Rc<Host>) {
    report("scroll reveal", start_reveal(host));
    report("typing effect", start_typing(host));
    report("skill stagger", stagger_skill_cards(host));
}

// =============================================================
// Page work
// =============================================================

fn populate_profile(host: &Host) -> Result<(), PageError> {
    let controller = host.controller.borrow();
    for slot in controller.profile().slots() {
        let targets = if slot.every_match {
            query_all::<Element>(&host.document, slot.selector)?
        } else {
            host.document.query_selector(slot.selector)?.into_iter().collect()
        };
        if targets.is_empty() {
            log::debug!("no {} element to populate", slot.selector);
        }
        for target in targets {
            target.set_inner_html(slot.value);
        }
    }
    Ok(())
}

fn measure_scroll(host: &Host) -> Result<ScrollSnapshot, PageError> {
    let sections = query_all::<HtmlElement>(&host.document, "section[id]")?
        .into_iter()
        .map(|section| {
            SectionBounds::new(section.id(), f64::from(section.offset_top()), f64::from(section.offset_height()))
        })
        .collect();
    Ok(ScrollSnapshot {
        offset: host.window.scroll_y()?,
        navbar_height: f64::from(host.elements.navbar.offset_height()),
        sections,
    })
}

fn scroll_to_element(host: &Host, selector: &str) -> Result<(), PageError> {
    let Some(target) = host.document.query_selector(selector)? else {
        return Ok(());
    };
    let top = nav::scroll_target(
        target.get_bounding_client_rect().top(),
        host.window.scroll_y()?,
        f64::from(host.elements.navbar.offset_height()),
    );
    smooth_scroll_to(&host.window, top);
    Ok(())
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn read_contact_form(form: &HtmlFormElement) -> Result<ContactForm, PageError> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactForm {
        name: field("name"),
        email: field("email"),
        subject: field("subject"),
        message: field("message"),
    })
}

/// Offer `contents` as a file through a transient `<a download>`.
fn download(host: &Host, file_name: &str, contents: &str) -> Result<(), PageError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor = host
        .document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| PageError::Js("created element is not an anchor".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = host.document.body().ok_or(PageError::NoDocument)?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}

fn start_reveal(host: &Rc<Host>) -> Result<(), PageError> {
    let weak = Rc::downgrade(host);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let Some(host) = weak.upgrade() else {
                return;
            };
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let raw = entry.target().get_attribute(REVEAL_INDEX_ATTR).unwrap_or_default();
                match raw.parse::<usize>() {
                    Ok(index) => dispatch(&host, |c| c.element_visible(index)),
                    Err(e) => log::warn!("bad reveal index {raw:?}: {e}"),
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in query_all::<Element>(&host.document, REVEAL_OPT_IN_SELECTOR)? {
        observe_reveal(host, &observer, &el)?;
    }
    for el in query_all::<Element>(&host.document, REVEAL_STRUCTURAL_SELECTOR)? {
        if el.has_attribute(REVEAL_INDEX_ATTR) {
            continue;
        }
        el.class_list().add_1(CLASS_FADE_IN)?;
        observe_reveal(host, &observer, &el)?;
    }
    log::debug!("observing {} reveal elements", host.controller.borrow().reveal_count());

    *host.observer.borrow_mut() = Some(observer);
    Ok(())
}

fn observe_reveal(host: &Host, observer: &IntersectionObserver, el: &Element) -> Result<(), PageError> {
    let index = host.controller.borrow_mut().observe_reveal();
    el.set_attribute(REVEAL_INDEX_ATTR, &index.to_string())?;
    observer.observe(el);
    Ok(())
}

fn reveal(host: &Host, index: usize) -> Result<(), PageError> {
    let selector = format!("[{REVEAL_INDEX_ATTR}=\"{index}\"]");
    let Some(el) = host.document.query_selector(&selector)? else {
        return Ok(());
    };
    el.class_list().add_1(CLASS_ACTIVE)?;
    if let Some(observer) = host.observer.borrow().as_ref() {
        observer.unobserve(&el);
    }
    Ok(())
}

fn start_typing(host: &Rc<Host>) -> Result<(), PageError> {
    let Some(role) = host.document.query_selector(".hero-role")? else {
        return Ok(());
    };
    let text = role.text_content().unwrap_or_default();
    if let Some(role) = role.dyn_ref::<HtmlElement>() {
        role.style().set_property("opacity", "1")?;
    }
    dispatch(host, |c| c.start_typing(&text));
    Ok(())
}

fn stagger_skill_cards(host: &Host) -> Result<(), PageError> {
    for (index, card) in query_all::<HtmlElement>(&host.document, ".skill-card")?.into_iter().enumerate() {
        card.style().set_property("animation-delay", &flourish::stagger_delay(index))?;
    }
    Ok(())
}

fn show_easter_egg(host: &Host) -> Result<(), PageError> {
    if let Some(previous) = host.easter_egg.borrow_mut().take() {
        previous.remove();
    }
    let egg = host
        .document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::Js("created element is not an HTML element".to_owned()))?;
    egg.style().set_css_text(EASTER_EGG_STYLE);
    egg.set_inner_html(EASTER_EGG_HTML);
    host.document.body().ok_or(PageError::NoDocument)?.append_child(&egg)?;
    *host.easter_egg.borrow_mut() = Some(egg);
    Ok(())
}

/// Lazy-load every image and fade it in once loaded.
fn enhance_images(host: &Host) -> Result<(), PageError> {
    for img in query_all::<HtmlImageElement>(&host.document, "img")? {
        img.set_attribute("loading", "lazy")?;
        let faded = img.clone();
        listen(&img, "load", move |_| {
            let style = faded.style();
            let hidden = style
                .set_property("opacity", "0")
                .and_then(|()| style.set_property("transition", "opacity 0.5s ease-in"));
            if let Err(e) = hidden {
                log::warn!("image fade failed: {e:?}");
                return;
            }
            let shown = faded.clone();
            Timeout::new(IMAGE_FADE_DELAY_MS, move || {
                if let Err(e) = shown.style().set_property("opacity", "1") {
                    log::warn!("image fade failed: {e:?}");
                }
            })
            .forget();
        })?;
    }
    Ok(())
}

fn print_branding() {
    for (text, css) in CONSOLE_BRANDING {
        web_sys::console::log_2(&JsValue::from_str(text), &JsValue::from_str(css));
    }
}

// =============================================================
// Helpers
// =============================================================

fn query_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Result<Vec<T>, PageError> {
    let nodes: NodeList = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect())
}
