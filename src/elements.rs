//! The element ids the page must provide.

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

use crate::error::PageError;

/// Elements the controller cannot run without.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    ThemeToggle,
    NavMenu,
    MobileMenuButton,
    Navbar,
    ScrollTop,
    ContactForm,
    FormSuccess,
    DownloadResume,
}

impl ElementId {
    pub const ALL: [Self; 8] = [
        Self::ThemeToggle,
        Self::NavMenu,
        Self::MobileMenuButton,
        Self::Navbar,
        Self::ScrollTop,
        Self::ContactForm,
        Self::FormSuccess,
        Self::DownloadResume,
    ];

    /// The DOM `id` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThemeToggle => "themeToggle",
            Self::NavMenu => "navMenu",
            Self::MobileMenuButton => "mobileMenuBtn",
            Self::Navbar => "navbar",
            Self::ScrollTop => "scrollTop",
            Self::ContactForm => "contactForm",
            Self::FormSuccess => "formSuccess",
            Self::DownloadResume => "downloadResume",
        }
    }
}

/// Fail with every missing id at once rather than on first use.
///
/// # Errors
///
/// Returns [`PageError::MissingElements`] listing each id `exists` rejects.
pub fn ensure_present(mut exists: impl FnMut(ElementId) -> bool) -> Result<(), PageError> {
    let missing = ElementId::ALL
        .into_iter()
        .filter(|id| !exists(*id))
        .map(ElementId::as_str)
        .collect::<Vec<_>>();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PageError::MissingElements(missing))
    }
}

/// Whether `document.readyState` means `load` has already fired.
#[must_use]
pub fn page_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}
