//! Typed handles to the elements the page must provide.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::elements::{self, ElementId};
use crate::error::PageError;

/// Required page elements, resolved once at startup.
pub struct PageElements {
    pub theme_toggle: HtmlElement,
    pub nav_menu: Element,
    pub mobile_menu_button: Element,
    pub navbar: HtmlElement,
    pub scroll_top: Element,
    pub contact_form: HtmlFormElement,
    pub form_success: Element,
    pub download_resume: HtmlElement,
}

impl PageElements {
    /// Resolve every required element, reporting all missing ids together.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElements`] if any id is absent, or
    /// [`PageError::Js`] if an element has the wrong type.
    pub fn locate(document: &Document) -> Result<Self, PageError> {
        elements::ensure_present(|id| document.get_element_by_id(id.as_str()).is_some())?;
        Ok(Self {
            theme_toggle: typed(document, ElementId::ThemeToggle)?,
            nav_menu: typed(document, ElementId::NavMenu)?,
            mobile_menu_button: typed(document, ElementId::MobileMenuButton)?,
            navbar: typed(document, ElementId::Navbar)?,
            scroll_top: typed(document, ElementId::ScrollTop)?,
            contact_form: typed(document, ElementId::ContactForm)?,
            form_success: typed(document, ElementId::FormSuccess)?,
            download_resume: typed(document, ElementId::DownloadResume)?,
        })
    }
}

fn typed<T: JsCast>(document: &Document, id: ElementId) -> Result<T, PageError> {
    document
        .get_element_by_id(id.as_str())
        .ok_or_else(|| PageError::MissingElements(vec![id.as_str()]))?
        .dyn_into::<T>()
        .map_err(|_| PageError::Js(format!("#{} has an unexpected element type", id.as_str())))
}
