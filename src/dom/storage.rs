//! `localStorage`-backed preference store.

use crate::theme::PreferenceStore;

/// Preference store over the window's `localStorage`.
///
/// Storage may be unavailable (private browsing, disabled cookies); reads then
/// yield nothing and writes are dropped with a warning.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn from_window(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {e:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key:?} failed: {e:?}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key:?} failed: {e:?}");
        }
    }
}
