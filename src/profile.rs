//! Profile record shown across the page and in the exported resume.
//!
//! The record is static source data: it is embedded from
//! `assets/profile.json` at build time and never mutated afterwards.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::Deserialize;

use crate::error::PageError;

const BUNDLED_PROFILE: &str = include_str!("../assets/profile.json");

/// Personal details populated into the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub about: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Profile {
    /// Parse a profile from JSON. All five fields are required.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Profile`] if the JSON is malformed, a field is
    /// missing, or an unknown field is present.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The profile embedded in the build.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Profile`] if the bundled JSON does not parse.
    pub fn bundled() -> Result<Self, PageError> {
        Self::from_json(BUNDLED_PROFILE)
    }

    /// DOM slots this profile fills, in population order.
    #[must_use]
    pub fn slots(&self) -> [ProfileSlot<'_>; 5] {
        [
            ProfileSlot { selector: ".user-name", value: &self.name, every_match: true },
            ProfileSlot { selector: ".user-about", value: &self.about, every_match: false },
            ProfileSlot { selector: ".user-address", value: &self.address, every_match: false },
            ProfileSlot { selector: ".user-phone", value: &self.phone, every_match: false },
            ProfileSlot { selector: ".user-email", value: &self.email, every_match: false },
        ]
    }
}

/// One selector to fill with a profile field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileSlot<'a> {
    pub selector: &'static str,
    pub value: &'a str,
    /// Fill every matching element rather than only the first.
    pub every_match: bool,
}
