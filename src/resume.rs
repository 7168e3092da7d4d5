//! Plain-text resume rendered from the profile.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use std::fmt::Write as _;

use crate::profile::Profile;

/// File name offered to the browser's download prompt.
pub const RESUME_FILE_NAME: &str = "Resume.txt";

pub const RESUME_HEADLINE: &str = "Frontend Web Developer";

pub const RESUME_SKILLS: [&str; 5] = [
    "HTML5, CSS3, JavaScript (ES6+)",
    "React, Node.js, TypeScript",
    "Git, NPM, Sass",
    "Responsive Design, UI/UX",
    "Figma, MongoDB",
];

pub const RESUME_EXPERIENCE: &str = "5+ Years Experience";

/// Render the resume document for `profile`, linking back to `page_url`.
#[must_use]
pub fn render(profile: &Profile, page_url: &str) -> String {
    let mut out = String::new();
    // Writing into a String is infallible.
    write_resume(&mut out, profile, page_url).unwrap_or_default();
    out
}

fn write_resume(out: &mut String, profile: &Profile, page_url: &str) -> std::fmt::Result {
    writeln!(out, "{}", profile.name.trim())?;
    writeln!(out, "{RESUME_HEADLINE}")?;
    writeln!(out)?;
    writeln!(out, "CONTACT INFORMATION")?;
    writeln!(out, "Email: {}", profile.email)?;
    writeln!(out, "Phone: {}", profile.phone)?;
    writeln!(out, "Location: {}", profile.address)?;
    writeln!(out)?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", collapse_whitespace(&profile.about))?;
    writeln!(out)?;
    writeln!(out, "SKILLS")?;
    for skill in RESUME_SKILLS {
        writeln!(out, "- {skill}")?;
    }
    writeln!(out)?;
    writeln!(out, "EXPERIENCE")?;
    writeln!(out, "{RESUME_EXPERIENCE}")?;
    writeln!(out)?;
    writeln!(out, "Portfolio: {page_url}")
}

/// Fold runs of whitespace (including the indentation of multi-line source
/// text) into single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
