use std::fmt;

/// Shown in place of a section whose scene could not be set up.
pub const FALLBACK_MESSAGE: &str =
    "Oops! Something went wrong loading the 3D scene. Please try again later.";

/// The scroll-activated sections of the landing page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    Cta,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Hero, Section::Features, Section::Cta];

    /// The `id` attribute of the section's root element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::Cta => "cta",
        }
    }

    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.element_id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Hero => "Hero",
            Section::Features => "Features",
            Section::Cta => "CTA",
        };
        f.write_str(name)
    }
}

/// Markup that replaces a failed section's contents.
#[must_use]
pub fn fallback_markup() -> String {
    format!(r#"<div class="text-red-500 p-4">{FALLBACK_MESSAGE}</div>"#)
}
