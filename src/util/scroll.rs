//! Page sections and smooth-scroll navigation between them.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Sections of the home page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    /// Every section in the order it is rendered.
    pub const ORDER: [Self; 6] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Certifications,
        Self::Contact,
    ];

    /// Sections reachable from the nav bar, in nav order.
    pub const NAV: [Self; 5] = [
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Certifications,
        Self::Contact,
    ];

    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    /// Nav button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }
}

/// Smooth-scroll the element with `id` into view.
///
/// A missing element is silently ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(el) = doc.get_element_by_id(id) else {
            log::debug!("scroll target #{id} not found");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll to a known section.
pub fn scroll_to(section: Section) {
    scroll_to_section(section.id());
}
