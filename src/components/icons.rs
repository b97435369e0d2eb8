//! Inline stroke icons.
//!
//! Each icon is a single SVG path on a 24x24 grid drawn with `currentColor`,
//! so icons inherit the text color of whatever band they sit in.

use content::SkillIcon;
use leptos::prelude::*;

pub const SUN: &str = "M12 3v1m0 16v1m8.66-13.66l-.71.71M4.05 19.95l-.71.71M21 12h-1M4 12H3m16.95 7.05l-.71-.71M4.05 4.05l-.71-.71M16 12a4 4 0 11-8 0 4 4 0 018 0z";
pub const MOON: &str = "M21 12.79A9 9 0 1111.21 3a7 7 0 109.79 9.79z";
pub const MAIL: &str = "M4 4h16a2 2 0 012 2v12a2 2 0 01-2 2H4a2 2 0 01-2-2V6a2 2 0 012-2zM22 6l-10 7L2 6";
pub const PHONE: &str = "M22 16.92v3a2 2 0 01-2.18 2 19.79 19.79 0 01-8.63-3.07 19.5 19.5 0 01-6-6A19.79 19.79 0 012.12 4.18 2 2 0 014.11 2h3a2 2 0 012 1.72c.13.96.36 1.9.7 2.81a2 2 0 01-.45 2.11L8.09 9.91a16 16 0 006 6l1.27-1.27a2 2 0 012.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0122 16.92z";
pub const MAP_PIN: &str = "M21 10c0 7-9 13-9 13S3 17 3 10a9 9 0 0118 0zM12 13a3 3 0 100-6 3 3 0 000 6z";
pub const LINKEDIN: &str = "M16 8a6 6 0 016 6v7h-4v-7a2 2 0 00-4 0v7h-4v-7a6 6 0 016-6zM2 9h4v12H2zM4 6a2 2 0 100-4 2 2 0 000 4z";
pub const GITHUB: &str = "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 00-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0020 4.77 5.07 5.07 0 0019.91 1S18.73.65 16 2.48a13.38 13.38 0 00-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 005 4.77a5.44 5.44 0 00-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 009 18.13V22";
pub const DOWNLOAD: &str = "M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3";
pub const CHEVRON_DOWN: &str = "M6 9l6 6 6-6";
pub const CHEVRON_LEFT: &str = "M15 18l-6-6 6-6";
pub const CHEVRON_RIGHT: &str = "M9 18l6-6-6-6";
pub const CODE: &str = "M16 18l6-6-6-6M8 6l-6 6 6 6";
pub const BRAIN: &str = "M9.5 2A2.5 2.5 0 0112 4.5v15a2.5 2.5 0 01-4.96.44 2.5 2.5 0 01-2.96-3.08 3 3 0 01-.34-5.58 2.5 2.5 0 011.32-4.24 2.5 2.5 0 014.44-2.04zM14.5 2A2.5 2.5 0 0012 4.5v15a2.5 2.5 0 004.96.44 2.5 2.5 0 002.96-3.08 3 3 0 00.34-5.58 2.5 2.5 0 00-1.32-4.24 2.5 2.5 0 00-4.44-2.04z";
pub const GLOBE: &str = "M12 22a10 10 0 100-20 10 10 0 000 20zM2 12h20M12 2a15.3 15.3 0 014 10 15.3 15.3 0 01-4 10 15.3 15.3 0 01-4-10 15.3 15.3 0 014-10z";
pub const AWARD: &str = "M12 15a7 7 0 100-14 7 7 0 000 14zM8.21 13.89L7 23l5-3 5 3-1.21-9.12";
pub const EXTERNAL_LINK: &str = "M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6M15 3h6v6M10 14L21 3";
pub const CLOSE: &str = "M18 6L6 18M6 6l12 12";

/// Path for a skill category glyph.
pub fn skill_icon_path(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => CODE,
        SkillIcon::Brain => BRAIN,
        SkillIcon::Globe => GLOBE,
    }
}

/// Decorative SVG icon. Hidden from assistive tech; callers label the
/// surrounding control instead.
#[component]
pub fn Icon(path: &'static str, #[prop(default = "icon")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}
