pub mod about_section;
pub mod bubble_trail;
pub mod cert_carousel;
pub mod certifications_section;
pub mod contact_section;
pub mod hero;
pub mod icons;
pub mod nav_bar;
pub mod profile_image;
pub mod projects_section;
pub mod skills_section;
pub mod toaster;
pub mod tooltip;
