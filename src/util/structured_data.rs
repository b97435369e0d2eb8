//! schema.org `Person` description of the page owner, emitted as JSON-LD.

#[cfg(test)]
#[path = "structured_data_test.rs"]
mod structured_data_test;

use content::{Profile, Skill};
use serde_json::{Value, json};

/// Build the JSON-LD object for `profile`.
#[must_use]
pub fn person_json_ld(profile: &Profile, skills: &[Skill]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": profile.name,
        "description": profile.tagline,
        "email": profile.mailto(),
        "telephone": profile.phone,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": profile.location,
        },
        "sameAs": [profile.linkedin_url, profile.github_url],
        "knowsAbout": skills.iter().map(|s| s.name).collect::<Vec<_>>(),
    })
}

/// [`person_json_ld`] serialized for a `<script type="application/ld+json">`.
#[must_use]
pub fn person_json_ld_script(profile: &Profile, skills: &[Skill]) -> String {
    // `</` would terminate the surrounding script element early.
    person_json_ld(profile, skills).to_string().replace("</", "<\\/")
}
