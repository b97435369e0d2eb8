use std::collections::HashSet;

use crate::{CERTIFICATIONS, CertSummary, PROFILE, PROJECTS, SKILLS, SkillIcon, site};

#[test]
fn profile_name_matches_owner_constant() {
    assert_eq!(PROFILE.name, site::OWNER_NAME);
    assert_eq!(PROFILE.name, "Hari Prasad Chinimilli");
}

#[test]
fn profile_links_use_expected_schemes() {
    assert_eq!(PROFILE.mailto(), "mailto:hariprasadchinimilli18@gmail.com");
    assert_eq!(PROFILE.tel(), "tel:9346416669");
    assert!(PROFILE.linkedin_url.starts_with("https://"));
    assert!(PROFILE.github_url.starts_with("https://"));
}

#[test]
fn form_relay_targets_owner_address() {
    assert!(site::FORM_RELAY_URL.starts_with("https://formsubmit.co/"));
    assert!(site::FORM_RELAY_URL.ends_with(PROFILE.email));
}

#[test]
fn asset_paths_are_root_relative() {
    for path in [site::PROFILE_IMAGE, site::PLACEHOLDER_IMAGE, site::RESUME_PATH] {
        assert!(path.starts_with('/'), "{path} should be root-relative");
    }
    assert_ne!(site::PROFILE_IMAGE, site::PLACEHOLDER_IMAGE);
}

#[test]
fn skill_levels_are_percentages() {
    assert!(!SKILLS.is_empty());
    for skill in SKILLS {
        assert!(skill.level <= 100, "{} has level {}", skill.name, skill.level);
    }
}

#[test]
fn skill_names_are_unique() {
    let names = SKILLS.iter().map(|s| s.name).collect::<HashSet<_>>();
    assert_eq!(names.len(), SKILLS.len());
}

#[test]
fn projects_have_tags_and_external_links() {
    assert_eq!(PROJECTS.len(), 3);
    for project in PROJECTS {
        assert!(!project.technologies.is_empty(), "{} has no tags", project.title);
        assert!(project.link.starts_with("https://"));
        assert!(project.image.starts_with("https://"));
    }
}

#[test]
fn certifications_carry_a_non_empty_summary() {
    assert!(!CERTIFICATIONS.is_empty());
    for cert in CERTIFICATIONS {
        match cert.summary {
            CertSummary::Description(text) => assert!(!text.is_empty()),
            CertSummary::Details(items) => assert!(!items.is_empty()),
        }
    }
}

#[test]
fn internship_certificate_lists_identifiers() {
    let intern = CERTIFICATIONS
        .iter()
        .find(|c| c.title.contains("TechSaksham"))
        .expect("internship certificate present");
    assert_eq!(intern.student_id, Some("STU66583fdd3b8621717059549"));
    assert_eq!(intern.certificate_id, Some("TSPIN24_590120"));
}

#[test]
fn skill_serializes_with_lowercase_icon() {
    let value = serde_json::to_value(SKILLS[0]).expect("serialize skill");
    assert_eq!(value["name"], "Python");
    assert_eq!(value["level"], 90);
    assert_eq!(value["icon"], "code");
    assert_eq!(serde_json::to_value(SkillIcon::Globe).expect("serialize icon"), "globe");
}

#[test]
fn cert_summary_serializes_externally_tagged() {
    let value = serde_json::to_value(CERTIFICATIONS[0].summary).expect("serialize summary");
    assert!(value.get("description").is_some());
    let value = serde_json::to_value(CERTIFICATIONS[1].summary).expect("serialize summary");
    assert_eq!(value["details"].as_array().map(Vec::len), Some(4));
}
