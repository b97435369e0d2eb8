use content::{PROFILE, SKILLS};

use super::*;

#[test]
fn describes_owner_as_person() {
    let value = person_json_ld(&PROFILE, SKILLS);
    assert_eq!(value["@type"], "Person");
    assert_eq!(value["name"], "Hari Prasad Chinimilli");
    assert_eq!(value["email"], "mailto:hariprasadchinimilli18@gmail.com");
    assert_eq!(value["address"]["addressLocality"], PROFILE.location);
}

#[test]
fn links_social_profiles_and_skills() {
    let value = person_json_ld(&PROFILE, SKILLS);
    let same_as = value["sameAs"].as_array().expect("sameAs array");
    assert_eq!(same_as.len(), 2);
    assert_eq!(value["knowsAbout"].as_array().map(Vec::len), Some(SKILLS.len()));
    assert_eq!(value["knowsAbout"][0], "Python");
}

#[test]
fn script_body_is_valid_json_without_closing_tags() {
    let script = person_json_ld_script(&PROFILE, SKILLS);
    assert!(!script.contains("</"));
    let parsed: Value = serde_json::from_str(&script).expect("script body parses");
    assert_eq!(parsed, person_json_ld(&PROFILE, SKILLS));
}
