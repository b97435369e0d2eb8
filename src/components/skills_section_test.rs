use super::*;

#[test]
fn bar_width_follows_level() {
    assert_eq!(skill_bar_style(90), "width: 90%;");
    assert_eq!(skill_bar_style(0), "width: 0%;");
}

#[test]
fn bar_width_is_capped_at_full() {
    assert_eq!(skill_bar_style(250), "width: 100%;");
}
