use super::*;

#[test]
fn label_offers_the_other_theme() {
    assert_eq!(toggle_label(Theme::Light), "☾");
    assert_eq!(toggle_label(Theme::Dark), "☀");
}
