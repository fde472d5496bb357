use super::*;

#[test]
fn dark_adds_class_and_light_removes_it() {
    let root = MemoryRoot::new();
    apply_theme(&root, "dark", Theme::Dark).expect("apply");
    assert!(root.has_class("dark"));
    apply_theme(&root, "dark", Theme::Light).expect("apply");
    assert!(!root.has_class("dark"));
}

#[test]
fn applying_same_theme_twice_is_idempotent() {
    let root = MemoryRoot::new().with_classes("app");
    apply_theme(&root, "dark", Theme::Dark).expect("apply");
    let after_first = root.class_name();
    apply_theme(&root, "dark", Theme::Dark).expect("apply");
    assert_eq!(root.class_name(), after_first);
    assert_eq!(root.occurrences("dark"), 1);

    apply_theme(&root, "dark", Theme::Light).expect("apply");
    apply_theme(&root, "dark", Theme::Light).expect("apply");
    assert_eq!(root.class_name(), "app");
}

#[test]
fn other_classes_are_untouched() {
    let root = MemoryRoot::new().with_classes("antialiased  h-full");
    apply_theme(&root, "dark", Theme::Dark).expect("apply");
    assert_eq!(root.class_name(), "antialiased h-full dark");
    apply_theme(&root, "dark", Theme::Light).expect("apply");
    assert_eq!(root.class_name(), "antialiased h-full");
}

#[test]
fn custom_class_token_is_honored() {
    let root = MemoryRoot::new();
    apply_theme(&root, "theme-dark", Theme::Dark).expect("apply");
    assert!(root.has_class("theme-dark"));
    assert!(!root.has_class("dark"));
}

#[test]
fn unavailable_root_is_left_alone() {
    let root = MemoryRoot::unavailable();
    apply_theme(&root, "dark", Theme::Dark).expect("apply");
    assert_eq!(root.occurrences("dark"), 0);
}
