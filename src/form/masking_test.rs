use super::*;
use crate::form::validation::FieldRules;

fn name_pattern() -> Regex {
    FieldRules::compile_pattern("[A-Za-zÀ-ÿ' -]+").unwrap()
}

#[test]
fn legal_keystrokes_are_accepted() {
    let pattern = name_pattern();
    assert_eq!(mask(&pattern, "J"), MaskOutcome::Accepted);
    assert_eq!(mask(&pattern, "Jo O'Neil-Smith"), MaskOutcome::Accepted);
    assert_eq!(mask(&pattern, "Zoë"), MaskOutcome::Accepted);
}

#[test]
fn illegal_keystroke_restores_previous_value() {
    let pattern = name_pattern();
    let mut typed = String::new();
    for c in "Ada7 Lovelace!".chars() {
        let before = typed.clone();
        typed.push(c);
        if let MaskOutcome::Rejected { restored } = mask(&pattern, &typed) {
            assert_eq!(restored, before, "illegal {c:?} must not persist");
            typed = restored;
        }
    }
    assert_eq!(typed, "Ada Lovelace");
}

#[test]
fn multibyte_illegal_character_is_removed_whole() {
    let pattern = name_pattern();
    assert_eq!(mask(&pattern, "Ana😀"), MaskOutcome::Rejected { restored: "Ana".into() });
}

#[test]
fn clearing_the_field_is_not_illegal() {
    assert_eq!(mask(&name_pattern(), ""), MaskOutcome::Accepted);
}

#[test]
fn word_class_rejects_non_ascii_letters() {
    let pattern = FieldRules::compile_pattern(r"[\w ]+").unwrap();
    assert_eq!(mask(&pattern, "Zo"), MaskOutcome::Accepted);
    assert_eq!(mask(&pattern, "Zoé"), MaskOutcome::Rejected { restored: "Zo".into() });
}
