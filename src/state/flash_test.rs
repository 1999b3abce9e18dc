use super::*;

#[test]
fn starts_empty() {
    let flash = FlashState::new();
    assert_eq!(flash.current(), None);
}

#[test]
fn set_then_current_returns_message() {
    let flash = FlashState::new();
    flash.set("Classe créée", FlashKind::Success);
    assert_eq!(
        flash.current(),
        Some(FlashMessage { text: "Classe créée".to_owned(), kind: FlashKind::Success })
    );
}

#[test]
fn set_replaces_previous_message() {
    let flash = FlashState::new();
    flash.set("first", FlashKind::Info);
    flash.set("second", FlashKind::Error);
    assert_eq!(flash.current().map(|m| m.text), Some("second".to_owned()));
}

#[test]
fn clear_removes_message() {
    let flash = FlashState::new();
    flash.set("something", FlashKind::Info);
    flash.clear();
    assert_eq!(flash.current(), None);
}

#[test]
fn clones_share_the_slot() {
    let flash = FlashState::new();
    let other = flash.clone();
    flash.set("shared", FlashKind::Info);
    assert_eq!(other.current().map(|m| m.text), Some("shared".to_owned()));
}
