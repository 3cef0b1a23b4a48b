use tableau_core::{PreviewRegistry, PreviewSet, ReferenceAsset, ReferenceBoard, SlotKey};

fn asset(seed: u8) -> ReferenceAsset {
    ReferenceAsset::new(vec![seed; 4], "image/png")
}

#[test]
fn test_handle_released_on_drop() {
    let registry = PreviewRegistry::new();
    let handle = registry.acquire(&asset(1));
    let id = handle.id();

    assert!(registry.is_live(id));
    assert!(handle.url().starts_with("data:image/png;base64,"));

    drop(handle);
    assert!(!registry.is_live(id));
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn test_set_releases_replaced_preview() {
    let registry = PreviewRegistry::new();
    let mut previews = PreviewSet::new(registry.clone());

    let board = ReferenceBoard::default().attach_character(0, asset(1));
    previews.sync(&board);
    let first_id = previews
        .get(SlotKey::Character(0))
        .map(|handle| handle.id())
        .expect("preview acquired");

    let board = board.attach_character(0, asset(2));
    previews.sync(&board);
    let second_id = previews
        .get(SlotKey::Character(0))
        .map(|handle| handle.id())
        .expect("preview acquired");

    assert_ne!(first_id, second_id);
    assert!(!registry.is_live(first_id));
    assert!(registry.is_live(second_id));
    assert_eq!(registry.live_count(), 1);
}

#[test]
fn test_unchanged_slot_keeps_its_preview() {
    let registry = PreviewRegistry::new();
    let mut previews = PreviewSet::new(registry.clone());

    let board = ReferenceBoard::default()
        .attach_character(0, asset(1))
        .attach_background(asset(5));
    previews.sync(&board);
    let id = previews.get(SlotKey::Character(0)).map(|h| h.id());

    // Selecting does not replace the image
    previews.sync(&board.set_character_selected(0, true));
    assert_eq!(previews.get(SlotKey::Character(0)).map(|h| h.id()), id);
    assert_eq!(previews.len(), 2);
}

#[test]
fn test_removal_and_teardown_release_everything() {
    let registry = PreviewRegistry::new();
    let mut previews = PreviewSet::new(registry.clone());

    let board = ReferenceBoard::default()
        .attach_character(0, asset(1))
        .attach_character(1, asset(2))
        .attach_background(asset(3));
    previews.sync(&board);
    assert_eq!(registry.live_count(), 3);

    previews.sync(&board.remove_background());
    assert_eq!(registry.live_count(), 2);
    assert!(previews.get(SlotKey::Background).is_none());

    drop(previews);
    assert_eq!(registry.live_count(), 0);
}
