use tableau_core::{
    CharacterSlot, InstructionTemplate, ReferenceAsset, ReferenceBoard, RequestPart, assemble,
};
use tableau_error::ValidationErrorKind;

fn asset(seed: u8) -> ReferenceAsset {
    ReferenceAsset::new(vec![seed, seed.wrapping_add(1), seed.wrapping_add(2)], "image/png")
}

fn background() -> ReferenceAsset {
    ReferenceAsset::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg")
}

#[test]
fn test_no_selected_character_fails_regardless_of_instruction() {
    let slots = vec![
        CharacterSlot::empty(0),
        CharacterSlot::with_asset(1, asset(1), false),
        CharacterSlot::empty(2).set_selected(true),
    ];

    for instruction in ["waving", "", "   ", "sitting on a bench"] {
        let err = assemble(&slots, Some(&background()), true, instruction)
            .expect_err("assembly must fail without a selected character");
        assert_eq!(*err.kind(), ValidationErrorKind::NoCharacterSelected);
    }
}

#[test]
fn test_zero_slots_is_accepted_as_input_but_fails_validation() {
    let err = assemble(&[], None, false, "waving").expect_err("no slots");
    assert_eq!(*err.kind(), ValidationErrorKind::NoCharacterSelected);
}

#[test]
fn test_blank_instruction_fails() {
    let slots = vec![CharacterSlot::with_asset(0, asset(1), true)];
    for instruction in ["", " ", "\n\t "] {
        let err = assemble(&slots, None, false, instruction).expect_err("blank instruction");
        assert_eq!(*err.kind(), ValidationErrorKind::EmptyInstruction);
    }
}

#[test]
fn test_character_count_matches_selected_and_present() {
    let slots = vec![
        CharacterSlot::with_asset(0, asset(1), true),
        CharacterSlot::with_asset(1, asset(2), false),
        CharacterSlot::empty(2),
        CharacterSlot::with_asset(3, asset(3), true),
        CharacterSlot::with_asset(4, asset(4), true),
        CharacterSlot::with_asset(5, asset(5), true),
        CharacterSlot::with_asset(6, asset(6), true),
    ];

    let request = assemble(&slots, None, false, "jumping").expect("valid input");
    assert_eq!(request.characters().len(), 5);

    // Slot order is preserved
    let first = request.characters()[0].decode().expect("valid base64");
    let second = request.characters()[1].decode().expect("valid base64");
    assert_eq!(first[0], 1);
    assert_eq!(second[0], 3);
}

#[test]
fn test_scenario_two_characters_no_background() {
    let slots = vec![
        CharacterSlot::with_asset(0, asset(10), true),
        CharacterSlot::with_asset(1, asset(20), true),
        CharacterSlot::empty(2),
    ];

    let request = assemble(&slots, None, false, "waving").expect("valid input");

    assert_eq!(request.characters().len(), 2);
    assert!(request.background().is_none());
    assert_eq!(*request.template(), InstructionTemplate::Base);
    assert!(request.prompt().contains("waving"));

    let body = request.provider_request();
    assert_eq!(body.image_count(), 2);
    assert_eq!(body.parts().len(), 3);
    assert!(matches!(body.parts().last(), Some(RequestPart::Text(_))));
}

#[test]
fn test_scenario_one_character_with_fixed_background() {
    let slots = vec![CharacterSlot::with_asset(0, asset(10), true)];

    let request =
        assemble(&slots, Some(&background()), true, "sitting on a bench").expect("valid input");

    assert_eq!(request.characters().len(), 1);
    let encoded_background = request.background().as_ref().expect("background used");
    assert_eq!(encoded_background.mime(), "image/jpeg");
    assert_eq!(*request.template(), InstructionTemplate::FixedBackground);
    assert!(request.prompt().contains("sitting on a bench"));
    assert!(request.prompt().contains("Do not change the background."));

    // Characters first, background second, text last
    let body = request.provider_request();
    match body.parts().as_slice() {
        [RequestPart::InlineImage(c), RequestPart::InlineImage(b), RequestPart::Text(t)] => {
            assert_eq!(c.mime(), "image/png");
            assert_eq!(b.mime(), "image/jpeg");
            assert_eq!(t, request.prompt());
        }
        other => panic!("unexpected parts: {:?}", other),
    }
}

#[test]
fn test_background_present_but_unused_is_not_sent() {
    let slots = vec![CharacterSlot::with_asset(0, asset(10), true)];

    let request = assemble(&slots, Some(&background()), false, "waving").expect("valid input");

    assert!(request.background().is_none());
    assert_eq!(*request.template(), InstructionTemplate::Base);
    assert_eq!(request.provider_request().image_count(), 1);
}

#[test]
fn test_use_background_without_asset_uses_base_template() {
    let slots = vec![CharacterSlot::with_asset(0, asset(10), true)];

    let request = assemble(&slots, None, true, "waving").expect("valid input");

    assert!(*request.use_background());
    assert!(request.background().is_none());
    assert_eq!(*request.template(), InstructionTemplate::Base);
}

#[test]
fn test_assembly_is_repeatable() {
    let board = ReferenceBoard::default()
        .attach_character(0, asset(1))
        .set_character_selected(0, true)
        .attach_background(background())
        .set_use_background(true);

    let first = board.assemble("dancing").expect("valid input");
    let second = board.assemble("dancing").expect("valid input");
    assert_eq!(first, second);
}

#[test]
fn test_provider_bodies_share_encoded_data() {
    let slots = vec![CharacterSlot::with_asset(0, asset(10), true)];
    let request = assemble(&slots, None, false, "waving").expect("valid input");

    let first = request.provider_request();
    let second = request.provider_request();
    assert_eq!(first, second);

    match (&first.parts()[0], &second.parts()[0]) {
        (RequestPart::InlineImage(a), RequestPart::InlineImage(b)) => {
            assert!(a.shares_data_with(b));
        }
        other => panic!("unexpected parts: {:?}", other),
    }
}

#[test]
fn test_instruction_is_embedded_as_typed() {
    let slots = vec![CharacterSlot::with_asset(0, asset(10), true)];
    let request = assemble(&slots, None, false, "  waving  ").expect("valid input");
    assert_eq!(request.instruction(), "  waving  ");
    assert!(request.prompt().contains("\"  waving  \""));
}

#[test]
fn test_empty_payloads_are_never_sent() {
    let empty = ReferenceAsset::new(Vec::new(), "image/png");
    let slots = vec![
        CharacterSlot::with_asset(0, empty.clone(), true),
        CharacterSlot::with_asset(1, asset(1), true),
    ];

    let request = assemble(&slots, Some(&empty), true, "waving").expect("one usable character");

    assert_eq!(request.characters().len(), 1);
    assert!(request.background().is_none());
    assert_eq!(*request.template(), InstructionTemplate::Base);

    let only_empty = vec![CharacterSlot::with_asset(0, empty, true)];
    let err = assemble(&only_empty, None, false, "waving").expect_err("nothing to send");
    assert_eq!(*err.kind(), ValidationErrorKind::NoCharacterSelected);
}
