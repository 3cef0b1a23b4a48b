use tableau::{FailureKind, InstructionTemplate, load_board, load_reference};

#[tokio::test]
async fn test_load_reference_infers_mime() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("hero.JPG");
    std::fs::write(&path, [0xFF, 0xD8, 0xFF]).expect("write image");

    let asset = load_reference(&path).await.expect("loaded");

    assert_eq!(asset.mime(), "image/jpeg");
    assert_eq!(asset.bytes(), &[0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn test_unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").expect("write file");

    let err = load_reference(&path).await.expect_err("unsupported");
    assert_eq!(err.failure_kind(), FailureKind::GenerationFailure);
    assert!(err.to_string().contains("Unsupported"));
}

#[tokio::test]
async fn test_load_board_selects_every_character_and_uses_background() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut characters = Vec::new();
    for name in ["a.png", "b.png"] {
        let path = dir.path().join(name);
        std::fs::write(&path, [1, 2, 3]).expect("write character");
        characters.push(path);
    }
    let background = dir.path().join("park.webp");
    std::fs::write(&background, [9, 9]).expect("write background");

    let board = load_board(&characters, Some(background.as_path()), true)
        .await
        .expect("board");

    assert_eq!(board.selected_count(), 2);
    let request = board.assemble("sitting on a bench").expect("valid board");
    assert_eq!(*request.template(), InstructionTemplate::FixedBackground);
    assert_eq!(request.provider_request().image_count(), 3);
}

#[tokio::test]
async fn test_load_board_grows_past_default_slots() {
    let dir = tempfile::tempdir().expect("temp dir");
    let characters: Vec<_> = (0..7)
        .map(|i| {
            let path = dir.path().join(format!("c{}.png", i));
            std::fs::write(&path, [i as u8]).expect("write character");
            path
        })
        .collect();

    let board = load_board(&characters, None, false).await.expect("board");
    assert_eq!(board.characters().len(), 7);
    assert_eq!(board.selected_count(), 7);
}

#[tokio::test]
async fn test_empty_reference_file_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("blank.png");
    std::fs::write(&path, b"").expect("write empty file");

    let err = load_reference(&path).await.expect_err("empty file");
    assert!(err.to_string().contains("empty"));

    let err = load_board(&[path], None, false).await.expect_err("empty character");
    assert_eq!(err.failure_kind(), FailureKind::GenerationFailure);
}
