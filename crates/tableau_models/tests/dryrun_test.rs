use tableau_core::{CharacterSlot, ReferenceAsset, assemble};
use tableau_interface::ImageProvider;
use tableau_models::DryrunProvider;

#[tokio::test]
async fn test_dryrun_echoes_first_reference() {
    let slots = vec![
        CharacterSlot::with_asset(0, ReferenceAsset::new(vec![7, 7, 7], "image/png"), true),
        CharacterSlot::with_asset(1, ReferenceAsset::new(vec![8, 8, 8], "image/png"), true),
    ];
    let request = assemble(&slots, None, false, "waving").expect("valid input");

    let response = DryrunProvider
        .generate_images(&request.provider_request())
        .await
        .expect("dryrun never fails");

    let images = response.into_images();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].decode().expect("valid base64"), vec![7, 7, 7]);
}
