use serde_json::json;
use tableau_core::{CharacterSlot, ProviderRequest, ReferenceAsset, ResponsePart, assemble};
use tableau_error::ProviderErrorKind;
use tableau_models::gemini::{
    GenerateContentResponse, from_generate_content_response, to_generate_content_request,
};

fn request_with_background() -> ProviderRequest {
    let slots = vec![CharacterSlot::with_asset(
        0,
        ReferenceAsset::new(vec![1, 2, 3], "image/png"),
        true,
    )];
    let background = ReferenceAsset::new(vec![4, 5, 6], "image/jpeg");
    assemble(&slots, Some(&background), true, "sitting on a bench")
        .expect("valid input")
        .provider_request()
}

#[test]
fn test_request_body_matches_gemini_shape() {
    let body = to_generate_content_request(&request_with_background()).expect("build body");
    let value = serde_json::to_value(&body).expect("serialize body");

    let parts = value["contents"][0]["parts"]
        .as_array()
        .expect("parts array");
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0]["inlineData"]["mimeType"], json!("image/png"));
    assert_eq!(parts[0]["inlineData"]["data"], json!("AQID"));
    assert_eq!(parts[1]["inlineData"]["mimeType"], json!("image/jpeg"));
    assert!(
        parts[2]["text"]
            .as_str()
            .is_some_and(|text| text.contains("sitting on a bench"))
    );
    assert!(parts[2].get("inlineData").is_none());
    assert!(value["contents"][0].get("role").is_none());
    assert_eq!(
        value["generationConfig"]["responseModalities"],
        json!(["IMAGE", "TEXT"])
    );
}

#[test]
fn test_response_images_and_text_are_extracted_in_order() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    {"text": "Here you go"},
                    {"inlineData": {"mimeType": "image/png", "data": "AAAA"}},
                    {"inline_data": {"mime_type": "image/webp", "data": "BBBB"}}
                ]
            },
            "finishReason": "STOP"
        }]
    }))
    .expect("valid response json");

    let converted = from_generate_content_response(response).expect("valid response");
    assert_eq!(converted.image_count(), 2);
    assert!(matches!(&converted.parts[0], ResponsePart::Text(t) if t == "Here you go"));

    let images = converted.into_images();
    assert_eq!(images[0].data(), "AAAA");
    assert_eq!(images[1].mime(), "image/webp");
}

#[test]
fn test_only_first_candidate_is_read() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [
            {"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "AAAA"}}]}},
            {"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "BBBB"}}]}}
        ]
    }))
    .expect("valid response json");

    let converted = from_generate_content_response(response).expect("valid response");
    assert_eq!(converted.image_count(), 1);
}

#[test]
fn test_blocked_prompt_yields_no_images() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "promptFeedback": {"blockReason": "SAFETY"}
    }))
    .expect("valid response json");

    let converted = from_generate_content_response(response).expect("valid response");
    assert_eq!(converted.image_count(), 0);
    assert!(converted.parts.is_empty());
}

#[test]
fn test_text_only_candidate_yields_no_images() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{"content": {"parts": [{"text": "I cannot draw that."}]}}]
    }))
    .expect("valid response json");

    let converted = from_generate_content_response(response).expect("valid response");
    assert_eq!(converted.image_count(), 0);
    assert_eq!(converted.parts.len(), 1);
}

#[test]
fn test_missing_mime_defaults_to_png() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{"content": {"parts": [{"inlineData": {"data": "AAAA"}}]}}]
    }))
    .expect("valid response json");

    let images = from_generate_content_response(response)
        .expect("valid response")
        .into_images();
    assert_eq!(images[0].mime(), "image/png");
}

#[test]
fn test_invalid_base64_is_rejected() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "not base64!"}}]}}]
    }))
    .expect("valid response json");

    let err = from_generate_content_response(response).expect_err("invalid image data");
    assert!(matches!(err.kind(), ProviderErrorKind::InvalidImageData(_)));
    assert!(!err.kind().is_rejection());
}
