// Property tests for upload translation
// Author: kelexine (https://github.com/kelexine)

use anthropic_proxy::config::AnthropicConfig;
use anthropic_proxy::models::anthropic::{Base64Source, ContentBlock};
use anthropic_proxy::models::inbound::{ImageInput, InboundRequest};
use anthropic_proxy::translation::{translate_request, ContentMode, ProxyProfile};
use proptest::prelude::*;

fn image_input() -> impl Strategy<Value = ImageInput> {
    (
        "[A-Za-z0-9+/]{1,32}={0,2}",
        prop::option::of(prop_oneof![
            Just("image/png".to_string()),
            Just("image/webp".to_string()),
            Just("image/jpeg".to_string()),
            Just(String::new()),
        ]),
    )
        .prop_map(|(base64, media_type)| ImageInput { base64, media_type })
}

proptest! {
    #[test]
    fn images_are_forwarded_in_order_and_verbatim(images in prop::collection::vec(image_input(), 1..12)) {
        let inbound = InboundRequest {
            images: Some(images.clone()),
            ..Default::default()
        };

        let translated = translate_request(&inbound, &ProxyProfile::MENU, &AnthropicConfig::default()).unwrap();
        prop_assert_eq!(translated.mode, ContentMode::Images);

        let content = &translated.body.messages[0].content;
        prop_assert_eq!(content.len(), images.len() + 1);
        let is_text = matches!(content[0], ContentBlock::Text { .. });
        prop_assert!(is_text);

        for (block, input) in content[1..].iter().zip(&images) {
            let expected_media_type = match input.media_type.as_deref() {
                Some(mt) if !mt.is_empty() => mt,
                _ => "image/jpeg",
            };
            match block {
                ContentBlock::Image { source: Base64Source::Base64 { media_type, data } } => {
                    prop_assert_eq!(media_type.as_str(), expected_media_type);
                    prop_assert_eq!(data, &input.base64);
                }
                other => prop_assert!(false, "unexpected block {:?}", other),
            }
        }
    }

    #[test]
    fn pdf_data_is_never_reencoded(pdf in "[A-Za-z0-9+/]{1,64}={0,2}", prompt in prop::option::of(".{0,40}")) {
        let inbound = InboundRequest {
            pdf_base64: Some(pdf.clone()),
            prompt: prompt.clone(),
            ..Default::default()
        };

        let translated = translate_request(&inbound, &ProxyProfile::MENU, &AnthropicConfig::default()).unwrap();
        let content = &translated.body.messages[0].content;

        prop_assert_eq!(content.len(), 2);
        prop_assert_eq!(&content[1], &ContentBlock::pdf(pdf));

        let expected_prompt = match prompt.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => ProxyProfile::MENU.template.text().to_string(),
        };
        prop_assert_eq!(&content[0], &ContentBlock::text(expected_prompt));
    }
}
