// Request translation (upload → Anthropic Messages)
// Author: kelexine (https://github.com/kelexine)

use super::profile::{InputPolicy, ProxyProfile};
use crate::config::AnthropicConfig;
use crate::error::{ProxyError, Result};
use crate::models::anthropic::{ContentBlock, MessagesRequest};
use crate::models::inbound::{ImageInput, InboundRequest};
use tracing::debug;

/// How the uploaded file is presented to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    Pdf,
    Images,
}

impl ContentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentMode::Pdf => "pdf",
            ContentMode::Images => "images",
        }
    }
}

/// Outbound request plus the mode it was built in.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedRequest {
    pub body: MessagesRequest,
    pub mode: ContentMode,
}

impl TranslatedRequest {
    /// `anthropic-beta` value to send, if any. Only documents need one.
    pub fn beta_header<'a>(&self, config: &'a AnthropicConfig) -> Option<&'a str> {
        match self.mode {
            ContentMode::Pdf => Some(config.pdf_beta.as_str()),
            ContentMode::Images => None,
        }
    }
}

/// Check that `inbound` carries what `profile` requires.
///
/// Runs before credential lookup so bad uploads are always reported as 400.
pub fn validate(inbound: &InboundRequest, profile: &ProxyProfile) -> Result<()> {
    let present = match profile.input {
        InputPolicy::PdfOrImages => inbound.pdf().is_some() || !inbound.images().is_empty(),
        InputPolicy::PdfOnly => inbound.pdf().is_some(),
    };

    if present {
        Ok(())
    } else {
        Err(ProxyError::InvalidRequest(
            profile.input.missing_input_message().to_string(),
        ))
    }
}

/// Translate a validated upload into a Messages API request.
pub fn translate_request(
    inbound: &InboundRequest,
    profile: &ProxyProfile,
    config: &AnthropicConfig,
) -> Result<TranslatedRequest> {
    validate(inbound, profile)?;

    let prompt = inbound.prompt().unwrap_or_else(|| profile.template.text());

    let (mode, file_blocks) = match (inbound.pdf(), profile.input) {
        (Some(pdf), _) => (ContentMode::Pdf, vec![ContentBlock::pdf(pdf)]),
        (None, InputPolicy::PdfOrImages) => (ContentMode::Images, image_blocks(inbound.images())),
        (None, InputPolicy::PdfOnly) => {
            return Err(ProxyError::InvalidRequest(
                profile.input.missing_input_message().to_string(),
            ))
        }
    };

    debug!(
        "Translated {} upload: {} file block(s), custom prompt: {}",
        mode.as_str(),
        file_blocks.len(),
        inbound.prompt().is_some()
    );

    let mut content = Vec::with_capacity(file_blocks.len() + 1);
    content.push(ContentBlock::text(prompt));
    content.extend(file_blocks);

    Ok(TranslatedRequest {
        body: MessagesRequest::single_user_turn(&config.model, config.max_tokens, content),
        mode,
    })
}

fn image_blocks(images: &[ImageInput]) -> Vec<ContentBlock> {
    images
        .iter()
        .map(|img| ContentBlock::image(img.media_type(), &img.base64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::anthropic::Base64Source;
    use crate::translation::prompts::PromptTemplate;

    fn image(data: &str, media_type: Option<&str>) -> ImageInput {
        ImageInput {
            base64: data.to_string(),
            media_type: media_type.map(str::to_string),
        }
    }

    fn source(block: &ContentBlock) -> (&str, &str) {
        match block {
            ContentBlock::Document { source: Base64Source::Base64 { media_type, data } }
            | ContentBlock::Image { source: Base64Source::Base64 { media_type, data } } => {
                (media_type.as_str(), data.as_str())
            }
            ContentBlock::Text { .. } => panic!("expected a file block"),
        }
    }

    #[test]
    fn test_pdf_mode() {
        let inbound = InboundRequest {
            pdf_base64: Some("JVBERi0xLjQ=".to_string()),
            ..Default::default()
        };

        let config = AnthropicConfig::default();
        let translated = translate_request(&inbound, &ProxyProfile::MENU, &config).unwrap();

        assert_eq!(translated.mode, ContentMode::Pdf);
        assert_eq!(translated.beta_header(&config), Some("pdfs-2024-09-25"));
        assert_eq!(translated.body.model, "claude-sonnet-4-5");
        assert_eq!(translated.body.max_tokens, 16384);
        assert_eq!(translated.body.messages.len(), 1);

        let content = &translated.body.messages[0].content;
        assert_eq!(content.len(), 2);
        assert_eq!(content[0], ContentBlock::text(PromptTemplate::MenuV2.text()));
        assert!(matches!(content[1], ContentBlock::Document { .. }));
        assert_eq!(source(&content[1]), ("application/pdf", "JVBERi0xLjQ="));
    }

    #[test]
    fn test_image_mode_preserves_order_and_defaults_media_type() {
        let inbound = InboundRequest {
            images: Some(vec![image("AAA", Some("image/png")), image("BBB", None)]),
            ..Default::default()
        };

        let config = AnthropicConfig::default();
        let translated = translate_request(&inbound, &ProxyProfile::MENU, &config).unwrap();

        assert_eq!(translated.mode, ContentMode::Images);
        assert_eq!(translated.beta_header(&config), None);

        let content = &translated.body.messages[0].content;
        assert_eq!(content.len(), 3);
        assert!(matches!(content[0], ContentBlock::Text { .. }));
        assert!(matches!(content[1], ContentBlock::Image { .. }));
        assert_eq!(source(&content[1]), ("image/png", "AAA"));
        assert_eq!(source(&content[2]), ("image/jpeg", "BBB"));
    }

    #[test]
    fn test_custom_prompt() {
        let inbound = InboundRequest {
            pdf_base64: Some("JVBERi0=".to_string()),
            prompt: Some("X".to_string()),
            ..Default::default()
        };

        let translated =
            translate_request(&inbound, &ProxyProfile::MENU, &AnthropicConfig::default()).unwrap();
        assert_eq!(translated.body.messages[0].content[0], ContentBlock::text("X"));
    }

    #[test]
    fn test_empty_prompt_uses_template() {
        let inbound = InboundRequest {
            pdf_base64: Some("JVBERi0=".to_string()),
            prompt: Some(String::new()),
            ..Default::default()
        };

        let translated =
            translate_request(&inbound, &ProxyProfile::MENU_PDF, &AnthropicConfig::default()).unwrap();
        assert_eq!(
            translated.body.messages[0].content[0],
            ContentBlock::text(PromptTemplate::MenuV1.text())
        );
    }

    #[test]
    fn test_pdf_takes_precedence_over_images() {
        let inbound = InboundRequest {
            pdf_base64: Some("JVBERi0=".to_string()),
            images: Some(vec![image("AAA", None)]),
            ..Default::default()
        };

        let translated =
            translate_request(&inbound, &ProxyProfile::MENU, &AnthropicConfig::default()).unwrap();
        let content = &translated.body.messages[0].content;

        assert_eq!(translated.mode, ContentMode::Pdf);
        assert_eq!(content.len(), 2);
        assert!(matches!(content[1], ContentBlock::Document { .. }));
    }

    #[test]
    fn test_empty_pdf_falls_back_to_images() {
        let inbound = InboundRequest {
            pdf_base64: Some(String::new()),
            images: Some(vec![image("AAA", None)]),
            ..Default::default()
        };

        let translated =
            translate_request(&inbound, &ProxyProfile::MENU, &AnthropicConfig::default()).unwrap();
        assert_eq!(translated.mode, ContentMode::Images);
    }

    #[test]
    fn test_missing_input() {
        let empty_images = InboundRequest {
            images: Some(vec![]),
            ..Default::default()
        };

        for inbound in [InboundRequest::default(), empty_images] {
            let err = validate(&inbound, &ProxyProfile::MENU).unwrap_err();
            assert!(matches!(err, ProxyError::InvalidRequest(_)));
            assert_eq!(err.to_string(), "pdfBase64 or images array is required");
        }
    }

    #[test]
    fn test_pdf_only_profile_rejects_images() {
        let inbound = InboundRequest {
            images: Some(vec![image("AAA", None)]),
            ..Default::default()
        };

        let err = translate_request(&inbound, &ProxyProfile::MENU_PDF, &AnthropicConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "pdfBase64 is required");
    }

    #[test]
    fn test_configured_model_and_budget() {
        let config = AnthropicConfig {
            model: "claude-opus-4-1".to_string(),
            max_tokens: 1024,
            ..Default::default()
        };
        let inbound = InboundRequest {
            pdf_base64: Some("JVBERi0=".to_string()),
            ..Default::default()
        };

        let translated = translate_request(&inbound, &ProxyProfile::MENU, &config).unwrap();
        assert_eq!(translated.body.model, "claude-opus-4-1");
        assert_eq!(translated.body.max_tokens, 1024);
    }
}
