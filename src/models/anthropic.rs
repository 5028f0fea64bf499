//! Anthropic Messages API type definitions.
//!
//! Only the request side is typed. Responses from the [Anthropic Messages API](https://docs.anthropic.com/en/api/messages)
//! are relayed to the caller untouched, so they stay `serde_json::Value`.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

/// Anthropic Messages API request structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest {
    /// The model that will complete your prompt.
    pub model: String,

    /// The maximum number of tokens to generate before stopping.
    pub max_tokens: u32,

    /// Input messages. The proxy always sends exactly one user message.
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// Content block types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    Document { source: Base64Source },
    Image { source: Base64Source },
}

/// Inline base64 payload shared by documents and images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Base64Source {
    Base64 { media_type: String, data: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn pdf(data: impl Into<String>) -> Self {
        ContentBlock::Document {
            source: Base64Source::Base64 {
                media_type: PDF_MEDIA_TYPE.to_string(),
                data: data.into(),
            },
        }
    }

    pub fn image(media_type: Option<&str>, data: impl Into<String>) -> Self {
        ContentBlock::Image {
            source: Base64Source::Base64 {
                media_type: media_type.unwrap_or(DEFAULT_IMAGE_MEDIA_TYPE).to_string(),
                data: data.into(),
            },
        }
    }
}

impl MessagesRequest {
    /// Single-turn request carrying `content` as the user message.
    pub fn single_user_turn(model: impl Into<String>, max_tokens: u32, content: Vec<ContentBlock>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: vec![Message {
                role: Role::User,
                content,
            }],
        }
    }
}
