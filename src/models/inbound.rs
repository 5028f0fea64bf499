// Inbound request body accepted by the proxy routes
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Upload posted by the browser client.
///
/// Field names follow the client's camelCase JSON. Empty strings are treated
/// as absent by the accessors below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    /// Base64-encoded PDF document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_base64: Option<String>,

    /// Base64-encoded page images, in page order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageInput>>,

    /// Replaces the default extraction prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInput {
    pub base64: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl InboundRequest {
    pub fn pdf(&self) -> Option<&str> {
        non_empty(self.pdf_base64.as_deref())
    }

    /// Images, or an empty slice when none were sent.
    pub fn images(&self) -> &[ImageInput] {
        self.images.as_deref().unwrap_or_default()
    }

    pub fn prompt(&self) -> Option<&str> {
        non_empty(self.prompt.as_deref())
    }
}

impl ImageInput {
    pub fn media_type(&self) -> Option<&str> {
        non_empty(self.media_type.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
