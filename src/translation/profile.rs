// Proxy profiles: which inputs a route accepts and which prompt it defaults to
// Author: kelexine (https://github.com/kelexine)

use super::prompts::PromptTemplate;

/// Inputs a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPolicy {
    /// A PDF, or a non-empty image list. The PDF wins when both are sent.
    PdfOrImages,
    /// A PDF only; images are ignored.
    PdfOnly,
}

impl InputPolicy {
    /// Error text returned with 400 when the required input is missing.
    pub fn missing_input_message(self) -> &'static str {
        match self {
            InputPolicy::PdfOrImages => "pdfBase64 or images array is required",
            InputPolicy::PdfOnly => "pdfBase64 is required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyProfile {
    pub name: &'static str,
    pub input: InputPolicy,
    pub template: PromptTemplate,
}

impl ProxyProfile {
    /// `/anthropic-proxy`: PDFs or photographed pages, current schema.
    pub const MENU: ProxyProfile = ProxyProfile {
        name: "menu",
        input: InputPolicy::PdfOrImages,
        template: PromptTemplate::MenuV2,
    };

    /// `/anthropic-pdf-proxy`: PDFs only, first-generation schema.
    pub const MENU_PDF: ProxyProfile = ProxyProfile {
        name: "menu_pdf",
        input: InputPolicy::PdfOnly,
        template: PromptTemplate::MenuV1,
    };
}
