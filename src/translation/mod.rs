// Translation module - upload → Anthropic Messages request
// Author: kelexine (https://github.com/kelexine)

pub mod profile;
pub mod prompts;
pub mod request;

pub use profile::{InputPolicy, ProxyProfile};
pub use prompts::PromptTemplate;
pub use request::{translate_request, validate, ContentMode, TranslatedRequest};
