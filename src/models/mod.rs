//! Data models for the proxy.
//!
//! This module contains the type definitions for request bodies used by:
//! - The inbound upload API posted by browser clients (`inbound`)
//! - The upstream Anthropic Messages API (`anthropic`)

// Author: kelexine (https://github.com/kelexine)

pub mod anthropic;
pub mod inbound;

pub use anthropic::{Base64Source, ContentBlock, Message, MessagesRequest, Role};
pub use inbound::{ImageInput, InboundRequest};
