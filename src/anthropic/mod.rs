//! Upstream client for the Anthropic Messages API.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod client;

pub use client::{AnthropicClient, UpstreamResponse};
