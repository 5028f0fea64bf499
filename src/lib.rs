// anthropic-proxy - PDF and image uploads to the Anthropic Messages API
// Author: kelexine (https://github.com/kelexine)

pub mod anthropic;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod translation;
pub mod utils;
