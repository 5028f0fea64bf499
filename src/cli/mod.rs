// CLI module for anthropic-proxy
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// anthropic-proxy - forwards PDF and image uploads to the Anthropic Messages API
#[derive(Parser, Debug)]
#[command(name = "anthropic-proxy", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.anthropic-proxy/config.toml, if present)
    #[arg(short, long, env = "ANTHROPIC_PROXY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
