//! Clap argument types and output format selection.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use warpgen::models::ConnectionProfile;
use warpgen::output::amnezia::{AmneziaRenderer, ObfuscationParams};
use warpgen::output::json::JsonRenderer;
use warpgen::output::terminal::TerminalRenderer;
use warpgen::output::v2ray::V2rayRenderer;
use warpgen::output::wireguard::WireguardRenderer;
use warpgen::output::ProfileRenderer;

/// Free Cloudflare WARP config generator.
#[derive(Parser, Debug)]
#[command(
    name = "warpgen",
    version = warpgen::constants::VERSION,
    about = "Requests a free WARP credential and renders it as WireGuard, AmneziaWG, and V2Ray configs.",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate a fresh connection profile.
    Generate(GenerateArgs),

    /// Fetch and list the candidate endpoints.
    Endpoints(EndpointsArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Write the WireGuard config text to a file as well.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Use this `host:port` endpoint instead of picking one from the list.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the key-material service URL.
    #[arg(long)]
    pub key_url: Option<String>,

    /// Override the account-issuance service URL.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the endpoint list URL.
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Suppress the banner and non-fatal warnings.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

/// Arguments for the `endpoints` subcommand.
#[derive(Parser, Debug)]
pub struct EndpointsArgs {
    /// Override the endpoint list URL.
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

/// Output format for the generated profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// All three formats with section headers.
    Terminal,
    /// WireGuard INI only.
    Wireguard,
    /// AmneziaWG INI only.
    Amnezia,
    /// `wireguard://` URI only.
    V2ray,
    /// Machine-readable JSON with all formats.
    Json,
}

impl OutputFormat {
    /// Render the profile in this format.
    pub fn render(&self, profile: &ConnectionProfile, amnezia: &ObfuscationParams) -> String {
        match self {
            OutputFormat::Terminal => TerminalRenderer {
                amnezia_params: amnezia.clone(),
            }
            .render(profile),
            OutputFormat::Wireguard => WireguardRenderer.render(profile),
            OutputFormat::Amnezia => AmneziaRenderer::new(amnezia.clone()).render(profile),
            OutputFormat::V2ray => V2rayRenderer.render(profile),
            OutputFormat::Json => JsonRenderer {
                amnezia_params: amnezia.clone(),
            }
            .render(profile),
        }
    }
}
