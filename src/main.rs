//! warpgen — free Cloudflare WARP config generator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::path::Path;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use warpgen::api::client::HttpApi;
use warpgen::config::Config;
use warpgen::constants;
use warpgen::env::Env;
use warpgen::generate;
use warpgen::output::wireguard::WireguardRenderer;
use warpgen::output::ProfileRenderer;

use cli::args::{Cli, Command, EndpointsArgs, GenerateArgs, OutputFormat};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::Endpoints(args) => run_endpoints(args).await,
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Run the full pipeline and print the rendered profile.
async fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut config = Config::load(Some(Path::new(".")), &Env::real())
        .context("failed to load configuration")?;

    // CLI flags take priority over config and env
    if let Some(url) = args.key_url {
        config.api.key_url = url;
    }
    if let Some(url) = args.api_url {
        config.api.register_url = url;
    }
    if let Some(url) = args.endpoint_url {
        config.endpoint.list_url = url;
    }
    let endpoint_override = args.endpoint.or(config.endpoint.fixed.clone());
    if let Some(ref endpoint) = endpoint_override {
        if endpoint.trim().is_empty() {
            bail!("--endpoint must be a non-empty host:port");
        }
    }

    let api = HttpApi::new(
        config.api.key_url.clone(),
        config.api.register_url.clone(),
        config.endpoint.list_url.clone(),
    )
    .context("failed to build HTTP client")?;

    if !args.quiet && args.format == OutputFormat::Terminal {
        cli::print_banner();
    }

    let profile = generate::run(&api, endpoint_override.as_deref(), args.quiet)
        .await
        .context("failed to generate config")?;

    let rendered = args.format.render(&profile, &config.amnezia);
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    if let Some(path) = args.output {
        let text = WireguardRenderer.render(&profile);
        std::fs::write(&path, text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !args.quiet {
            eprintln!("Saved WireGuard config to {}", path.display());
        }
    }

    Ok(())
}

/// Fetch and list the candidate endpoints.
async fn run_endpoints(args: EndpointsArgs) -> Result<()> {
    use colored::Colorize;
    use warpgen::api::WarpApi;

    let mut config = Config::load(Some(Path::new(".")), &Env::real())
        .context("failed to load configuration")?;
    if let Some(url) = args.endpoint_url {
        config.endpoint.list_url = url;
    }

    let api = HttpApi::new(
        config.api.key_url.clone(),
        config.api.register_url.clone(),
        config.endpoint.list_url.clone(),
    )
    .context("failed to build HTTP client")?;

    let list = api
        .fetch_endpoints()
        .await
        .context("failed to fetch endpoint list")?;

    if list.ipv4.is_empty() {
        println!(
            "No endpoints listed. The fallback is {}.",
            constants::FALLBACK_ENDPOINT.bold()
        );
        return Ok(());
    }

    for endpoint in &list.ipv4 {
        println!("  {endpoint}");
    }
    println!(
        "{}",
        format!(" {} endpoint(s)", list.ipv4.len()).dimmed()
    );

    Ok(())
}
