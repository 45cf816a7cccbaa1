#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for envelope.
//!
//! Resolves country input to canonical codes, previews city line layouts,
//! and renders batches of addresses as mailable text, markup, or JSON.
//!
//! Home country precedence: `--home-country`, then the
//! `ENVELOPE_HOME_COUNTRY` environment variable, then `--config`, then
//! `US`.

mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use envelope_address::{Address, AddressConfig, Renderer};
use serde::Serialize;

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// Normalize and render postal addresses.
#[derive(Parser)]
#[command(name = "envelope")]
#[command(about = "Normalize and render postal addresses")]
struct Cli {
    /// Path to a TOML config file (`home_country`, `assets_dir`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Country mail is sent from when an address sets no origin.
    #[arg(long)]
    home_country: Option<String>,

    /// Directory of `<ORIGIN>.toml` country name tables.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the canonical code for each country input, or `-`.
    Resolve {
        /// Country codes or names.
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Format a single city line.
    CityLine {
        /// Destination country (code or name).
        #[arg(long)]
        country: Option<String>,

        /// City, town, or locality.
        #[arg(long)]
        city: Option<String>,

        /// State, province, or region.
        #[arg(long)]
        region: Option<String>,

        /// Postal or ZIP code.
        #[arg(long)]
        postal_code: Option<String>,
    },

    /// Render every address in a TOML or JSON batch file.
    Render {
        /// Batch file (`[[address]]` tables, or a JSON array).
        file: PathBuf,

        /// Emit escaped markup instead of plain text.
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Emit a JSON array with derived fields and rendered text.
        #[arg(long)]
        json: bool,

        /// Always include the country line.
        #[arg(long, conflicts_with = "without_country")]
        with_country: bool,

        /// Never include the country line.
        #[arg(long)]
        without_country: bool,
    },
}

/// One rendered address in `--json` output.
#[derive(Serialize)]
struct RenderedAddress<'a> {
    address: &'a Address,
    origin: &'static str,
    international: bool,
    text: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    log::debug!("Home country is {}", config.home_country);

    match cli.command {
        Commands::Resolve { inputs } => {
            cmd_resolve(&inputs);
            Ok(())
        }
        Commands::CityLine {
            country,
            city,
            region,
            postal_code,
        } => {
            cmd_city_line(
                country.as_deref(),
                city.as_deref(),
                region.as_deref(),
                postal_code.as_deref(),
            );
            Ok(())
        }
        Commands::Render {
            file,
            html,
            json,
            with_country,
            without_country,
        } => {
            let with_country = match (with_country, without_country) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cmd_render(&config, &file, html, json, with_country)
        }
    }
}

/// Layers the config file, environment, and flags.
fn load_config(cli: &Cli) -> Result<AddressConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => AddressConfig::load(path)?,
        None => AddressConfig::default(),
    };

    config = config
        .apply_env()
        .apply_home_override(cli.home_country.as_deref());

    if let Some(dir) = &cli.assets {
        config = config.with_assets_dir(dir);
    }

    Ok(config)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_resolve(inputs: &[String]) {
    for input in inputs {
        let code = envelope_country::resolve(input).map_or("-", |code| code.as_str());
        println!("{input}\t{code}");
    }
}

fn cmd_city_line(
    country: Option<&str>,
    city: Option<&str>,
    region: Option<&str>,
    postal_code: Option<&str>,
) {
    let code = envelope_country::lookup_country_iso(country);
    let rule = envelope_layout::layout_for(code);
    log::info!(
        "Using layout {:?} for {}",
        rule.pattern,
        code.map_or("no country", |code| code.as_str())
    );
    println!("{}", envelope_layout::city_line(code, city, region, postal_code));
}

fn cmd_render(
    config: &AddressConfig,
    file: &std::path::Path,
    html: bool,
    json: bool,
    with_country: Option<bool>,
) -> Result<(), Box<dyn std::error::Error>> {
    let addresses = input::read_batch(file)?;
    let names = config.translator();
    let renderer = Renderer::new(config, &names);

    if json {
        let rendered: Vec<RenderedAddress<'_>> = addresses
            .iter()
            .map(|address| RenderedAddress {
                address,
                origin: renderer.origin(address).as_str(),
                international: renderer.is_international(address),
                text: renderer.render(address, with_country),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    let blocks: Vec<String> = addresses
        .iter()
        .map(|address| {
            if html {
                renderer.render_html(address, with_country)
            } else {
                renderer.render(address, with_country)
            }
        })
        .collect();
    println!("{}", blocks.join("\n\n"));

    Ok(())
}
