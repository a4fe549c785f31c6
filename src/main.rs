// SPDX-License-Identifier: GPL-3.0-only

//! Command-line front end for the more-keys popup layout engine.
//!
//! Computes the popup layout for a more-keys specification or a JSON layout
//! request and prints it as JSON, so that keyboard layouts can be checked
//! without starting the keyboard.

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;

use morekeys::config::{self, PopupGeometry};
use morekeys::keyspec::{self, MoreKeySpec};
use morekeys::popup::{LayoutResult, PopupPlacement, RowMetrics};

#[derive(Parser)]
#[command(
    name = "cosboard-morekeys",
    version,
    about = "Compute the layout of a more-keys popup"
)]
struct Cli {
    #[arg(
        short,
        long,
        required_unless_present = "request",
        conflicts_with = "request",
        help = "More-keys specification, e.g. '!fixedColumnOrder!3,a,b,c'"
    )]
    keys: Option<String>,

    #[arg(short, long, help = "JSON file holding a layout request")]
    request: Option<String>,

    #[arg(short, long, help = "Popup geometry configuration file")]
    config: Option<String>,

    #[arg(
        short = 'x',
        long,
        allow_negative_numbers = true,
        help = "Centre of the long-pressed key (default: keyboard centre)"
    )]
    anchor_x: Option<i32>,

    #[arg(short = 'w', long, help = "Width of the parent keyboard")]
    keyboard_width: Option<i32>,

    #[arg(short, long, help = "Also print pixel placement of every key")]
    placement: bool,
}

#[derive(Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    keys: Option<Vec<MoreKeySpec>>,
    layout: LayoutResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<PopupPlacement>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("morekeys=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut geometry = match &cli.config {
        Some(path) => PopupGeometry::load(path)?,
        None => PopupGeometry::default(),
    };
    if let Some(width) = cli.keyboard_width {
        geometry = geometry.with_keyboard_width(width);
    }

    let (keys, request) = match (&cli.keys, &cli.request) {
        (Some(text), _) => {
            let definition = keyspec::parse_more_keys(text)?;
            let anchor_x = cli.anchor_x.unwrap_or(geometry.keyboard_width / 2);
            let request = definition.to_request(&geometry, anchor_x);
            (Some(definition.keys), request)
        }
        (None, Some(path)) => {
            let mut request = config::load_request(path)?;
            if let Some(anchor_x) = cli.anchor_x {
                request.anchor_x = anchor_x;
            }
            if let Some(width) = cli.keyboard_width {
                request.keyboard_width = width;
            }
            (None, request)
        }
        (None, None) => unreachable!("clap requires --keys or --request"),
    };

    let layout = request.compute()?;
    tracing::info!(
        "{} keys in {} column(s) x {} row(s)",
        layout.key_count(),
        layout.columns,
        layout.rows
    );

    let placement = cli
        .placement
        .then(|| layout.place(&RowMetrics::from(&geometry)));
    let report = Report {
        keys,
        layout,
        placement,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
