// ABOUTME: Brewlog CLI - command-line front end for the configuration service
// ABOUTME: Records, lists, and deletes brewing configurations against the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! Usage:
//! ```bash
//! # Record a configuration
//! brewlog-cli add --brand Lavazza --blend Classico --coffee-weight 18.5 --water-temp 93
//!
//! # List saved configurations
//! brewlog-cli list
//!
//! # Delete a configuration
//! brewlog-cli delete 3
//!
//! # Show brand/blend autocomplete suggestions
//! brewlog-cli suggest
//!
//! # Show the server's field-rule catalog
//! brewlog-cli rules
//! ```

mod commands;

use brewlog_server::client::ApiClient;
use brewlog_server::errors::AppResult;
use clap::{Parser, Subcommand};
use std::env;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "brewlog-cli",
    about = "Brewlog configuration CLI",
    long_about = "Command-line front end for recording and browsing coffee brewing configurations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Server base URL override
    #[arg(long, global = true)]
    server_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Record a new brewing configuration
    Add {
        /// Coffee brand (required)
        #[arg(long)]
        brand: String,

        /// Coffee blend (required)
        #[arg(long)]
        blend: String,

        /// Dose weight in grams
        #[arg(long)]
        coffee_weight: Option<String>,

        /// Grinder setting
        #[arg(long)]
        grind_size: Option<String>,

        /// Grind duration in seconds
        #[arg(long)]
        grind_time: Option<String>,

        /// Water temperature in °C
        #[arg(long)]
        water_temp: Option<String>,

        /// Brew duration in seconds
        #[arg(long)]
        brew_time: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List all saved configurations
    List,

    /// Delete a configuration by id
    Delete {
        /// Identifier shown by `list`
        id: i64,
    },

    /// Show brand/blend autocomplete suggestions
    Suggest,

    /// Show the server's field-rule catalog
    Rules,
}

fn resolve_server_url(flag: Option<String>) -> String {
    flag.or_else(|| env::var("BREWLOG_SERVER_URL").ok())
        .unwrap_or_else(|| "http://localhost:3001".to_owned())
}

async fn run(cli: Cli) -> AppResult<()> {
    let client = ApiClient::new(resolve_server_url(cli.server_url));

    match cli.command {
        Command::Add {
            brand,
            blend,
            coffee_weight,
            grind_size,
            grind_time,
            water_temp,
            brew_time,
            notes,
        } => {
            let input = commands::config::AddInput {
                brand,
                blend,
                coffee_weight,
                grind_size,
                grind_time,
                water_temp,
                brew_time,
                notes,
            };
            commands::config::add(&client, input).await
        }
        Command::List => commands::config::list(&client).await,
        Command::Delete { id } => commands::config::delete(&client, id).await,
        Command::Suggest => commands::config::suggest(&client).await,
        Command::Rules => commands::config::rules(&client).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
