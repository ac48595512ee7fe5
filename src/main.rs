// Copyright 2026 Roster Scrape Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use roster_scrape::config::{self, Config};
use roster_scrape::rest::{self, AppState};
use roster_scrape::scrape::client::RosterClient;
use roster_scrape::types::SearchQuery;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "roster",
    about = "Sedgwick County inmate search scraper",
    version
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST facade
    Serve {
        /// Port to listen on (default: ROSTER_PORT, PORT, or 5000)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run a one-shot search
    Search {
        /// Last name
        #[arg(long)]
        last: Option<String>,
        /// First name
        #[arg(long)]
        first: Option<String>,
        /// Booking number
        #[arg(long)]
        booking: Option<String>,
        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch one inmate's detail page
    Detail {
        /// Numeric inmate id (from a search result)
        inmate_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "roster_scrape=debug"
    } else {
        "roster_scrape=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.parse().unwrap()),
        )
        .init();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config::from_env();
            let port = port.unwrap_or_else(config::port_from_env);
            let state = Arc::new(AppState { config });
            rest::start(port, state).await
        }
        Commands::Search {
            last,
            first,
            booking,
            json,
        } => {
            let query = SearchQuery {
                last_name: last.unwrap_or_default(),
                first_name: first.unwrap_or_default(),
                booking_number: booking.unwrap_or_default(),
            };
            if query.is_empty() {
                bail!("provide at least one of --last, --first, --booking");
            }

            let client = RosterClient::new(Config::from_env());
            let inmates = client.search(&query).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&inmates)?);
            } else if inmates.is_empty() {
                println!("No inmates found.");
            } else {
                for inmate in &inmates {
                    let id = inmate.inmate_id.as_deref().unwrap_or("-");
                    println!(
                        "{}  {}  booked {}  age {}  {}/{}  [id {}]",
                        inmate.name,
                        inmate.booking_number,
                        inmate.booking_date,
                        inmate.age,
                        inmate.gender,
                        inmate.race,
                        id
                    );
                }
                println!("{} inmate(s)", inmates.len());
            }
            Ok(())
        }
        Commands::Detail { inmate_id, json } => {
            let client = RosterClient::new(Config::from_env());
            let detail = client.details(&inmate_id).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                for (label, value) in &detail.fields {
                    println!("{label} {value}");
                }
                if let Some(charges) = &detail.charges {
                    println!("Charges:");
                    for charge in charges {
                        println!("  - {charge}");
                    }
                }
            }
            Ok(())
        }
    }
}
