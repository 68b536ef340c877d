use anyhow::Context;
use clap::{Parser, Subcommand};
use clima_core::{Config, Language, WeatherLookup, config::MAX_FORECAST_DAYS};
use inquire::{Confirm, CustomType, Select, validator::Validation};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current weather and forecast for a city")]
pub struct Cli {
    /// Log request details to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively edit language, forecast length and timeout.
    Configure,

    /// Show current weather and the next days for a city.
    Show {
        /// City name; several words are joined, e.g. `clima show São Paulo`.
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        /// Number of upcoming days, overriding the configured value.
        #[arg(long)]
        days: Option<usize>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json, days } => show(&city.join(" "), json, days).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let languages = Language::all().to_vec();
    let cursor = languages.iter().position(|l| *l == cfg.language).unwrap_or(0);
    cfg.language = Select::new("Language for place names and descriptions:", languages)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Language selection aborted")?;

    cfg.forecast_days = CustomType::<usize>::new("Upcoming days to show:")
        .with_default(cfg.forecast_days)
        .with_error_message("Please enter a whole number")
        .with_validator(|days: &usize| {
            if (1..=MAX_FORECAST_DAYS).contains(days) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(format!("Must be between 1 and {MAX_FORECAST_DAYS}").into()))
            }
        })
        .prompt()
        .context("Forecast length input aborted")?;

    let use_timeout = Confirm::new("Limit how long each request may take?")
        .with_default(cfg.timeout_secs.is_some())
        .prompt()
        .context("Timeout confirmation aborted")?;

    cfg.timeout_secs = if use_timeout {
        let secs = CustomType::<u64>::new("Timeout in seconds:")
            .with_default(cfg.timeout_secs.unwrap_or(10))
            .with_validator(|secs: &u64| {
                if *secs > 0 {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid("Must be at least 1 second".into()))
                }
            })
            .prompt()
            .context("Timeout input aborted")?;
        Some(secs)
    } else {
        None
    };

    cfg.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: &str, json: bool, days: Option<usize>) -> anyhow::Result<()> {
    let mut cfg = Config::load()?;
    if let Some(days) = days {
        cfg.forecast_days = days;
    }

    let lookup = WeatherLookup::from_config_with_reqwest(&cfg)?;
    debug!(city, days = lookup.window(), language = %cfg.language, "starting lookup");

    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available; never cancel.
            std::future::pending::<()>().await;
        }
    };

    let result = lookup.lookup_cancellable(city, ctrl_c).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::render(&result, cfg.language));
    }

    Ok(())
}
