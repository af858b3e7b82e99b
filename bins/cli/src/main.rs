//! Convertly CLI
//!
//! Thin command-line host around the conversion engine.

mod cli;
mod output;

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use convertly_core::convert::{ConversionRequest, catalog, describe};
use convertly_shared::{AppConfig, AppError, AppResult, Category, LogConfig, LogFormat};

use cli::{Cli, Command, ConvertArgs};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(AppError::from(e).exit_code());
        }
    };

    init_tracing(&config.log);

    let cli = Cli::parse();
    let json = cli.json || config.output.json;

    if let Err(err) = run(cli.command, json) {
        let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
        if code != 2 {
            error!(error = %err, "Command failed");
        }
        std::process::exit(code);
    }
}

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn run(command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Convert(args) => run_convert(args, json),
        Command::Categories => {
            println!("{}", output::categories(&catalog(), json)?);
            Ok(())
        }
        Command::Units(args) => {
            let (text, rejection) = units_output(&args.category, json)?;
            println!("{text}");
            match rejection {
                Some(reason) => {
                    warn!(reason = %reason, "Units request rejected");
                    Err(AppError::InvalidInput(reason).into())
                }
                None => Ok(()),
            }
        }
    }
}

/// Returns the text to print and, for an unknown category, the rejection reason.
fn units_output(category: &str, json: bool) -> AppResult<(String, Option<String>)> {
    match category.parse::<Category>() {
        Ok(category) => Ok((output::units(&describe(category), json)?, None)),
        Err(reason) => Ok((output::invalid(json)?, Some(reason))),
    }
}

fn run_convert(args: ConvertArgs, json: bool) -> anyhow::Result<()> {
    debug!(
        category = %args.category,
        from = %args.from,
        to = %args.to,
        value = %args.value,
        "Converting"
    );

    let request = ConversionRequest::new(args.category, args.from, args.to, args.value);
    let result = request.execute();

    let rejection = result.as_ref().err().cloned();
    println!("{}", output::outcome(&result.into(), json)?);

    match rejection {
        Some(err) => {
            warn!(reason = %err, "Conversion rejected");
            Err(AppError::from(err).into())
        }
        None => Ok(()),
    }
}
