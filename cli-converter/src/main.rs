use crate::converter as converter_logic;
use clap::Parser;
use lib::console::commands::Cli;
use lib::console::commands::Commands;
use lib::model::data::FormData;
use lib::provider::providers;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ConvertCommand {
            from,
            to,
            provider,
            car_name,
        } => {
            info!(?from, ?to, ?provider, "converting");

            let form = FormData { car_name };
            match converter_logic::logic::process_convert_logic(&from, to.as_ref(), provider, &form) {
                Ok(res) => {
                    info!(output = ?res.output, "conversion finished");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    error!("conversion failed: {}", err);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::ListProvidersCommand => {
            for provider in providers() {
                println!("{}\t{}", provider.name(), provider.title());
            }
            ExitCode::SUCCESS
        }
    }
}

pub mod converter;
