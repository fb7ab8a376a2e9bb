//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `parafetch` library that handles argument
//! parsing, `.env` loading, logger setup and exit codes.

use std::io::IsTerminal;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use parafetch::config::{Cli, Command, ABORTED_NO_INPUT};
use parafetch::counter_server::{bind_counter_server, serve};
use parafetch::{init_logger_with, run_fetch, run_get, BatchError, SharedCounter};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional: lets RUST_LOG live in a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match cli.command {
        Command::Fetch(_) => {
            if config.reads_stdin() && std::io::stdin().is_terminal() {
                eprintln!("Enter URLs below, one per line (Ctrl+D ends input):");
            }

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match run_fetch(&config, &mut out).await {
                Ok(_) => Ok(()),
                Err(e) => {
                    if let Some(BatchError::NoInput) = e.downcast_ref::<BatchError>() {
                        println!("{}", ABORTED_NO_INPUT);
                    } else {
                        eprintln!("parafetch error: {:#}", e);
                    }
                    process::exit(1);
                }
            }
        }
        Command::Get(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = run_get(&config, &args.url, &mut out).await {
                eprintln!("parafetch error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
        Command::Serve(_) => {
            let listener =
                match bind_counter_server(&config.server_host, config.server_port).await {
                    Ok(listener) => listener,
                    Err(e) => {
                        eprintln!("parafetch error: {:#}", e);
                        process::exit(1);
                    }
                };
            let addr = listener.local_addr().context("Failed to read bound address")?;
            println!(
                "Listening on {} (any path echoes the request, /count shows the request total)",
                addr
            );
            if let Err(e) = serve(listener, SharedCounter::new()).await {
                eprintln!("parafetch error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
    }
}
