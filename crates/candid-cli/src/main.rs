//! Candid CLI - Main entry point

use candid_cli::commands::fetch::FetchOptions;
use candid_cli::config::Config;
use candid_cli::{Cli, Commands, ConfigCommand};
use candid_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use clap::Parser;
use std::io::IsTerminal;
use std::process;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    if cli.command.is_none() {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    }

    // Verbose: debug to console. Otherwise only warnings (failed EINs) and errors.
    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("candid-cli")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging, so a failed init is not fatal
    let _guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> candid_cli::Result<()> {
    let Some(ref command) = cli.command else {
        unreachable!("Command should have been validated in main");
    };

    match command {
        Commands::Fetch {
            input,
            output,
            api_key,
            preview_rows,
            no_preview,
        } => {
            let config = Config::from_env()?.with_overrides(cli.api_url.clone(), api_key.clone());
            let options = FetchOptions {
                input: input.clone(),
                output: output.clone(),
                preview_rows: if *no_preview { 0 } else { *preview_rows },
                interactive: std::io::stdin().is_terminal(),
            };
            candid_cli::commands::fetch::run(config, options).await
        }

        Commands::Validate { input } => candid_cli::commands::validate::run(input).await,

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                let config = Config::from_env()?.with_overrides(cli.api_url.clone(), None);
                candid_cli::commands::config::show(&config).await
            }
        },
    }
}
