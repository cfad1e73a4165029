//! boredcli - get a random idea of what to do when you are bored
//!
//! A command-line client for the bored API.

use bored_cli::cli::args::{generate_completions, Cli, Commands};
use bored_cli::commands::run_bored;
use bored_cli::error::AppError;
use bored_cli::logging;
use bored_cli::transport::UreqTransport;
use bored_core::BoredClient;
use clap::Parser;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose needs the parsed arguments
    logging::logger(env_logger::Env::default(), cli.verbose).init();

    if let Err(e) = run(cli) {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Bored(args) => {
            let client = BoredClient::new(cli.base_url.clone());
            let transport = UreqTransport::new();
            let stdout = std::io::stdout();
            run_bored(args, &client, &transport, cli.format, &mut stdout.lock())
        }

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Validation(_) => {
            eprintln!();
            eprintln!("Hint: Run 'boredcli bored --help' for the accepted ranges.");
        }
        AppError::Transport(_) => {
            eprintln!();
            eprintln!("Hint: Check your network connection or the --base-url value.");
        }
        _ => {}
    }
}
