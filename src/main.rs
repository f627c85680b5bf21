use std::path::PathBuf;
use std::process;

use redman::cli::build_cli;
use redman::cli_context::CliContext;
use redman::commands::{handle_copy, handle_projects};
use redman::error::RedmanResult;
use redman::logging::init_logging;

async fn run() -> RedmanResult<()> {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"))?;

    let target = matches
        .get_one::<String>("target")
        .map(String::as_str)
        .unwrap_or_default();
    let config_dir = matches.get_one::<String>("config-dir").map(PathBuf::from);
    let mut context = CliContext::load(target, config_dir)?;

    match matches.subcommand() {
        Some(("projects", sub_matches)) => handle_projects(sub_matches, &mut context).await,
        Some(("copy", sub_matches)) => handle_copy(sub_matches, &mut context).await,
        _ => {
            eprintln!("Unknown command. Use 'redman --help' for available commands.");
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
