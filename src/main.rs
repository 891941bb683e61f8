use clap::Parser;
use docker_detective::{cli::Cli, config, run_command};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> docker_detective::Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration, preferring a file in the scan root
    let project_path = cli.command.as_ref().and_then(|c| c.path());
    let config = config::load_config(cli.config.as_deref(), project_path)?;

    run_command(cli.command, config)
}
