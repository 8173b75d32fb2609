use clap::Parser;
use speedtest_recorder::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    commands::setup_logging(args.log_level());

    let config = commands::load_configuration(&args).unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    });

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args, config)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
