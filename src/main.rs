mod args;
mod dashboard;

use std::error::Error;
use std::process;

use clap::Parser;
use log::{info, LevelFilter};

fn main() {
    let args = args::Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();
    // The arguments are not logged: they may hold the document id.
    info!("msna {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = dashboard::run_dashboard(&args) {
        if e.is_data_source() {
            eprintln!("The survey responses could not be read.");
        }
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(s) = source {
            eprintln!("  caused by: {}", s);
            source = s.source();
        }
        process::exit(1);
    }
}
