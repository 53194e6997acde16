mod app;
mod calculator;
mod catalog;
mod cli;
mod config;
mod consts;
mod currency;
mod error;
mod output;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    // Machine-readable output keeps stderr quiet
    let config = if cli.json || cli.csv {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
