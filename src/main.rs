mod cli;
mod demo;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = cli.log_level {
        logger.filter_level(level);
    }
    logger.try_init()?;

    match cli.command {
        Command::Search { size } => demo::search(size)?,
        Command::Dp { fib_n } => demo::dynamic_programming(fib_n),
        Command::All => {
            demo::search(demo::DEFAULT_SEARCH_SIZE)?;
            println!();
            demo::dynamic_programming(demo::DEFAULT_FIB_N);
        }
    }

    Ok(())
}
