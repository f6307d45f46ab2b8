use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "algos",
    about = "Demonstrates binary search variants and dynamic programming",
    version
)]
pub struct Cli {
    /// Log level for timing and diagnostics (overrides `RUST_LOG`).
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Binary search variants, then binary vs linear search timing.
    Search {
        /// Length of the array used for the timing comparison.
        #[arg(long, default_value_t = crate::demo::DEFAULT_SEARCH_SIZE)]
        size: usize,
    },
    /// Fibonacci timing, then LCS and Knapsack examples.
    Dp {
        /// Fibonacci term used for the timing comparison.
        #[arg(long = "fib-n", default_value_t = crate::demo::DEFAULT_FIB_N)]
        fib_n: u32,
    },
    /// Every demonstration with default settings.
    All,
}
