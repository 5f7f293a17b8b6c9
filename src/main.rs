//! fibbench - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fibbench::util::{config, logger};
use fibbench::{report, sequence, RunOptions, NAME, VERSION};

/// Arbitrary-precision Fibonacci micro-benchmark
#[derive(Parser, Debug)]
#[command(name = "fibbench")]
#[command(author = "YaoXiang Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a term and print it (the default command)
    Run {
        /// Term index; falls back to the configured default (99999)
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Print one JSON stats object instead of the two-line output
        #[arg(long)]
        json: bool,
    },

    /// Print only the decimal digit count of a term
    Digits {
        /// Term index
        #[arg(value_name = "INDEX", allow_negative_numbers = true)]
        index: i64,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = config::load_user_config().context("Failed to load user config")?;

    let level = if args.verbose {
        logger::LogLevel::Debug
    } else {
        match logger::LogLevel::parse(&config.log.level) {
            Some(level) => level,
            None => {
                eprintln!(
                    "Warning: unknown log level '{}' in config, using info",
                    config.log.level
                );
                logger::LogLevel::Info
            }
        }
    };
    logger::init_with_level(level);

    if args.verbose {
        eprintln!("fibbench version: {}", VERSION);
        eprintln!("Host: {}", std::env::consts::OS);
    }

    let command = args.command.unwrap_or(Commands::Run {
        index: None,
        json: false,
    });

    match command {
        Commands::Run { index, json } => {
            let opts = RunOptions {
                index: index.unwrap_or(config.run.index),
                json,
                max_str_digits: config.limits.max_str_digits,
            };
            fibbench::run(&opts)
                .with_context(|| format!("Failed to compute term {}", opts.index))?;
        }
        Commands::Digits { index } => {
            let value = sequence::nth(index)
                .with_context(|| format!("Failed to compute term {}", index))?;
            println!("{}", report::digit_count(&value));
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
