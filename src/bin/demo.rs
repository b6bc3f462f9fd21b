//! Pushes a few integers onto an [`IntStack`], then prints it as pushed, sorted and
//! reversed.
//!
//! ```bash
//! int-collections-demo            # 3 2 1
//! int-collections-demo 9 -4 7 -vv # with trace output on stderr
//! ```

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use int_collections::IntStack;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "int-collections-demo",
    version,
    about = "Push, sort and reverse an integer stack"
)]
struct Cli {
    /// Values to push, bottom first
    #[arg(default_values_t = [3, 2, 1], allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Initial capacity of the stack (defaults to 32)
    #[arg(long)]
    capacity: Option<usize>,

    /// Raise log verbosity (-v debug, -vv trace); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stack = match cli.capacity {
        Some(capacity) => IntStack::with_capacity(capacity),
        None => IntStack::new(),
    };
    for &value in &cli.values {
        stack.push(value);
    }
    debug!(len = stack.len(), capacity = stack.capacity(), "pushed values");
    println!("{stack}");

    stack.sort();
    println!("{stack}");

    stack.reverse();
    println!("{stack}");

    info!(sum = stack.sum(), "done");
    ExitCode::SUCCESS
}
