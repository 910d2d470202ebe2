//! Prints the set algebra of two sets given on the command line.
//!
//! ```text
//! setalg --a 1,2,3 --b 3,4,5 --numeric
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use setalg::prelude::*;
use std::{fmt::Display, hash::Hash, str::FromStr, time::Instant};
use tracing::{debug, info};

/// Set algebra playground.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Elements of the first set, comma separated
    #[arg(short, long, value_delimiter = ',')]
    a: Vec<String>,

    /// Elements of the second set, comma separated
    #[arg(short, long, value_delimiter = ',')]
    b: Vec<String>,

    /// Parse the elements as integers instead of treating them as words
    #[arg(short, long)]
    numeric: bool,

    /// Print every pair of the Cartesian product, not just how many there are
    #[arg(short, long)]
    product: bool,

    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: tracing::Level,
}

/// Parses the elements of a set.
fn parse<T>(name: &str, elements: &[String]) -> Result<MapSet<T>>
where
    T: FromStr + Eq + Hash,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    elements
        .iter()
        .map(|str| {
            str.trim()
                .parse()
                .with_context(|| format!("invalid element {str:?} in set {name}"))
        })
        .collect()
}

/// Prints every algebra operation on two sets.
fn report<T: Eq + Hash + Clone + Display>(a: &MapSet<T>, b: &MapSet<T>, product: bool) {
    info!(a = a.len(), b = b.len(), "sets parsed");

    println!("A:     {a}");
    println!("B:     {b}");
    println!("A ∩ B: {}", intersect(a, b));
    println!("A ∪ B: {}", union(a, b));
    println!("A \\ B: {}", set_diff(a, b));
    println!("B \\ A: {}", set_diff(b, a));
    println!("A ⊖ B: {}", sym_diff(a, b));

    let prod = cartesian_product(a, b);
    if product {
        println!("A × B: {prod}");
    } else {
        println!("|A × B| = {}", prod.len());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::from(Instant::now()))
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("could not install the logger")?;
    debug!(?args, "starting");

    if args.numeric {
        let a: MapSet<i64> = parse("A", &args.a)?;
        let b: MapSet<i64> = parse("B", &args.b)?;
        report(&a, &b, args.product);
    } else {
        let a: MapSet<String> = parse("A", &args.a)?;
        let b: MapSet<String> = parse("B", &args.b)?;
        report(&a, &b, args.product);
    }

    Ok(())
}
