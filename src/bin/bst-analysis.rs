//! Command line front end for looking at how insertion order shapes an `OrderedTree`.
//!
//! - `bst-analysis render [KEYS]...` draws a tree built from the keys (or two demo trees).
//! - `bst-analysis bench` times searches in random versus ascending trees.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};

use ordered_tree::harness::{self, HarnessConfig};
use ordered_tree::render::{Connector, Indented};
use ordered_tree::tree::OrderedTree;

/// The trees drawn by `render` when no keys are given: one full, one degenerate.
const DEMO_TREES: [(&str, &[i64]); 2] = [
    ("balanced", &[50, 30, 70, 20, 40, 60, 80]),
    ("degenerate", &[1, 2, 3, 4, 5, 6]),
];

/// Explore an unbalanced binary search tree
#[derive(Parser, Debug)]
#[command(name = "bst-analysis")]
#[command(version)]
#[command(about = "Draw unbalanced binary search trees and time searches in them")]
struct Args {
    /// More log output (-v for debug, -vv for trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the tree built by inserting KEYS in order
    Render {
        /// Keys to insert. Without any, two demo trees are drawn.
        #[arg(allow_negative_numbers = true)]
        keys: Vec<i64>,

        /// How to draw the tree
        #[arg(short, long, value_enum, default_value_t = Style::Both)]
        style: Style,
    },
    /// Time searching every key of random and ascending trees
    Bench {
        /// Tree sizes to measure
        #[arg(long, value_delimiter = ',', default_values_t = harness::DEFAULT_SIZES)]
        sizes: Vec<usize>,

        /// Seed for the random insertion order
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Style {
    /// One node per line, indented by depth
    Indented,
    /// Box-drawing connectors
    Connector,
    /// Both of the above
    Both,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("{:?}", args);

    match args.command {
        Command::Render { keys, style } => {
            if keys.is_empty() {
                for (name, keys) in DEMO_TREES.iter() {
                    println!("{} tree:", name);
                    render(keys, style);
                    println!();
                }
            } else {
                render(&keys, style);
            }
        }
        Command::Bench { sizes, seed } => {
            let config = HarnessConfig { sizes, seed };
            let measurements = harness::run(&config).context("search harness failed")?;

            println!(
                "{:>8} {:<10} {:>8} {:>14} {:>14}",
                "size", "order", "height", "insert (s)", "search (s)"
            );
            for measurement in &measurements {
                println!("{}", measurement);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn render(keys: &[i64], style: Style) {
    let tree: OrderedTree<i64> = keys.iter().copied().collect();
    debug!(
        "built tree of {} keys with height {}",
        tree.len(),
        tree.height()
    );

    if style != Style::Connector {
        print!("{}", Indented::new(&tree));
    }
    if style == Style::Both {
        println!();
    }
    if style != Style::Indented {
        print!("{}", Connector::new(&tree));
    }
}
