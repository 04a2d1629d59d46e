//! Trampwick CLI
//!
//! Prints the inorder sequence of a tree given in bracket notation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use trampwick::model::Tree;
use trampwick::notation::{self, format_inorder};
use trampwick::parser::ParsingError;
use trampwick::{SAMPLE_TREE, Strategy, traverse};

/// Trampwick - stack-safe inorder traversal of binary trees
#[derive(Parser)]
#[command(name = "trampwick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tree in bracket notation, e.g. "((,D,H),B,E)"
    #[arg(default_value = SAMPLE_TREE, conflicts_with = "file")]
    tree: String,

    /// Read the tree from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Traversal strategy (trampoline, eager, bounced, direct, stack, parent, threaded)
    #[arg(short, long, default_value_t = Strategy::Trampoline)]
    strategy: Strategy,

    /// Separator printed between values
    #[arg(long, default_value = " ")]
    separator: String,

    /// Run every strategy and check they agree
    #[arg(long)]
    compare: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] ParsingError),
    #[error("strategy {strategy} disagrees with {reference}:\n  {expected}\n  {found}")]
    Mismatch {
        strategy: Strategy,
        reference: Strategy,
        expected: String,
        found: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CliError::Mismatch { .. }) => {
            error!("{e}");
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let tree: Tree<String> = match &cli.file {
        Some(path) => {
            debug!("Reading tree from {}", path.display());
            notation::parse_file(path)?
        }
        None => notation::parse_str(&cli.tree)?,
    };
    debug!("Parsed tree with {} nodes, height {}", tree.len(), tree.height());

    if cli.compare {
        return run_compare(cli, &tree);
    }

    if !cli.strategy.is_stack_safe() {
        debug!("Strategy {} recurses as deep as the tree is high", cli.strategy);
    }
    let values = traverse(cli.strategy, &tree);
    println!("{}", format_inorder(&values, &cli.separator));
    Ok(())
}

fn run_compare(cli: &Cli, tree: &Tree<String>) -> Result<(), CliError> {
    let reference = Strategy::default();
    let expected = format_inorder(&traverse(reference, tree), &cli.separator);

    for strategy in Strategy::ALL {
        let found = format_inorder(&traverse(strategy, tree), &cli.separator);
        if found != expected {
            return Err(CliError::Mismatch {
                strategy,
                reference,
                expected,
                found,
            });
        }
        info!("{strategy:>10}: {found}");
    }

    println!("{expected}");
    Ok(())
}
