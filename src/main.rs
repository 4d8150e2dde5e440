//! Word Square Generator - CLI
//!
//! `preprocess` turns a raw wordlist into the three index files; `solve` enumerates every
//! square containing a set of seed words; `query` looks a pattern up in a saved index.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordsquare::{
    commands::{
        PreprocessConfig, QueryConfig, SolveConfig, run_preprocess, run_query, run_solve,
    },
    logging::init_logger,
    output::{print_preprocess_report, print_query_result, print_solve_report},
    storage::IndexPaths,
};

#[derive(Parser)]
#[command(
    name = "wordsquare",
    about = "Exhaustive word square generator driven by a precomputed pattern index",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Grid width N (every word has exactly N characters)
    #[arg(short = 'n', long, global = true, default_value = "5")]
    width: usize,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// The three preprocessed index files
#[derive(clap::Args)]
struct IndexArgs {
    /// Dictionary file
    dict: PathBuf,

    /// Pattern catalog file
    patterns: PathBuf,

    /// Match index file
    matches: PathBuf,
}

impl IndexArgs {
    fn into_paths(self) -> IndexPaths {
        IndexPaths::new(self.dict, self.patterns, self.matches)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index files from a raw wordlist
    Preprocess {
        /// Raw wordlist, one word per line
        wordlist: PathBuf,

        #[command(flatten)]
        index: IndexArgs,

        /// Drop short words instead of padding them with filler characters
        #[arg(long)]
        no_padding: bool,

        /// Cross-check the match index against a full pattern scan
        #[arg(long)]
        verify: bool,
    },

    /// Enumerate every square containing the seed words
    Solve {
        #[command(flatten)]
        index: IndexArgs,

        /// Seed file, 3 to 10 words of length N
        seeds: PathBuf,

        /// Solution file to write
        output: PathBuf,

        /// Echo every square to the console
        #[arg(short, long)]
        print: bool,
    },

    /// List the words matching a pattern ('*' hides a position)
    Query {
        #[command(flatten)]
        index: IndexArgs,

        /// Pattern of length N
        pattern: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Preprocess {
            wordlist,
            index,
            no_padding,
            verify,
        } => {
            let mut config = PreprocessConfig::new(wordlist, index.into_paths(), cli.width);
            config.pad_short_words = !no_padding;
            config.verify = verify;
            config.quiet = cli.quiet;
            run_preprocess_command(&config)
        }
        Commands::Solve {
            index,
            seeds,
            output,
            print,
        } => {
            let mut config = SolveConfig::new(index.into_paths(), seeds, output, cli.width);
            config.quiet = cli.quiet;
            run_solve_command(&config, print)
        }
        Commands::Query { index, pattern } => {
            let config = QueryConfig {
                paths: index.into_paths(),
                width: cli.width,
                pattern,
            };
            run_query_command(&config)
        }
    }
}

fn run_preprocess_command(config: &PreprocessConfig) -> Result<()> {
    let report = run_preprocess(config)
        .with_context(|| format!("preprocessing {}", config.wordlist.display()))?;
    print_preprocess_report(&report);
    Ok(())
}

fn run_solve_command(config: &SolveConfig, print: bool) -> Result<()> {
    let report = run_solve(config).context("solving failed")?;
    print_solve_report(&report, print);
    Ok(())
}

fn run_query_command(config: &QueryConfig) -> Result<()> {
    let result = run_query(config).context("query failed")?;
    print_query_result(&result);
    Ok(())
}
