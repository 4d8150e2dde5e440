//! Display functions for command results

use super::formatters::square_block;
use crate::commands::{PreprocessReport, QueryResult, SolveReport};
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print what preprocessing built
pub fn print_preprocess_report(report: &PreprocessReport) {
    banner(&format!("INDEX BUILT (width {})", report.width));

    println!("\n📖 {}", "Dictionary:".bright_cyan().bold());
    println!("   Words:            {}", report.words);
    println!("   Padded variants:  {}", report.padded_words);

    println!("\n🔎 {}", "Patterns:".bright_cyan().bold());
    println!("   Patterns:         {}", report.patterns);
    println!("   Match entries:    {}", report.matches);
    if report.verified {
        println!("   Full scan:        {}", "agrees".green());
    }

    println!(
        "\n   Build time:       {:.2}s",
        report.build_time.as_secs_f64()
    );
    println!(
        "   Total time:       {:.2}s",
        report.total_time.as_secs_f64()
    );
}

/// Print the outcome of a solving run, optionally echoing every square
pub fn print_solve_report(report: &SolveReport, print_squares: bool) {
    banner("WORD SQUARES");

    if print_squares {
        for (i, grid) in report.solutions.iter().enumerate() {
            println!("\n{}", format!("#{}", i + 1).bright_yellow());
            for row in square_block(grid).lines() {
                println!("   {row}");
            }
        }
    }

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Seed squares:     {}", report.seed_squares);
    println!("   Nodes visited:    {}", report.stats.nodes);
    println!("   Pruned branches:  {}", report.stats.pruned);
    println!("   Load time:        {:.2}s", report.load_time.as_secs_f64());
    println!(
        "   Search time:      {:.2}s",
        report.search_time.as_secs_f64()
    );

    let summary = format!("found {} wordsquares", report.solutions.len());
    println!();
    if report.solutions.is_empty() {
        println!("{}", summary.yellow().bold());
    } else {
        println!("{}", summary.green().bold());
    }
    println!("   Written to {}", report.output.display());
}

/// Print the words matching a queried pattern
pub fn print_query_result(result: &QueryResult) {
    println!(
        "\nPattern {}",
        result.pattern.text().bright_yellow().bold()
    );

    if result.words.is_empty() {
        println!("{}", "no matches".red());
        return;
    }

    println!("{} matching words:", result.words.len());
    for word in &result.words {
        println!("   {word}");
    }
}
