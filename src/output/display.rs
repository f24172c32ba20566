//! Display functions for command results

use super::formatters::{create_progress_bar, percent};
use crate::commands::{FragmentAnalysis, FragmentReport, SimulationResult};
use colored::Colorize;

/// Print the result of fragment analysis
pub fn print_analysis(result: &FragmentAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FRAGMENT ANALYSIS:".bright_cyan().bold(),
        result.fragment.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} words:", result.lexicon_size);
    println!("   Entries:         {}", result.candidate_count.to_string().bright_yellow());
    println!("   Distinct words:  {}", result.distinct_words);

    println!("\n🎯 {}", "Eligible for:".bright_cyan().bold());
    for (difficulty, eligible) in &result.tiers {
        let mark = if *eligible { "✓".green() } else { "✗".red() };
        println!(
            "   {mark} {:<7} (≥{} entries)",
            difficulty.name(),
            difficulty.min_candidate_words()
        );
    }

    if !result.sample_words.is_empty() {
        println!("\n📖 {}", "Sample words:".bright_cyan().bold());
        println!("   {}", result.sample_words.join(", "));
    }
}

/// Print per-tier fragment coverage
pub fn print_fragment_report(report: &FragmentReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "FRAGMENT COVERAGE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Index:".bright_cyan().bold());
    println!("   Words:      {}", report.stats.words);
    println!("   Fragments:  {}", report.stats.fragments);
    println!("   Entries:    {}", report.stats.entries);

    println!("\n📈 {}", "Tiers:".bright_cyan().bold());
    for tier in &report.tiers {
        let share = tier.share(report.stats.fragments);
        let bar = create_progress_bar(share, 1.0, 30);
        let bar = if tier.is_feasible() {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!(
            "   {:<8} {bar} {:6} {}",
            tier.profile.name(),
            tier.eligible,
            percent(share)
        );
    }

    if !report.top_fragments.is_empty() {
        println!("\n🔥 {}", "Most common fragments:".bright_cyan().bold());
        for (fragment, count) in &report.top_fragments {
            println!("   {:<4} {count}", fragment.to_string());
        }
    }
}

/// Print a simulation summary
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Difficulty:       {}", result.profile);
    println!("   Games played:     {}", result.games());
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns()).bright_yellow().bold()
    );
    println!("   Average words:    {:.2}", result.average_words());
    println!("   Bonuses earned:   {}", result.total_bonuses());
    if let Some(longest) = result.longest_game() {
        println!(
            "   Longest game:     {} turns (seed {})",
            longest.turns.to_string().green(),
            longest.seed
        );
    }
    if result.unfinished() > 0 {
        println!(
            "   Hit turn limit:   {}",
            result.unfinished().to_string().yellow()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
}
