//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge};
use crate::commands::{CheckResult, SolutionsResult, SurveyStatistics};
use colored::Colorize;

/// Print the result of checking one word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}   Word: {}",
        result.root.to_uppercase().bright_yellow().bold(),
        result.word.to_uppercase().bright_white().bold()
    );
    if !result.used.is_empty() {
        println!("Used: {}", result.used.join(", ").bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Ok(accepted) => println!(
            "{} {} {}",
            "✅ Accepted".green().bold(),
            length_badge(accepted.word().chars().count()),
            accepted.word()
        ),
        Err(rejection) => {
            println!("{}", format!("❌ {}", rejection.title()).red().bold());
            println!("   {}", rejection.message());
        }
    }
}

/// Print every solution for a root
pub fn print_solutions(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n😶 No words can be made from this root.");
        return;
    }

    println!("\n📚 {} words found", result.words.len().to_string().bright_yellow().bold());

    let counts = result.by_length();
    let max_count = counts.values().copied().max().unwrap_or(1);
    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for (len, count) in &counts {
        let bar = create_progress_bar(*count as f64, max_count as f64, 30);
        println!("   {} {} {count:4}", length_badge(*len), bar.green());
    }

    println!();
    let mut current_len = None;
    for word in &result.words {
        let len = word.chars().count();
        if current_len != Some(len) {
            if current_len.is_some() {
                println!();
            }
            print!("   {} ", length_badge(len).bright_cyan());
            current_len = Some(len);
        }
        print!("{word} ");
    }
    println!();
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Root Word Survey ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Roots surveyed:      {}", stats.total_roots);
    println!("  Total solutions:     {}", stats.total_solutions);
    println!(
        "  Average per root:    {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if !stats.richest.is_empty() {
        let max = stats.richest[0].solutions.max(1) as f64;
        println!("\n✨ {}", "Richest roots".green().bold());
        for summary in &stats.richest {
            let bar = create_progress_bar(summary.solutions as f64, max, 30);
            println!(
                "  {:<10} {} {:4}  longest: {}",
                summary.root.to_uppercase().bright_green(),
                bar.green(),
                summary.solutions,
                summary.longest.as_deref().unwrap_or("-")
            );
        }

        println!("\n😰 {}", "Poorest roots".yellow().bold());
        for summary in &stats.poorest {
            let bar = create_progress_bar(summary.solutions as f64, max, 30);
            println!(
                "  {:<10} {} {:4}",
                summary.root.to_uppercase().yellow(),
                bar.bright_black(),
                summary.solutions
            );
        }
    }

    if !stats.barren.is_empty() {
        println!(
            "\n{} {}",
            "⚠ Roots with no solutions:".red().bold(),
            stats.barren.join(", ")
        );
    }
}
