//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::core::Feedback;
use crate::stats::Statistics;
use colored::Colorize;

/// Print one evaluated guess
pub fn print_feedback(feedback: &Feedback) {
    println!("{}  {}", colored_row(feedback), feedback.to_emoji());
    for lf in feedback.letters() {
        println!("   {}: {}", lf.letter.to_ascii_uppercase(), lf.state);
    }
}

/// Print lifetime statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{}%", stats.win_percentage()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 40);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}
