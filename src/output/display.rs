//! Display functions for command results

use super::formatters::{format_rack, group_by_length};
use crate::commands::{
    CatalogReport, FindResult, FormCheck, GridResult, PatternCheck, PrefixCheck, WordCheck,
};
use colored::Colorize;

fn print_header(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

fn print_word_groups(words: &[String]) {
    for (length, group) in group_by_length(words) {
        println!(
            "   {} {}",
            format!("{length:2} letters:").bright_black(),
            group.join(" ")
        );
    }
}

/// Print the result of checking a word
pub fn print_word_check(result: &WordCheck) {
    if result.valid {
        println!("{} {}", "✅".green(), result.word.bright_white().bold());
    } else {
        println!(
            "{} {} is not in the dictionary",
            "❌".red(),
            result.word.bright_white().bold()
        );
    }
    if result.extendable {
        println!("   Longer words start with {}", result.word);
    }
}

/// Print the result of checking a prefix
pub fn print_prefix_check(result: &PrefixCheck) {
    if !result.matches {
        println!(
            "{} No words start with {}",
            "❌".red(),
            result.prefix.bright_white().bold()
        );
        return;
    }

    println!(
        "{} {} words start with {}",
        "✅".green(),
        result.total.to_string().bright_yellow().bold(),
        result.prefix.bright_white().bold()
    );
    if !result.examples.is_empty() {
        let more = result.total - result.examples.len();
        let suffix = if more > 0 {
            format!(" (+{more} more)")
        } else {
            String::new()
        };
        println!("   {}{}", result.examples.join(" "), suffix.bright_black());
    }
}

/// Print every word found in a rack
pub fn print_find_result(result: &FindResult) {
    print_header("RACK:", &format_rack(&result.rack));

    if result.words.is_empty() {
        println!("\n{}", "No words found.".yellow());
        return;
    }

    println!(
        "\n📊 {} words, longest {} letters\n",
        result.words.len().to_string().bright_yellow().bold(),
        result.longest()
    );
    print_word_groups(&result.words);
    println!(
        "\n   Time taken: {:.2}ms",
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print whether a rack can spell a word
pub fn print_form_check(result: &FormCheck) {
    let Some(formation) = &result.formation else {
        println!(
            "{} {} can't be made from {}",
            "❌".red(),
            result.word.bright_white().bold(),
            format_rack(&result.rack)
        );
        return;
    };

    println!(
        "{} {} can be made from {}",
        "✅".green(),
        result.word.bright_white().bold(),
        format_rack(&result.rack)
    );
    for wildcard in formation.wildcards() {
        println!(
            "   * plays as {} at position {}",
            wildcard.letter.to_string().bright_yellow().bold(),
            wildcard.position + 1
        );
    }
    if !result.in_dictionary {
        println!("   {}", "(but it is not in the dictionary)".yellow());
    }
}

/// Print the word a pattern resolves to
pub fn print_pattern_check(result: &PatternCheck) {
    match &result.found {
        Some(found) => {
            println!(
                "{} {} matches {}",
                "✅".green(),
                result.pattern,
                found.word.bright_white().bold()
            );
            if let Some(letter) = found.wildcard_letter {
                println!("   * = {}", letter.to_string().bright_yellow().bold());
            }
        }
        None => println!("{} Nothing matches {}", "❌".red(), result.pattern),
    }
}

/// Print the words hidden in a grid
pub fn print_grid_result(result: &GridResult) {
    print_header(
        "GRID:",
        &format!("{}x{}", result.grid.rows(), result.grid.cols()),
    );
    println!();
    for line in result.grid.to_string().lines() {
        println!("   {}", line.bright_white().bold());
    }

    if result.words.is_empty() {
        println!("\n{}", "No words found.".yellow());
        return;
    }

    println!(
        "\n📊 {} words\n",
        result.words.len().to_string().bright_yellow().bold()
    );
    print_word_groups(&result.words);
    println!(
        "\n   Time taken: {:.2}ms",
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print solutions for every built-in puzzle
pub fn print_catalog_report(report: &CatalogReport) {
    print_header("PUZZLES", "");

    println!("\n🔤 {}", "Rearrange:".bright_cyan().bold());
    for entry in &report.rearrange {
        let status = if entry.goal_reachable {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "\n {} Round {}: {}  ({} five-letter, {} longer)",
            status,
            entry.round + 1,
            format_rack(&entry.rack).bright_white().bold(),
            entry.short_words,
            entry.long_words
        );
        print_word_groups(&entry.words);
    }

    println!("\n🔠 {}", "Find words:".bright_cyan().bold());
    for entry in &report.grids {
        let status = if entry.goal_reachable {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "\n {} Round {}: {} words",
            status,
            entry.round + 1,
            entry.words.len()
        );
        for line in entry.grid.to_string().lines() {
            println!("   {}", line.bright_white());
        }
        print_word_groups(&entry.words);
    }

    println!("\n✏️  {}", "Crosswords:".bright_cyan().bold());
    for entry in &report.crosswords {
        match &entry.error {
            None => println!(
                "\n {} Round {}: {}  {}",
                "✓".green(),
                entry.round + 1,
                entry.theme.bright_white().bold(),
                entry.answers.join(", ")
            ),
            Some(e) => println!(
                "\n {} Round {}: {}  {}",
                "✗".red(),
                entry.round + 1,
                entry.theme.bright_white().bold(),
                e.to_string().red()
            ),
        }
    }

    let unreachable = report.unreachable_rounds();
    println!();
    if unreachable == 0 {
        println!("{}", "✅ Every round can be completed".green().bold());
    } else {
        println!(
            "{}",
            format!("⚠ {unreachable} rounds can't be completed with this word list")
                .yellow()
                .bold()
        );
    }
    println!("   Time taken: {:.2}s", report.duration.as_secs_f64());
}
