//! Interactive puzzle mode
//!
//! Text-based rounds of the rearrange, find-words and crossword games. Input and output
//! are passed in so the loop can be driven by stdin or by a script.

use crate::core::Rack;
use crate::dictionary::Dictionary;
use crate::grid::Cell;
use crate::output::formatters::{format_rack, goal_bar};
use crate::progress::{GameKind, Progress, ProgressError};
use crate::puzzles::{
    CROSSWORD_PUZZLES, CrosswordRound, Direction, FIND_WORDS_PUZZLES, FindWordsRound,
    REARRANGE_PUZZLES, RearrangeRound, Submission,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

const BAR_WIDTH: usize = 20;

/// How a round ended
enum RoundEnd {
    Completed(Vec<String>),
    Quit,
}

/// Play rounds of `game`, starting at `round` or the first unfinished one
///
/// Completed rounds are recorded in `progress` and play moves on to the next
/// unfinished round. `quit` or end of input stops the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if `round`
/// does not exist.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    progress: &mut Progress,
    game: GameKind,
    round: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    if let Some(round) = round.filter(|&round| round >= game.round_count()) {
        return Err(ProgressError::RoundOutOfRange {
            game,
            round,
            rounds: game.round_count(),
        }
        .into());
    }

    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(output, " {} ", format!("WORD PUZZLES: {game}").bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;

    let mut current = round.or_else(|| progress.next_available_round(game));

    while let Some(index) = current {
        writeln!(
            output,
            "\nRound {} of {}",
            index + 1,
            game.round_count()
        )?;

        let end = match game {
            GameKind::Rearrange => play_rearrange(dictionary, progress, index, input, output)?,
            GameKind::FindWords => play_find_words(dictionary, progress, index, input, output)?,
            GameKind::Crossword => play_crossword(progress, index, input, output)?,
        };

        match end {
            RoundEnd::Completed(found) => {
                progress
                    .complete_round(game, index, found)
                    .context("Failed to record round")?;
                writeln!(
                    output,
                    "{}",
                    format!("✅ Round {} complete!", index + 1).green().bold()
                )?;
                current = progress.next_available_round(game);
            }
            RoundEnd::Quit => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }

    writeln!(
        output,
        "\n{}",
        format!("🎉 All {game} rounds complete!").bright_green().bold()
    )?;
    if progress.is_all_complete() {
        writeln!(output, "{}", "Every game is finished.".bright_yellow())?;
    }
    Ok(())
}

fn play_rearrange<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    progress: &Progress,
    index: usize,
    input: &mut R,
    output: &mut W,
) -> Result<RoundEnd> {
    let puzzle = REARRANGE_PUZZLES[index];
    let saved = progress.rounds(GameKind::Rearrange)[index].found_words.clone();
    let mut round = RearrangeRound::with_found(puzzle, saved);
    let mut shown: Rack = round.rack().clone();
    let mut rng = rand::rng();

    writeln!(
        output,
        "Find {} five-letter words and {} longer words.",
        puzzle.min_words, puzzle.min_long_words
    )?;
    writeln!(output, "Commands: 'shuffle', 'found', 'quit'")?;

    loop {
        writeln!(output, "\n  {}", format_rack(&shown).bright_white().bold())?;
        writeln!(
            output,
            "  5 letters:  {}",
            goal_bar(round.short_count(), puzzle.min_words, BAR_WIDTH)
        )?;
        writeln!(
            output,
            "  6+ letters: {}",
            goal_bar(round.long_count(), puzzle.min_long_words, BAR_WIDTH)
        )?;

        let Some(line) = read_input(input, output, "Word")? else {
            return Ok(RoundEnd::Quit);
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(RoundEnd::Quit),
            "shuffle" => shown = shown.shuffled(&mut rng),
            "found" => write_found(output, round.found_words())?,
            word => match round.submit(dictionary, word) {
                Submission::Accepted(word) => {
                    writeln!(output, "{}", format!("✓ {word}").green())?;
                }
                Submission::Completed(word) => {
                    writeln!(output, "{}", format!("✓ {word}").green())?;
                    return Ok(RoundEnd::Completed(round.found_words().to_vec()));
                }
                Submission::Rejected(reason) => {
                    writeln!(output, "{}", format!("✗ {}: {reason}", word.to_uppercase()).red())?;
                }
            },
        }
    }
}

fn play_find_words<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    progress: &Progress,
    index: usize,
    input: &mut R,
    output: &mut W,
) -> Result<RoundEnd> {
    let puzzle = &FIND_WORDS_PUZZLES[index];
    let saved = &progress.rounds(GameKind::FindWords)[index].found_words;
    let mut round = FindWordsRound::with_found(puzzle, dictionary, saved)
        .context("Built-in grid is malformed")?;

    if round.is_complete() {
        writeln!(output, "This grid holds no more words to find.")?;
        return Ok(RoundEnd::Completed(round.found_words().to_vec()));
    }

    writeln!(
        output,
        "Find {} words by chaining adjacent letters, diagonals included.",
        round.goal()
    )?;
    writeln!(
        output,
        "Type a word, or 'trace' followed by cells like '0,0 1,1'. Commands: 'found', 'quit'"
    )?;

    loop {
        writeln!(output)?;
        for line in round.grid().to_string().lines() {
            writeln!(output, "  {}", line.bright_white().bold())?;
        }
        writeln!(
            output,
            "  Found: {}",
            goal_bar(round.found_words().len(), round.goal(), BAR_WIDTH)
        )?;

        let Some(line) = read_input(input, output, "Word")? else {
            return Ok(RoundEnd::Quit);
        };

        let submission = match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(RoundEnd::Quit),
            "found" => {
                write_found(output, round.found_words())?;
                continue;
            }
            text => {
                if let Some(cells) = text.strip_prefix("trace ") {
                    let Some(path) = parse_path(cells) else {
                        writeln!(output, "{}", "✗ Cells look like 'row,col'".red())?;
                        continue;
                    };
                    match round.submit_path(&path) {
                        Ok(submission) => submission,
                        Err(e) => {
                            writeln!(output, "{}", format!("✗ {e}").red())?;
                            continue;
                        }
                    }
                } else {
                    round.submit(text)
                }
            }
        };

        match submission {
            Submission::Accepted(word) => writeln!(output, "{}", format!("✓ {word}").green())?,
            Submission::Completed(word) => {
                writeln!(output, "{}", format!("✓ {word}").green())?;
                let missed = round.missed_words();
                if !missed.is_empty() {
                    writeln!(output, "Words you missed: {}", missed.join(", "))?;
                }
                return Ok(RoundEnd::Completed(round.found_words().to_vec()));
            }
            Submission::Rejected(reason) => {
                writeln!(output, "{}", format!("✗ {}: {reason}", line.to_uppercase()).red())?;
            }
        }
    }
}

fn play_crossword<R: BufRead, W: Write>(
    progress: &Progress,
    index: usize,
    input: &mut R,
    output: &mut W,
) -> Result<RoundEnd> {
    let puzzle = CROSSWORD_PUZZLES[index];
    let saved = &progress.rounds(GameKind::Crossword)[index].found_words;
    let mut round =
        CrosswordRound::with_found(puzzle, saved).context("Built-in crossword is malformed")?;

    writeln!(output, "Theme: {}", puzzle.theme.bright_yellow().bold())?;
    writeln!(
        output,
        "Answer with the clue number, direction and word, e.g. '1 across WORD'. Commands: 'quit'"
    )?;

    loop {
        writeln!(output)?;
        for line in round.to_string().lines() {
            writeln!(output, "  {}", line.bright_white().bold())?;
        }
        writeln!(output, "\n  Clues left: {}", round.remaining_clues().len())?;
        for clue in puzzle.clues {
            if round.is_solved(clue.number, clue.direction) {
                writeln!(output, "  {} {}", "✓".green(), clue.to_string().dimmed())?;
            } else {
                writeln!(output, "    {clue}")?;
            }
        }

        let Some(line) = read_input(input, output, "Answer")? else {
            return Ok(RoundEnd::Quit);
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(RoundEnd::Quit),
            _ => {}
        }

        let Some((number, direction, word)) = parse_answer(&line) else {
            writeln!(output, "{}", "✗ Answers look like '3 down WORD' or '3d WORD'".red())?;
            continue;
        };

        let submission = match round.submit(number, direction, word) {
            Ok(submission) => submission,
            Err(e) => {
                writeln!(output, "{}", format!("✗ {e}").red())?;
                continue;
            }
        };

        if submission.is_accepted() {
            writeln!(
                output,
                "{}",
                format!("✓ {number} {direction}: {}", word.to_uppercase()).green()
            )?;
        }
        match submission {
            Submission::Completed(_) => return Ok(RoundEnd::Completed(round.found_words())),
            Submission::Rejected(reason) => {
                writeln!(output, "{}", format!("✗ {}: {reason}", word.to_uppercase()).red())?;
            }
            Submission::Accepted(_) => {}
        }
    }
}

/// Parse `3 down WORD`, `3 d WORD` or `3d WORD`
fn parse_answer(text: &str) -> Option<(usize, Direction, &str)> {
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    let digits = first.find(|c: char| !c.is_ascii_digit()).unwrap_or(first.len());
    let number = first[..digits].parse().ok()?;

    let direction = if digits < first.len() {
        Direction::from_name(&first[digits..])?
    } else {
        Direction::from_name(tokens.next()?)?
    };

    let word = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((number, direction, word))
}

/// Parse cells written as `row,col` separated by spaces
fn parse_path(text: &str) -> Option<Vec<Cell>> {
    text.split_whitespace()
        .map(|cell| {
            let (row, col) = cell.split_once(',')?;
            Some(Cell::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
        })
        .collect()
}

fn write_found<W: Write>(output: &mut W, found: &[String]) -> Result<()> {
    if found.is_empty() {
        writeln!(output, "No words found yet.")?;
    } else {
        writeln!(output, "Found so far: {}", found.join(", "))?;
    }
    Ok(())
}

/// Prompt for a line of input, `None` at end of input
fn read_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
