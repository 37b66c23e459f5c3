//! Word Puzzle - CLI
//!
//! Query the dictionary, solve racks and grids, and play the built-in puzzles.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::debug;
use std::io;
use word_puzzle::{
    commands::{
        check_prefix, check_word, find_words, form_word, match_pattern, run_play, solve_catalog,
        solve_grid,
    },
    dictionary::{
        Dictionary, DictionaryConfig, GRID_MIN_LENGTH, RACK_MIN_LENGTH, SharedDictionary,
        WordSource,
    },
    output::{
        print_catalog_report, print_find_result, print_form_check, print_grid_result,
        print_pattern_check, print_prefix_check, print_word_check,
    },
    progress::{GameKind, Progress},
    wordlists::{EmbeddedSource, FileSource},
};

/// Number of example words listed by `prefix`
const PREFIX_EXAMPLES: usize = 10;

#[derive(Parser)]
#[command(
    name = "word_puzzle",
    about = "Trie-backed word discovery for rack, grid and pattern puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Shortest word the dictionary accepts (default: 4 for grids, 5 otherwise)
    #[arg(short = 'm', long, global = true)]
    min_length: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a word is in the dictionary
    Check {
        /// Word to look up
        word: String,
    },

    /// Check whether any word starts with a prefix
    Prefix {
        /// Prefix to look up
        prefix: String,
    },

    /// Find every word a rack can spell ('*' is a wildcard)
    Find {
        /// Rack letters, e.g. "STARED*"
        rack: String,
    },

    /// Check whether a rack can spell a word
    Form {
        /// Rack letters, e.g. "STARED*"
        rack: String,

        /// Word to spell
        word: String,
    },

    /// Resolve a pattern with one '*' to a dictionary word
    Match {
        /// Pattern, e.g. "DA*E"
        pattern: String,
    },

    /// Find every word hidden in a letter grid
    Grid {
        /// Grid rows, e.g. "STAR" "XEXX" "XXAX"
        #[arg(required = true)]
        rows: Vec<String>,
    },

    /// Solve every built-in puzzle (grids use words of 4+ letters)
    Puzzles,

    /// Play the built-in puzzles interactively (default)
    Play {
        /// Game: rearrange (default), find-words or crossword
        #[arg(short, long, default_value = "rearrange")]
        game: String,

        /// Round to start at, counting from 1
        #[arg(short, long)]
        round: Option<usize>,
    },
}

impl Commands {
    /// Minimum word length when `--min-length` is not given
    fn default_min_length(&self) -> usize {
        match self {
            Self::Grid { .. } => GRID_MIN_LENGTH,
            Self::Play { game, .. } if GameKind::from_name(game) == Some(GameKind::FindWords) => {
                GRID_MIN_LENGTH
            }
            _ => RACK_MIN_LENGTH,
        }
    }
}

/// Pick the word source for the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": a custom word list read from disk
fn load_source(wordlist: &str) -> Box<dyn WordSource> {
    match wordlist {
        "embedded" => Box::new(EmbeddedSource),
        path => Box::new(FileSource::new(path)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        game: GameKind::Rearrange.name().to_string(),
        round: None,
    });
    let min_length = cli
        .min_length
        .unwrap_or_else(|| command.default_min_length());

    let shared = SharedDictionary::new(DictionaryConfig::new(min_length));
    let source = load_source(&cli.wordlist);
    let dictionary = shared
        .get_or_load(source.as_ref())
        .with_context(|| format!("Failed to load word list from {}", source.describe()))?;
    debug!(
        "Dictionary ready with {} words of at least {min_length} letters",
        dictionary.len()
    );

    match command {
        Commands::Check { word } => print_word_check(&check_word(dictionary, &word)),
        Commands::Prefix { prefix } => {
            print_prefix_check(&check_prefix(dictionary, &prefix, PREFIX_EXAMPLES));
        }
        Commands::Find { rack } => print_find_result(&find_words(dictionary, &rack)?),
        Commands::Form { rack, word } => print_form_check(&form_word(dictionary, &rack, &word)?),
        Commands::Match { pattern } => print_pattern_check(&match_pattern(dictionary, &pattern)),
        Commands::Grid { rows } => print_grid_result(&solve_grid(dictionary, &rows)?),
        Commands::Puzzles => {
            let grid_length = cli.min_length.unwrap_or(GRID_MIN_LENGTH);
            let grid_shared = SharedDictionary::new(DictionaryConfig::new(grid_length));
            let grid_dictionary = grid_shared
                .get_or_load(source.as_ref())
                .with_context(|| format!("Failed to load word list from {}", source.describe()))?;
            print_catalog_report(&solve_catalog(dictionary, grid_dictionary, true)?);
        }
        Commands::Play { game, round } => run_play_command(dictionary, &game, round)?,
    }

    Ok(())
}

fn run_play_command(dictionary: &Dictionary, game: &str, round: Option<usize>) -> Result<()> {
    let Some(game) = GameKind::from_name(game) else {
        bail!("Unknown game '{game}' (expected 'rearrange', 'find-words' or 'crossword')");
    };
    let round = match round {
        Some(0) => bail!("Rounds are numbered from 1"),
        Some(round) => Some(round - 1),
        None => None,
    };

    let mut progress = Progress::new();
    let stdin = io::stdin();
    run_play(
        dictionary,
        &mut progress,
        game,
        round,
        &mut stdin.lock(),
        &mut io::stdout(),
    )
}
