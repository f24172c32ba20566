//! Word Bomb - CLI
//!
//! Timed word-fragment game with TUI and line-based modes, plus index inspection and
//! automated play.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use word_bomb::{
    commands::{SimulationConfig, analyze_fragment, fragment_report, run_simple, run_simulation},
    game::{
        DEFAULT_TRACKED_LETTERS, Difficulty, DifficultyProfile, GameConfig, GameSession, MAX_LIVES,
        STARTING_LIVES, TrackedLetters,
    },
    index::FragmentIndex,
    lexicon::LexiconSource,
    logging::{init_file_logging, init_logging},
    output::{print_analysis, print_fragment_report, print_simulation_result},
};

#[derive(Parser)]
#[command(
    name = "word_bomb",
    about = "Type a word containing the fragment before the bomb goes off",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'remote' (default, downloaded), 'starter' (bundled), a URL, or a file path
    #[arg(short = 'w', long, global = true, default_value = "remote")]
    wordlist: String,

    /// Difficulty: easy (default), medium, hard, expert
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: Difficulty,

    /// Override the minimum number of words a fragment needs
    #[arg(long, global = true)]
    min_words: Option<usize>,

    /// Override the turn duration in seconds
    #[arg(long, global = true)]
    turn_seconds: Option<f64>,

    /// Seed for reproducible fragment selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Lives at the start of a game
    #[arg(long, global = true, default_value_t = STARTING_LIVES)]
    lives: u32,

    /// Upper bound for lives, bonus lives included
    #[arg(long, global = true, default_value_t = MAX_LIVES)]
    max_lives: u32,

    /// Letters that must all be used to earn a bonus life
    #[arg(long, global = true, default_value = DEFAULT_TRACKED_LETTERS)]
    tracked_letters: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Show how many words contain a fragment
    Analyze {
        /// Fragment of 2 or 3 letters
        fragment: String,
    },

    /// Show how many fragments each difficulty can pick from
    Fragments,

    /// Run automated games in parallel
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Probability that the bot answers a turn (0 to 1)
        #[arg(long, default_value = "0.9")]
        skill: f64,

        /// Abandon games after this many turns
        #[arg(long, default_value = "10000")]
        max_turns: usize,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    setup_logging(&cli, &command)?;

    let profile = cli
        .difficulty
        .profile()
        .with_overrides(cli.min_words, cli.turn_seconds)?;
    let config = GameConfig::new(
        cli.lives,
        cli.max_lives,
        TrackedLetters::parse(&cli.tracked_letters)?,
    )?;

    let source = LexiconSource::from_arg(&cli.wordlist);
    eprintln!("Loading word list ({source})...");
    let lexicon = source
        .load()
        .with_context(|| format!("could not load word list from {source}"))?;
    let index = Arc::new(FragmentIndex::build(&lexicon));

    match command {
        Commands::Play => run_play_command(&cli, index, config, profile),
        Commands::Simple => {
            let mut session = new_session(&cli, index, config);
            run_simple(&mut session, &profile)
        }
        Commands::Analyze { fragment } => {
            let result = analyze_fragment(&index, &fragment)?;
            print_analysis(&result);
            Ok(())
        }
        Commands::Fragments => {
            let custom = is_custom(&cli).then_some(&profile);
            print_fragment_report(&fragment_report(&index, custom));
            Ok(())
        }
        Commands::Simulate {
            count,
            skill,
            max_turns,
        } => {
            let settings = SimulationConfig {
                games: count,
                skill,
                max_turns,
                base_seed: cli.seed.unwrap_or_else(rand::random),
                show_progress: true,
            };
            println!("🎯 Simulating {count} games at {profile}...");
            let result = run_simulation(&index, &config, &profile, &settings)?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn setup_logging(cli: &Cli, command: &Commands) -> Result<()> {
    match (&cli.log_file, command) {
        (Some(path), _) => init_file_logging(cli.verbose, path)
            .with_context(|| format!("could not log to {}", path.display()))?,
        // Log lines would corrupt the full-screen UI
        (None, Commands::Play) => {}
        (None, _) => init_logging(cli.verbose),
    }
    Ok(())
}

const fn is_custom(cli: &Cli) -> bool {
    cli.min_words.is_some() || cli.turn_seconds.is_some()
}

fn new_session(cli: &Cli, index: Arc<FragmentIndex>, config: GameConfig) -> GameSession {
    match cli.seed {
        Some(seed) => GameSession::seeded(index, config, seed),
        None => GameSession::new(index, config),
    }
}

fn run_play_command(
    cli: &Cli,
    index: Arc<FragmentIndex>,
    config: GameConfig,
    profile: DifficultyProfile,
) -> Result<()> {
    use word_bomb::interactive::{App, run_tui};

    let mut profiles: Vec<DifficultyProfile> =
        Difficulty::ALL.iter().map(|tier| tier.profile()).collect();
    let selected = if is_custom(cli) {
        profiles.push(profile);
        profiles.len() - 1
    } else {
        Difficulty::ALL
            .iter()
            .position(|&tier| tier == cli.difficulty)
            .unwrap_or(0)
    };

    let app = App::new(new_session(cli, index, config), profiles, selected);
    run_tui(app)
}
