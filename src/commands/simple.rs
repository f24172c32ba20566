//! Simple line-based mode
//!
//! Text game without the TUI. The time between showing a fragment and reading the
//! answer is applied to the timer before the answer is judged, so a slow answer can
//! still cost a life.

use crate::game::{
    DifficultyProfile, GameSession, LifeLoss, Phase, RoundView, Submission, TickOutcome,
    TurnClock,
};
use crate::output::formatters::{hearts, letter_strip};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the line-based game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>, profile: &DifficultyProfile) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(session, profile, stdin.lock(), &mut stdout)
}

/// Line-based game loop over arbitrary input and output
///
/// Ends on `/quit`, on a declined replay, or at end of input. Commands start with
/// `/` so they can never shadow a word.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play_lines<R, I, O>(
    session: &mut GameSession<R>,
    profile: &DifficultyProfile,
    mut input: I,
    out: &mut O,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "  W O R D   B O M B".bright_red().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "\nDifficulty: {profile}")?;
    writeln!(out, "Type a word containing the fragment before the timer runs out.")?;
    writeln!(out, "Commands: '/new' to restart, '/quit' to exit\n")?;

    session.start_game(profile.clone());
    let mut clock = TurnClock::new(
        session.turn(),
        Instant::now(),
        session.round().config().tick_interval(),
    );

    loop {
        match session.phase() {
            Phase::Idle => {
                session.start_game(profile.clone());
            }
            Phase::InTurn => {
                print_turn(&session.view(), out)?;

                let turn = session.turn();
                clock.restart(turn, Instant::now());
                let Some(line) = read_line(&mut input)? else {
                    return Ok(());
                };

                match parse_command(&line) {
                    Some(Command::Quit) => {
                        writeln!(out, "\nThanks for playing!\n")?;
                        return Ok(());
                    }
                    Some(Command::NewGame) => {
                        session.start_game(profile.clone());
                        writeln!(out, "\nNew game started!")?;
                        continue;
                    }
                    Some(Command::Unknown) => {
                        writeln!(out, "{} unknown command '{line}'", "?".yellow().bold())?;
                        continue;
                    }
                    None => {}
                }

                let elapsed = clock.drain(turn, Instant::now()).as_secs_f64();
                if let TickOutcome::LifeLost(loss) = session.tick_turn(turn, elapsed)? {
                    writeln!(out, "{}", "💥 Too slow!".red().bold())?;
                    if let LifeLoss::NextTurn { lives_remaining } = loss {
                        writeln!(out, "   {lives_remaining} lives left")?;
                    }
                    continue;
                }

                match session.submit_word(&line)? {
                    Submission::Accepted { word, bonus } => {
                        writeln!(out, "{} {}", "✓".green().bold(), word.text().green())?;
                        if let Some(bonus) = bonus {
                            let note = if bonus.life_gained {
                                "Alphabet complete! +1 life"
                            } else {
                                "Alphabet complete! (lives already full)"
                            };
                            writeln!(out, "{}", note.bright_yellow().bold())?;
                        }
                    }
                    Submission::Rejected(reason) => {
                        writeln!(out, "{} {reason}", "✗".red().bold())?;
                    }
                }
            }
            Phase::GameOver => {
                let view = session.view();
                writeln!(out, "\n{}", view.fragment_text.bright_red().bold())?;
                writeln!(
                    out,
                    "Words: {}   Bonuses: {}",
                    view.words_accepted, view.bonuses_awarded
                )?;

                write!(out, "Play again? (yes/no): ")?;
                out.flush()?;
                let answer = read_line(&mut input)?.unwrap_or_default().to_lowercase();
                if matches!(answer.as_str(), "yes" | "y") {
                    session.start_game(profile.clone());
                    writeln!(out, "\nNew game started!")?;
                } else {
                    writeln!(out, "\nThanks for playing!\n")?;
                    return Ok(());
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    NewGame,
    Quit,
    Unknown,
}

/// Slash-prefixed commands; anything else is a submission
fn parse_command(line: &str) -> Option<Command> {
    let name = line.strip_prefix('/')?;
    Some(match name.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        _ => Command::Unknown,
    })
}

fn print_turn<O: Write>(view: &RoundView, out: &mut O) -> io::Result<()> {
    let timer = format!("{:4.1}s", view.remaining_seconds);
    let timer = if view.low_time {
        timer.red().bold()
    } else {
        timer.normal()
    };

    writeln!(
        out,
        "\n{}  {}  {}",
        hearts(view.lives, view.max_lives).red(),
        view.fragment_text.bright_yellow().bold(),
        timer
    )?;
    writeln!(out, "{}", letter_strip(&view.letters).bright_black())?;
    write!(out, "Word: ")?;
    out.flush()
}

/// Read one trimmed line; `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
