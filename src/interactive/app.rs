//! TUI application state and logic

use crate::game::{
    DifficultyProfile, GameError, GameSession, LifeLoss, Phase, Submission, TickOutcome, TurnClock,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the input box stays red after a rejected word
pub const REJECT_FLASH: Duration = Duration::from_millis(500);

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<R: Rng = StdRng> {
    pub session: GameSession<R>,
    pub profiles: Vec<DifficultyProfile>,
    pub selected: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub reject_flash_until: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_words: usize,
    pub total_words: usize,
}

impl<R: Rng> App<R> {
    /// `profiles` are the choices offered on keys 1..; `selected` is preselected
    #[must_use]
    pub fn new(session: GameSession<R>, profiles: Vec<DifficultyProfile>, selected: usize) -> Self {
        let selected = selected.min(profiles.len().saturating_sub(1));
        let keys = choice_keys(profiles.len());

        Self {
            session,
            profiles,
            selected,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Type a word containing the fragment before the bomb goes off."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("Pick a difficulty with {keys}, then press Enter to start."),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            reject_flash_until: None,
        }
    }

    /// Currently selected profile
    #[must_use]
    pub fn profile(&self) -> Option<&DifficultyProfile> {
        self.profiles.get(self.selected)
    }

    /// Select a difficulty; ignored while a turn is running
    pub fn select_profile(&mut self, choice: usize) {
        if self.session.phase() == Phase::InTurn {
            return;
        }
        let Some(profile) = self.profiles.get(choice) else {
            return;
        };

        let text = format!("Difficulty: {profile}");
        self.selected = choice;
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn start_game(&mut self) {
        let Some(profile) = self.profile().cloned() else {
            self.add_message("No difficulty available!", MessageStyle::Error);
            return;
        };

        self.input_buffer.clear();
        self.reject_flash_until = None;
        self.messages.clear();

        if self.session.start_game(profile).is_none() {
            self.add_message(
                "No fragment has enough words for this difficulty. Try an easier tier.",
                MessageStyle::Error,
            );
        } else {
            self.add_message("Game started! Good luck.", MessageStyle::Info);
        }
    }

    /// Submit the input buffer as a word
    pub fn submit(&mut self, now: Instant) {
        let input = self.input_buffer.clone();

        match self.session.submit_word(&input) {
            Ok(Submission::Accepted { word, bonus }) => {
                self.input_buffer.clear();
                self.reject_flash_until = None;
                self.add_message(&format!("✓ {word}"), MessageStyle::Success);

                if let Some(bonus) = bonus {
                    let text = if bonus.life_gained {
                        "🎉 Alphabet complete! +1 life"
                    } else {
                        "🎉 Alphabet complete! Lives already full"
                    };
                    self.add_message(text, MessageStyle::Success);
                }
            }
            Ok(Submission::Rejected(reason)) => {
                self.input_buffer.clear();
                self.reject_flash_until = Some(now + REJECT_FLASH);
                self.add_message(&format!("✗ {reason}"), MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Apply elapsed time measured for `turn`
    pub fn apply_tick(&mut self, turn: u64, delta_seconds: f64) {
        match self.session.tick_turn(turn, delta_seconds) {
            Ok(TickOutcome::Running { .. }) | Err(GameError::StaleTick { .. }) => {}
            Ok(TickOutcome::LifeLost(LifeLoss::NextTurn { lives_remaining })) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("💥 Time's up! {lives_remaining} lives left"),
                    MessageStyle::Error,
                );
            }
            Ok(TickOutcome::LifeLost(LifeLoss::GameOver)) => {
                self.input_buffer.clear();
                self.record_game_over();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn record_game_over(&mut self) {
        let words = self.session.round().words_accepted();
        self.stats.games_played += 1;
        self.stats.total_words += words;
        self.stats.best_words = self.stats.best_words.max(words);

        self.add_message(
            &format!("💣 BOOM! Game over after {words} words."),
            MessageStyle::Error,
        );
        let text = format!(
            "Press Enter to play again or {} to change difficulty.",
            choice_keys(self.profiles.len())
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.session.phase() {
            Phase::Idle | Phase::GameOver => match key.code {
                KeyCode::Char(c @ '1'..='9') => {
                    let choice = c as usize - '1' as usize;
                    self.select_profile(choice);
                }
                KeyCode::Enter => self.start_game(),
                _ => {}
            },
            Phase::InTurn => match key.code {
                KeyCode::Char(c) if !c.is_control() => {
                    self.input_buffer.push(c);
                    self.reject_flash_until = None;
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(now),
                _ => {}
            },
        }
    }

    /// True while a rejection is being shown
    #[must_use]
    pub fn is_flashing(&self, now: Instant) -> bool {
        self.reject_flash_until.is_some_and(|until| now < until)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Key range text for `count` difficulty choices, such as `1-5`
pub(crate) fn choice_keys(count: usize) -> String {
    match count {
        0 | 1 => "1".to_string(),
        n => format!("1-{}", n.min(9)),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    let interval = app.session.round().config().tick_interval();
    let mut clock = TurnClock::new(app.session.turn(), Instant::now(), interval);

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        if event::poll(clock.time_until_due(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }

        let now = Instant::now();
        let turn = app.session.turn();
        if app.session.phase() == Phase::InTurn {
            if let Some(elapsed) = clock.due(turn, now) {
                app.apply_tick(turn, elapsed.as_secs_f64());
            }
        } else {
            clock.restart(turn, now);
        }
    }

    Ok(())
}
