//! TUI rendering with ratatui
//!
//! Draws the bomb: fragment, fuse timer, lives, the tracked alphabet and the live
//! input preview.

use super::app::{App, MessageStyle, choice_keys};
use crate::game::{Phase, RoundView, highlight_fragment};
use crate::output::formatters::hearts;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>, now: Instant) {
    let view = app.session.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Bomb
            Constraint::Percentage(40), // Difficulty and messages
        ])
        .split(chunks[1]);

    render_bomb(f, &view, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, &view, now, chunks[2]);
    render_status(f, app, &view, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("💣 WORD BOMB")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_bomb(f: &mut Frame, view: &RoundView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Fragment
            Constraint::Length(3), // Timer
            Constraint::Length(4), // Alphabet
        ])
        .split(area);

    render_fragment(f, view, chunks[0]);
    render_timer(f, view, chunks[1]);
    render_letters(f, view, chunks[2]);
}

fn render_fragment(f: &mut Frame, view: &RoundView, area: Rect) {
    let color = match view.phase {
        Phase::Idle => Color::DarkGray,
        Phase::InTurn if view.fragment.is_none() => Color::DarkGray,
        Phase::InTurn => Color::Yellow,
        Phase::GameOver => Color::Red,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            view.fragment_text.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hearts(view.lives, view.max_lives),
            Style::default().fg(Color::Red),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Fragment ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_timer(f: &mut Frame, view: &RoundView, area: Rect) {
    let color = if view.low_time {
        Color::Red
    } else {
        Color::Green
    };
    let percent = (view.time_fraction.clamp(0.0, 1.0) * 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Fuse ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{:.1}s", view.remaining_seconds));

    f.render_widget(gauge, area);
}

fn render_letters(f: &mut Frame, view: &RoundView, area: Rect) {
    let tiles: Vec<Span> = view
        .letters
        .iter()
        .map(|tile| {
            let style = if tile.used {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            };
            Span::styled(format!("{} ", tile.letter), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(tiles))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Alphabet {}/{} ",
                    view.letters_used(),
                    view.letters.len()
                ))
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.profiles.len() as u16 + 2), // Difficulty list
            Constraint::Min(3),                                 // Messages
        ])
        .split(area);

    render_difficulties(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_difficulties<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let items: Vec<ListItem> = app
        .profiles
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            let marker = if i == app.selected { "▶" } else { " " };
            let style = if i == app.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{marker} {}. {profile}", i + 1)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Difficulty ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, view: &RoundView, now: Instant, area: Rect) {
    let (title, color) = match view.phase {
        Phase::InTurn if app.is_flashing(now) => (" Rejected! ", Color::Red),
        Phase::InTurn => (" Type a word | Enter to submit ", Color::Yellow),
        Phase::Idle => (" Press Enter to start ", Color::Cyan),
        Phase::GameOver => (" Game over | Enter to play again ", Color::Red),
    };

    let parts = highlight_fragment(&app.input_buffer, view.fragment.as_ref());
    let content = Line::from(vec![
        Span::raw(parts.before),
        Span::styled(
            parts.matched,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Span::raw(parts.after),
    ]);

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, view: &RoundView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Phase: {}", view.phase)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let words = Paragraph::new(format!(
        "Words: {} | Bonuses: {}",
        view.words_accepted, view.bonuses_awarded
    ))
    .alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let stats = Paragraph::new(format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_words
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new(format!(
        "Esc: Quit | {}: Difficulty | Enter: Start/Submit",
        choice_keys(app.profiles.len())
    ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DifficultyProfile, GameConfig, GameSession};
    use crate::index::FragmentIndex;
    use crate::lexicon::Lexicon;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn test_app() -> App {
        let index = Arc::new(FragmentIndex::build(&Lexicon::from_entries([
            "cat", "catalog", "scatter",
        ])));
        let session = GameSession::seeded(index, GameConfig::default(), 2);
        App::new(
            session,
            vec![DifficultyProfile::new("Strict", 3, 5.0).unwrap()],
            0,
        )
    }

    #[test]
    fn idle_screen_shows_placeholder() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app, Instant::now())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("WORD BOMB"));
        assert!(text.contains("..."));
        assert!(text.contains("Press Enter to start"));
        assert!(text.contains("Esc: Quit | 1: Difficulty"));
    }

    #[test]
    fn running_game_shows_fragment_and_alphabet() {
        let mut app = test_app();
        app.start_game();
        let fragment = app.session.view().fragment_text;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app, Instant::now())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(&fragment));
        assert!(text.contains("Alphabet 0/25"));
        assert!(text.contains("Strict"));
    }
}
