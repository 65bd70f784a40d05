//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! While a game is active the UI moves between these states:
//! - `Menu` → `EnteringLetter` → back to `Menu` once a key is pressed
//! - `Menu` → `EnteringWord` → back to `Menu` on `Enter` or `Esc`
//! - Terminal state: `GameOver`, left only by starting a new game

use crate::game::{GuessOutcome, MAX_GUESSES, PLACEHOLDER};
use crate::session::{GameInterface, TurnView, UserAction, describe_outcome};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_WORD_INPUT: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const GALLOWS_ROWS: usize = 7;
const GALLOWS_COLS: usize = 9;
const GALLOWS_WIDTH: u16 = 15;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    Menu,
    EnteringLetter,
    EnteringWord,
    GameOver,
}

/// Draws the gallows with one more part for every guess used.
fn gallows_lines(guesses_used: u32) -> Vec<String> {
    let mut grid = [[' '; GALLOWS_COLS]; GALLOWS_ROWS];
    for part in 1..=guesses_used.min(MAX_GUESSES) {
        match part {
            1 => grid[GALLOWS_ROWS - 1] = ['='; GALLOWS_COLS],
            2 => {
                for row in grid.iter_mut().take(GALLOWS_ROWS - 1).skip(1) {
                    row[2] = '|';
                }
            }
            3 => {
                grid[0][2..=6].copy_from_slice(&['+', '-', '-', '-', '+']);
            }
            4 => grid[1][6] = '|',
            5 => grid[2][6] = 'O',
            6 => grid[3][6] = '|',
            7 => grid[3][5] = '/',
            8 => grid[3][7] = '\\',
            9 => grid[4][5] = '/',
            _ => grid[4][7] = '\\',
        }
    }
    grid.iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    view: Option<&'a TurnView>,
    state: &'a TuiState,
    word_input: &'a str,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: Option<TurnView>,
    state: TuiState,
    word_input: String,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: None,
            state: TuiState::Menu,
            word_input: String::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            view: self.view.as_ref(),
            state: &self.state,
            word_input: &self.word_input,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(11), // Gallows and word
                Constraint::Min(6),     // Info panel
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.view);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, view: Option<&TurnView>) {
        let block = Block::default().title("Word").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(view) = view else {
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(10)])
            .split(inner);

        let gallows: Vec<Line> = gallows_lines(view.guesses_used)
            .into_iter()
            .map(Line::from)
            .collect();
        f.render_widget(Paragraph::new(gallows), columns[0]);

        let answer: Vec<char> = view
            .answer
            .as_deref()
            .map(|a| a.chars().collect())
            .unwrap_or_default();

        let mut spans = vec![Span::raw("  ")];
        for (i, letter) in view.revealed.chars().filter(|c| *c != ' ').enumerate() {
            let (text, style) = if letter != PLACEHOLDER {
                (letter, Style::default().fg(Color::Black).bg(Color::Green))
            } else if let Some(&missed) = answer.get(i) {
                (missed, Style::default().fg(Color::White).bg(Color::Red))
            } else {
                (' ', Style::default().fg(Color::White).bg(Color::DarkGray))
            };
            spans.push(Span::styled(format!(" {text} "), style));
            spans.push(Span::raw(" "));
        }

        // Vertically centre the tiles next to the gallows
        let tiles_area = Rect {
            y: columns[1].y + columns[1].height / 2,
            height: 1,
            ..columns[1]
        };
        f.render_widget(Paragraph::new(Line::from(spans)), tiles_area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(view) = ctx.view {
            let incorrect = if view.incorrect.is_empty() {
                "-"
            } else {
                view.incorrect.as_str()
            };
            lines.push(Line::from(vec![
                Span::styled("Incorrect letters: ", INFO_STYLE),
                Span::raw(incorrect.to_string()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Guesses left:      ", INFO_STYLE),
                Span::raw(view.guesses_left.to_string()),
            ]));
            lines.push(Line::from(""));
            if view.status.is_finished() {
                lines.push(Line::from(vec![Span::styled(
                    view.status_message(),
                    SUCCESS_STYLE,
                )]));
            }
        }

        if matches!(ctx.state, TuiState::EnteringWord) {
            lines.push(Line::from(vec![
                Span::styled("Your word: ", HEADER_STYLE),
                Span::raw(format!("{}_", ctx.word_input)),
            ]));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::Menu => "1: Guess a letter | 2: Guess the word | ESC: Quit",
            TuiState::EnteringLetter => "Press any letter to make a guess | ESC: Back",
            TuiState::EnteringWord => "Type the word | ENTER: Submit | BACKSPACE: Edit | ESC: Back",
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Garbage from terminal focus changes shows up as replacement or control characters
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}, state={:?}",
            key.code,
            key.modifiers,
            self.state
        );
        Ok(match self.state {
            TuiState::Menu => self.handle_menu_input(key),
            TuiState::EnteringLetter => self.handle_letter_input(key),
            TuiState::EnteringWord => self.handle_word_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        })
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn handle_menu_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Char('1') => {
                self.state = TuiState::EnteringLetter;
                self.status = "Press a letter".to_string();
                None
            }
            KeyCode::Char('2') => {
                self.word_input.clear();
                self.state = TuiState::EnteringWord;
                self.status = "Type a word and press ENTER".to_string();
                None
            }
            KeyCode::Esc => Some(UserAction::Exit),
            _ => {
                self.error_message = "Press 1, 2 or ESC.".to_string();
                None
            }
        }
    }

    fn handle_letter_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => {
                self.state = TuiState::Menu;
                None
            }
            KeyCode::Char(c) if !Self::has_modifier_keys(&key) => {
                self.state = TuiState::Menu;
                info_log!("handle_letter_input() - Letter guess '{}'", c);
                Some(UserAction::GuessLetter(c))
            }
            _ => None,
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Esc => {
                self.word_input.clear();
                self.state = TuiState::Menu;
                None
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => None,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.word_input.len() < MAX_WORD_INPUT {
                    self.word_input.push(c.to_ascii_uppercase());
                }
                None
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            KeyCode::Backspace => {
                self.word_input.pop();
                None
            }
            KeyCode::Enter if self.word_input.is_empty() => {
                self.error_message = "Type a word first!".to_string();
                None
            }
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.word_input);
                self.state = TuiState::Menu;
                info_log!("handle_word_input() - Word guess '{}'", word);
                Some(UserAction::GuessWord(word))
            }
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N' | '1') => Some(UserAction::NewGame),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn render(&mut self, view: &TurnView) {
        self.status = view.status_message();
        self.view = Some(view.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self, view: &TurnView) -> Option<UserAction> {
        if view.status.is_finished() {
            self.state = TuiState::GameOver;
        } else if self.state == TuiState::GameOver {
            self.state = TuiState::Menu;
        }

        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error ({}), returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_outcome(&mut self, outcome: GuessOutcome) {
        self.message = describe_outcome(outcome);
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.state = TuiState::Menu;
        self.word_input.clear();
        self.error_message.clear();
        self.message = format!("New game started. Picked a word from {word_count} candidates.");
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
