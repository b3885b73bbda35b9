//! TUI application state and logic

use crate::core::Rejection;
use crate::session::{Outcome, Session};
use crate::validation::Lexicon;
use crate::wordlists::DictionarySource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, L> {
    pub session: Session<L>,
    pub source: &'a DictionarySource,
    rng: StdRng,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Modal error shown after a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<&Rejection> for Alert {
    fn from(rejection: &Rejection) -> Self {
        Self {
            title: rejection.title().to_string(),
            message: rejection.message(),
        }
    }
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

impl<'a, L: Lexicon> App<'a, L> {
    #[must_use]
    pub fn new(session: Session<L>, source: &'a DictionarySource, rng: StdRng) -> Self {
        Self {
            session,
            source,
            rng,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Create new words out of the root word!".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Submit the typed word
    ///
    /// The input is cleared once a word is accepted; after a rejection it stays
    /// so a typo can be fixed.
    pub fn submit(&mut self) {
        match self.session.play(&self.input_buffer) {
            Outcome::Ignored => {}
            Outcome::Accepted(word) => {
                self.input_buffer.clear();
                self.add_message(&format!("Nice! '{word}' added"), MessageStyle::Success);
            }
            Outcome::Rejected(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
                self.alert = Some(Alert::from(&rejection));
            }
        }
    }

    /// Start over with a fresh root word
    pub fn new_word(&mut self) {
        self.session.new_game(self.source, &mut self.rng);
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        let text = format!("New word: {}", self.session.root().to_uppercase());
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        // AltGr arrives as Ctrl+Alt on Windows
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);
        if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if ctrl => self.new_word(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.clear_input(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<L: Lexicon>(app: App<'_, L>) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend, L: Lexicon>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, L>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
