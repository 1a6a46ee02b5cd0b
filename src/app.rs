//! Application state and key handling

use crate::config::TuiConfig;
use crate::platform;
use crate::state::{ContactForm, Form, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Main application struct
pub struct App {
    /// The contact form being edited
    pub form: ContactForm,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            form: ContactForm::new(),
            config,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Accent color for active borders, from config with a cyan default
    pub fn accent_color(&self) -> Color {
        match self.config.accent_color.as_deref() {
            Some("blue") => Color::Blue,
            Some("green") => Color::Green,
            Some("magenta") => Color::Magenta,
            Some("yellow") => Color::Yellow,
            _ => Color::Cyan,
        }
    }

    /// Whether the help bar is shown (on unless configured off)
    pub fn show_help_bar(&self) -> bool {
        self.config.show_help_bar.unwrap_or(true)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            // Submit shortcut works from anywhere in the form
            KeyCode::Char('s') if key.modifiers.contains(platform::SUBMIT_MODIFIER) => {
                self.submit();
            }
            KeyCode::Enter => {
                // Enter in the message field adds a newline; everywhere
                // else (fields and submit row) it submits the form
                if self.form.active_id().is_some_and(|id| id.is_multiline()) {
                    self.form.input_char('\n');
                } else {
                    self.submit();
                }
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    /// Run a submit attempt and surface the outcome
    fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Accepted => {
                tracing::info!("submission accepted");
                self.status_message = Some("Submitted!".to_string());
            }
            SubmitOutcome::Rejected => {
                let count = self.form.error_count();
                tracing::debug!(errors = count, "submission rejected");
                self.status_message = Some(if count == 1 {
                    "1 field needs attention".to_string()
                } else {
                    format!("{count} fields need attention")
                });
            }
        }
    }
}
