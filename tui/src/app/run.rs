use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use session::SessionConfig;

use crate::{state::AppState, ui};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI application.
///
/// # Errors
/// Returns an error if the session cannot start or terminal setup or rendering fails.
pub fn run(config: SessionConfig) -> Result<()> {
    let mut state = AppState::new(&config)?;

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        state.tick();
        let view = state.view();
        terminal.draw(|f| ui::draw(f, &view))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match k.code {
                    KeyCode::Esc => break,
                    KeyCode::Enter => state.compute(),
                    KeyCode::F(2) => state.generate(),
                    KeyCode::Backspace => {
                        state.input.pop();
                    }
                    KeyCode::Char(c) => state.input.push(c),
                    _ => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
