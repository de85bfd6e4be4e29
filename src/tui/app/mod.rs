//! Terminal handling shared by interactive apps.
//!
//! [`App`] owns the ratatui terminal (raw mode + alternate screen, restored
//! on drop). [`TuiApp`] is the event loop an interactive screen plugs into.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Terminal wrapper with a fixed input poll interval.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Enter raw mode and the alternate screen.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    /// Terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to one tick for an input event.
    pub fn poll_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Whether `key` is Ctrl+C.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// An interactive screen driven by [`TuiApp::run`].
pub trait TuiApp {
    fn app(&mut self) -> &mut App;

    fn should_quit(&self) -> bool;

    fn handle_key(&mut self, key: KeyEvent) -> Result<()>;

    fn draw(&mut self) -> Result<()>;

    /// Called once per loop iteration, after input handling.
    fn on_tick(&mut self) {}

    /// Draw, wait for input, repeat until [`TuiApp::should_quit`].
    fn run(&mut self) -> Result<()> {
        while !self.should_quit() {
            self.draw()?;
            // resize events need no handling: the next draw picks up the new size
            if let Some(Event::Key(key)) = self.app().poll_event()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)?;
                }
            }
            self.on_tick();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_is_interrupt() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&key));
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_interrupt(&plain));
    }
}
