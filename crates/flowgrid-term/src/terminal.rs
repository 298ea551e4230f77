//! Crossterm terminal driver: raw-mode setup, input mapping and drawing.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    terminal::{self, ClearType},
};

use crate::{Game, Input};

/// How long [`Terminal::poll`] waits for an event.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Maps a key press to an [`Input`].
fn key_input(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char('v') => Some(Input::TogglePaths),
        KeyCode::Char('g') => Some(Input::ToggleGrid),
        KeyCode::Char('r') => Some(Input::Scatter),
        _ => None,
    }
}

/// Maps a crossterm event to an [`Input`], using `game` to resolve mouse
/// positions. Clicks outside the board map to nothing.
pub fn to_input(game: &Game, ev: &Event) -> Option<Input> {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => key_input(*code),
        Event::Mouse(me) => {
            let MouseEventKind::Down(btn) = me.kind else {
                return None;
            };
            let p = game.cell_at(me.column, me.row)?;
            match btn {
                MouseButton::Left => Some(Input::ToggleWall(p)),
                MouseButton::Right => Some(Input::ToggleDestination(p)),
                MouseButton::Middle => None,
            }
        }
        _ => None,
    }
}

/// An initialised terminal. Call [`close`](Self::close) to restore it.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    /// Enter raw mode and the alternate screen, with mouse capture.
    pub fn init() -> Result<Self, Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        Ok(Self { out })
    }

    /// Wait briefly for the next event and map it to an [`Input`].
    pub fn poll(&mut self, game: &Game) -> Result<Option<Input>, Box<dyn std::error::Error>> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(None);
        }
        let ev = event::read()?;
        Ok(to_input(game, &ev))
    }

    /// Draw rendered lines from the top-left corner.
    pub fn draw(&mut self, lines: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        for (row, line) in lines.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, row as u16),
                terminal::Clear(ClearType::CurrentLine)
            )?;
            write!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Restore the terminal. Errors are ignored so this is safe on every
    /// exit path.
    pub fn close(mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use flowgrid_core::{BoardConfig, Point};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn clicks_map_to_toggles() {
        let game = Game::new(&BoardConfig::with_size(5, 5), 0).unwrap();
        assert_eq!(
            to_input(&game, &mouse(MouseEventKind::Down(MouseButton::Left), 4, 2)),
            Some(Input::ToggleWall(Point::new(2, 1)))
        );
        assert_eq!(
            to_input(&game, &mouse(MouseEventKind::Down(MouseButton::Right), 1, 5)),
            Some(Input::ToggleDestination(Point::new(0, 4)))
        );
        assert_eq!(
            to_input(&game, &mouse(MouseEventKind::Down(MouseButton::Left), 40, 2)),
            None
        );
        assert_eq!(
            to_input(&game, &mouse(MouseEventKind::Up(MouseButton::Left), 4, 2)),
            None
        );
    }

    #[test]
    fn keys_map_to_commands() {
        let game = Game::new(&BoardConfig::default(), 0).unwrap();
        let key = |c| Event::Key(KeyEvent::new(c, KeyModifiers::NONE));
        assert_eq!(to_input(&game, &key(KeyCode::Char('v'))), Some(Input::TogglePaths));
        assert_eq!(to_input(&game, &key(KeyCode::Char('g'))), Some(Input::ToggleGrid));
        assert_eq!(to_input(&game, &key(KeyCode::Char('r'))), Some(Input::Scatter));
        assert_eq!(to_input(&game, &key(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(to_input(&game, &key(KeyCode::Char('x'))), None);
    }
}
