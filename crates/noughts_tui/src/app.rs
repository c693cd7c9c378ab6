//! Application state and key handling.

use crate::input;
use crossterm::event::{KeyCode, KeyEvent};
use noughts::{Outcome, Position, Session};
use tracing::debug;

/// What a key press asked the event loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    ascending: bool,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
            ascending: true,
            status_message: "Player X's turn. Arrows move, Enter or 1-9 plays.".to_string(),
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The cell cursor on the grid.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press, returning whether the loop should continue.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('[') => self.step_history(-1),
            KeyCode::Char(']') => self.step_history(1),
            KeyCode::Char('g') => self.jump(0),
            KeyCode::Char('e') => self.jump(self.session.records().len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index)
                {
                    self.play_at(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            _ => {}
        }
        Control::Continue
    }

    /// One display line per history record, in the configured sort
    /// order, paired with its history index. The cursor entry reads
    /// "You are at move #n" like the others read "Go to move #n".
    pub fn move_list(&self) -> Vec<(usize, String)> {
        let cursor = self.session.cursor();
        let mut moves: Vec<(usize, String)> = self
            .session
            .records()
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let label = match (idx == cursor, record.position()) {
                    (true, _) => format!("You are at move #{idx}"),
                    (false, None) => "Go to game start".to_string(),
                    (false, Some(pos)) => {
                        format!("Go to move #{idx} ({}, {})", pos.row(), pos.col())
                    }
                };
                (idx, label)
            })
            .collect();

        if !self.ascending {
            moves.reverse();
        }
        moves
    }

    /// Whether the move list is displayed oldest first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    fn play_at(&mut self, pos: Position) {
        debug!(?pos, "Playing move");
        match self.session.play(pos) {
            Ok(()) => {
                self.status_message = match self.session.outcome() {
                    Outcome::Ongoing => format!("Player {}'s turn", self.session.to_move()),
                    Outcome::Won { winner, .. } => {
                        format!("Player {winner} wins! Press 'r' to restart or 'q' to quit.")
                    }
                    Outcome::Draw => {
                        "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string()
                    }
                };
            }
            Err(e) => {
                self.status_message = format!("Move rejected: {e}.");
            }
        }
    }

    fn step_history(&mut self, delta: isize) {
        let Some(target) = self.session.cursor().checked_add_signed(delta) else {
            return;
        };
        self.jump(target);
    }

    fn jump(&mut self, index: usize) {
        match self.session.jump_to(index) {
            Ok(()) => {
                self.status_message = if index == 0 {
                    format!("At game start. Player {}'s turn.", self.session.to_move())
                } else {
                    format!("Viewing move #{index}. Playing here discards later moves.")
                };
            }
            Err(e) => {
                debug!(error = %e, "Jump rejected");
            }
        }
    }

    fn toggle_sort(&mut self) {
        self.ascending = !self.ascending;
        self.status_message = if self.ascending {
            "Move list sorted oldest first.".to_string()
        } else {
            "Move list sorted newest first.".to_string()
        };
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.session = Session::new();
        self.status_message = "Game restarted. Player X's turn.".to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn test_move_list_descriptors() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));

        let list = app.move_list();
        assert_eq!(
            list,
            vec![
                (0, "Go to game start".to_string()),
                (1, "Go to move #1 (0, 0)".to_string()),
                (2, "You are at move #2".to_string()),
            ]
        );
    }

    #[test]
    fn test_sort_toggle_is_a_view_transform() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        let ascending = app.move_list();

        press(&mut app, KeyCode::Char('s'));
        let descending = app.move_list();

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
        // The session itself is untouched by the toggle.
        assert_eq!(app.session().cursor(), 2);
        assert_eq!(app.session().records().len(), 3);
    }

    #[test]
    fn test_rejected_move_only_updates_status() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('5'));
        let session_before = app.session().clone();

        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.session(), &session_before);
        assert!(app.status_message().starts_with("Move rejected"));
    }

    #[test]
    fn test_history_keys_step_and_jump() {
        let mut app = App::new();
        for key in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(key));
        }

        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.session().cursor(), 2);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.session().cursor(), 0);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.session().cursor(), 3);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Char('x')), Control::Continue);
    }
}
