//! Pure tic-tac-toe game logic with move-history navigation.
//!
//! The crate splits into a stateless rules layer and a stateful
//! session layer:
//!
//! - [`rules::evaluate`] maps any [`Board`] snapshot to an [`Outcome`],
//!   including the completed line on a win.
//! - [`Session`] owns the ordered history of board snapshots and the
//!   cursor into it. Moves apply with branch-and-discard semantics:
//!   playing from an earlier record discards the moves after it.
//!
//! # Example
//!
//! ```
//! use noughts::{Outcome, Player, Position, Session};
//!
//! let mut session = Session::new();
//! session.play(Position::TopLeft)?;
//! session.play(Position::Center)?;
//! assert_eq!(session.to_move(), Player::X);
//! assert_eq!(session.outcome(), Outcome::Ongoing);
//! # Ok::<(), noughts::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
pub mod rules;
mod session;
mod types;

pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use session::{JumpError, MoveRecord, PlayError, Session};
pub use types::{Board, Player, Square};
