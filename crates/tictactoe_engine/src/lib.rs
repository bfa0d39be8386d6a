//! Tic-tac-toe game engine.
//!
//! The engine owns a single game's state and enforces the rules: X moves
//! first, players alternate, a cell is marked at most once, three in a row
//! wins, and a full board without a winner is a draw. A decided game accepts
//! no more selections until it is reset.
//!
//! Presentation lives outside this crate. A front end forwards the index of
//! the cell a user picked to [`GameEngine::select_cell`] and redraws from the
//! snapshot returned by [`GameEngine::status`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 1, 4, 2, 8] {
//!     engine.select_cell(index)?;
//! }
//! assert_eq!(*engine.status().outcome(), Outcome::Won(Mark::X));
//!
//! // A decided game rejects further input.
//! assert!(engine.select_cell(3).is_err());
//!
//! engine.reset();
//! assert_eq!(*engine.status().outcome(), Outcome::InProgress);
//! # Ok::<(), tictactoe_engine::SelectError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Placement, SelectError};
pub use engine::GameEngine;
pub use outcome::Outcome;
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Cell, Mark};
