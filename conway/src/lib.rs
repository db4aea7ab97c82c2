//! # conway
//!
//! Conway's Game of Life on a fixed 30x30 wrapping board, plus the session
//! state an interactive host drives it through.
//!
//! The host turns clicks, buttons and frame ticks into [`Command`]s and hands
//! them to [`Session::dispatch`]; the session owns the grid, the generation
//! counter and the running flag.

pub mod coro;
pub mod grid;
pub mod patterns;
pub mod session;

mod error;

pub use coro::EvaluatorKind;
pub use error::ConwayError;
pub use grid::{TGrid, GRID_SIZE};
pub use session::{Command, Ignored, Outcome, Session, DEFAULT_INTERVAL};
