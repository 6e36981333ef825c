//! Grid model and game state machine
//!
//! Input flows `Key` → [`GameController`] → [`Grid`]; on submit the row is
//! scored atomically and a [`RevealSchedule`] paces its presentation.

mod controller;
mod dictionary;
mod grid;
mod reveal;
mod state;
mod stats;

pub use controller::{GameController, Key, Outcome};
pub use dictionary::Dictionary;
pub use grid::{Cell, Grid, Row};
pub use reveal::{RevealSchedule, RevealStep};
pub use state::{GameState, GameStatus};
pub use stats::Statistics;
