//! Line-oriented match driver for the gambit rules engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, Orientation, SessionOption};
pub use error::CommandError;
pub use session::{MatchState, Outcome, Session};
