pub mod types;
pub mod map;
pub mod config;
pub mod error;
pub mod frame;
pub mod board;
pub mod state;


pub use types::*;
pub use board::BoardView;
pub use config::GameConfig;
pub use error::FrameError;
pub use frame::{Frame, FrameKind, Message, PlayerStats};
pub use state::{Command, Rejection, Submission, TurnState};
