pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod history;
pub mod move_log;
pub mod player;
pub mod tic_tac_toe;

pub use config::Config;
pub use console::Console;
pub use error::GameError;
pub use game::{GameLoop, Outcome};
pub use move_log::{DirectoryStore, GameLog, LogStore, NullStore};
pub use player::{Mode, Player};
pub use tic_tac_toe::{Board, Cell, Marker, Position};
