//! Single-player Snake on macroquad
//!
//! The [`game`] module holds the rules and the screen state machine; the
//! other modules are the pieces around it (input, drawing, sound, saving).

pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod storage;

pub use config::GameConfig;
pub use error::{ConfigError, SaveError};
pub use game::{Game, GameState};
