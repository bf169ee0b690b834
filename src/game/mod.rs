//! Game module

pub mod direction;
pub mod food;
pub mod grid;
pub mod scheduler;
pub mod session;
pub mod snake;
pub mod state;

pub use direction::Direction;
pub use food::Food;
pub use grid::{Cell, Grid};
pub use scheduler::TickScheduler;
pub use session::{Game, Snapshot};
pub use snake::Snake;
pub use state::{Collision, ControlAction, GameState, TickOutcome};
