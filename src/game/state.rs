//! Screens, control actions and tick results

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Non-directional commands coming from the player
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlAction {
    /// Start from the start screen, play again from game over
    Confirm,
    TogglePause,
    Pause,
    Resume,
    /// Back to the start screen after a game over
    Menu,
    ToggleMute,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// What [`crate::game::Game::update`] did this frame
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No tick was due
    Idle,
    Moved,
    Ate,
    GameOver(Collision),
}
