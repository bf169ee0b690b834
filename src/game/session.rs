//! The game aggregate: one session's snake and food plus the screen
//! state machine, score, difficulty ramp and tick timer.

use std::collections::VecDeque;

use log::{debug, info};

use super::direction::Direction;
use super::food::Food;
use super::grid::{Cell, Grid};
use super::scheduler::TickScheduler;
use super::snake::Snake;
use super::state::{Collision, ControlAction, GameState, TickOutcome};
use crate::audio::SoundEffects;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::input::InputEvent;
use crate::storage::ScoreStore;

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub body: &'a VecDeque<Cell>,
    pub heading: Direction,
    pub food: Cell,
    pub state: GameState,
    pub score: u32,
    pub high_score: u32,
    pub tick_interval_ms: u32,
    pub muted: bool,
}

pub struct Game {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    state: GameState,
    score: u32,
    high_score: u32,
    tick_interval_ms: u32,
    scheduler: TickScheduler,
    store: Box<dyn ScoreStore>,
    sounds: Box<dyn SoundEffects>,
}

impl Game {
    pub fn new(
        config: GameConfig,
        mut store: Box<dyn ScoreStore>,
        mut sounds: Box<dyn SoundEffects>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height)?;
        let snake = Snake::new(&grid, config.initial_length);
        let food = Food::spawn(&grid, &snake.occupied());

        let high_score = store.load_high_score();
        sounds.set_muted(store.load_muted());
        info!(
            "New game on a {}x{} board, best score {}",
            grid.width(),
            grid.height(),
            high_score
        );

        Ok(Self {
            grid,
            snake,
            food,
            state: GameState::Start,
            score: 0,
            high_score,
            tick_interval_ms: config.initial_interval_ms,
            scheduler: TickScheduler::new(config.initial_interval_ms),
            store,
            sounds,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn is_muted(&self) -> bool {
        self.sounds.is_muted()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            body: self.snake.body(),
            heading: self.snake.heading(),
            food: self.food.position(),
            state: self.state,
            score: self.score,
            high_score: self.high_score,
            tick_interval_ms: self.tick_interval_ms,
            muted: self.sounds.is_muted(),
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Turn(direction) => self.handle_directional_input(direction),
            InputEvent::Control(action) => self.handle_control_action(action),
            InputEvent::Quit => false,
        }
    }

    /// Queue a turn. Only meaningful while playing.
    pub fn handle_directional_input(&mut self, direction: Direction) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.snake.propose_turn(direction);
        true
    }

    /// Returns whether the action changed anything
    pub fn handle_control_action(&mut self, action: ControlAction) -> bool {
        let applied = match action {
            ControlAction::Confirm => match self.state {
                GameState::Start => self.start(),
                GameState::GameOver => self.restart(),
                _ => false,
            },
            ControlAction::TogglePause => match self.state {
                GameState::Playing => self.pause(),
                GameState::Paused => self.resume(),
                _ => false,
            },
            ControlAction::Pause => self.pause(),
            ControlAction::Resume => self.resume(),
            ControlAction::Menu => self.return_to_menu(),
            ControlAction::ToggleMute => self.toggle_mute(),
        };
        if !applied {
            debug!("Ignored {:?} in {:?}", action, self.state);
        }
        applied
    }

    pub fn start(&mut self) -> bool {
        if self.state != GameState::Start {
            return false;
        }
        self.play();
        info!("Session started");
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Paused;
        self.scheduler.cancel();
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != GameState::Paused {
            return false;
        }
        self.play();
        true
    }

    /// Fresh session straight into play after a game over
    pub fn restart(&mut self) -> bool {
        if self.state != GameState::GameOver {
            return false;
        }
        self.reset_session();
        self.play();
        info!("Session restarted");
        true
    }

    /// Fresh session waiting on the start screen
    pub fn return_to_menu(&mut self) -> bool {
        if self.state != GameState::GameOver {
            return false;
        }
        self.reset_session();
        self.state = GameState::Start;
        true
    }

    pub fn toggle_mute(&mut self) -> bool {
        let muted = !self.sounds.is_muted();
        self.sounds.set_muted(muted);
        self.store.save_muted(muted);
        true
    }

    /// Called once per frame. Runs at most one tick, and only when one is due.
    pub fn update(&mut self, now_ms: f64) -> TickOutcome {
        if self.state != GameState::Playing || !self.scheduler.poll(now_ms) {
            return TickOutcome::Idle;
        }
        self.tick()
    }

    fn tick(&mut self) -> TickOutcome {
        self.snake.advance();
        let head = self.snake.head();

        let collision = if self.grid.is_outside(head) {
            Some(Collision::Wall)
        } else if self.snake.collides_with_self() {
            Some(Collision::Body)
        } else {
            None
        };
        if let Some(collision) = collision {
            self.game_over(collision);
            return TickOutcome::GameOver(collision);
        }

        if self.food.is_at(head) {
            self.eat();
            return TickOutcome::Ate;
        }
        TickOutcome::Moved
    }

    fn eat(&mut self) {
        self.score += 1;
        self.record_high_score();

        if self.score % self.config.speedup_every == 0
            && self.tick_interval_ms > self.config.min_interval_ms
        {
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(self.config.speedup_ms)
                .max(self.config.min_interval_ms);
            self.scheduler.set_interval(self.tick_interval_ms);
            info!("Speed up: {}ms per tick at score {}", self.tick_interval_ms, self.score);
        }

        self.snake.grow();
        self.food.respawn(&self.grid, &self.snake.occupied());
        self.sounds.on_eat();
    }

    fn game_over(&mut self, collision: Collision) {
        self.state = GameState::GameOver;
        self.scheduler.cancel();
        self.record_high_score();
        self.sounds.on_game_over();
        info!("Game over ({:?}), final score {}", collision, self.score);
    }

    fn record_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save_high_score(self.score);
            info!("New best score {}", self.score);
        }
    }

    fn play(&mut self) {
        self.state = GameState::Playing;
        self.scheduler.arm();
    }

    fn reset_session(&mut self) {
        self.snake.reset(&self.grid, self.config.initial_length);
        self.score = 0;
        self.tick_interval_ms = self.config.initial_interval_ms;
        self.scheduler.cancel();
        self.scheduler.set_interval(self.tick_interval_ms);
        self.food.respawn(&self.grid, &self.snake.occupied());
    }
}
