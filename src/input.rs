//! Keyboard and touch input
//!
//! Raw key presses and swipes become [`InputEvent`]s; whether an event is
//! valid in the current state is decided by the game, not here.

use macroquad::input::{KeyCode, TouchPhase, get_keys_pressed, touches};
use macroquad::math::Vec2;

use crate::game::{ControlAction, Direction};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Control(ControlAction),
    /// Leave the application; handled by the frame loop
    Quit,
}

pub fn map_key(key: KeyCode) -> Option<InputEvent> {
    let event = match key {
        KeyCode::Up | KeyCode::W => InputEvent::Turn(Direction::Up),
        KeyCode::Down | KeyCode::S => InputEvent::Turn(Direction::Down),
        KeyCode::Left | KeyCode::A => InputEvent::Turn(Direction::Left),
        KeyCode::Right | KeyCode::D => InputEvent::Turn(Direction::Right),
        KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space => {
            InputEvent::Control(ControlAction::Confirm)
        }
        KeyCode::P => InputEvent::Control(ControlAction::TogglePause),
        KeyCode::Escape => InputEvent::Control(ControlAction::Menu),
        KeyCode::M => InputEvent::Control(ControlAction::ToggleMute),
        KeyCode::Q => InputEvent::Quit,
        _ => return None,
    };
    Some(event)
}

/// Direction of a swipe, or `None` if it is too short along its dominant axis
pub fn swipe_direction(delta: Vec2, min_distance: f32) -> Option<Direction> {
    if delta.x.abs() > delta.y.abs() {
        if delta.x.abs() <= min_distance {
            return None;
        }
        Some(if delta.x > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        if delta.y.abs() <= min_distance {
            return None;
        }
        Some(if delta.y > 0.0 { Direction::Down } else { Direction::Up })
    }
}

/// Remembers where the current touch started
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<Vec2>,
    min_distance: f32,
}

impl SwipeTracker {
    pub fn new(min_distance: f32) -> Self {
        Self { start: None, min_distance }
    }

    pub fn begin(&mut self, position: Vec2) {
        self.start = Some(position);
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// A long enough swipe turns the snake; anything shorter is a tap
    pub fn end(&mut self, position: Vec2) -> Option<InputEvent> {
        let start = self.start.take()?;
        let event = match swipe_direction(position - start, self.min_distance) {
            Some(direction) => InputEvent::Turn(direction),
            None => InputEvent::Control(ControlAction::Confirm),
        };
        Some(event)
    }
}

/// Map a frame's key presses in key code order, so the last turn to win is
/// the same whatever order the platform reported them in
pub fn map_keys(keys: impl IntoIterator<Item = KeyCode>) -> Vec<InputEvent> {
    let mut keys: Vec<KeyCode> = keys.into_iter().collect();
    keys.sort_by_key(|key| *key as u32);
    keys.into_iter().filter_map(map_key).collect()
}

/// Collect this frame's input events
pub fn poll_events(swipe: &mut SwipeTracker) -> Vec<InputEvent> {
    let mut events = map_keys(get_keys_pressed());

    for touch in touches() {
        match touch.phase {
            TouchPhase::Started => swipe.begin(touch.position),
            TouchPhase::Ended => events.extend(swipe.end(touch.position)),
            TouchPhase::Cancelled => swipe.cancel(),
            TouchPhase::Moved | TouchPhase::Stationary => {}
        }
    }
    events
}
