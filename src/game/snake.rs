//! The player's snake

use std::collections::{HashSet, VecDeque};

use super::direction::Direction;
use super::grid::{Cell, Grid};

#[derive(Debug, Clone)]
pub struct Snake {
    /// Head is front, tail is back
    body: VecDeque<Cell>,
    heading: Direction,
    /// Turn requested since the last tick, last write wins
    pending: Option<Direction>,
    growth_pending: bool,
}

impl Snake {
    /// A horizontal snake with its head on the board centre, facing right.
    /// `length` must be at least 1.
    pub fn new(grid: &Grid, length: usize) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(length.max(1)),
            heading: Direction::Right,
            pending: None,
            growth_pending: false,
        };
        snake.reset(grid, length);
        snake
    }

    pub fn reset(&mut self, grid: &Grid, length: usize) {
        let start = grid.center();
        self.body.clear();
        self.body
            .extend((0..length.max(1) as i32).map(|i| Cell { x: start.x - i, y: start.y }));
        self.heading = Direction::Right;
        self.pending = None;
        self.growth_pending = false;
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Queue a turn for the next tick. Reversals are dropped.
    pub fn propose_turn(&mut self, heading: Direction) {
        if self.heading.is_opposite(heading) {
            return;
        }
        self.pending = Some(heading);
    }

    /// Extend the body on the next [`Snake::advance`]
    pub fn grow(&mut self) {
        self.growth_pending = true;
    }

    /// Move one cell along the heading
    pub fn advance(&mut self) {
        // Re-check against the heading in effect now, not when it was queued
        if let Some(next) = self.pending.take() {
            if !self.heading.is_opposite(next) {
                self.heading = next;
            }
        }

        let new_head = self.head().step(self.heading);
        self.body.push_front(new_head);

        if self.growth_pending {
            self.growth_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|c| *c == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.body().iter().copied().collect()
    }

    fn snake_5x5() -> Snake {
        Snake::new(&Grid::new(5, 5).unwrap(), 3)
    }

    #[test]
    fn test_new_snake() {
        let snake = snake_5x5();
        assert_eq!(cells(&snake), vec![Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)]);
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), None);
    }

    #[test]
    fn test_advance_straight() {
        let mut snake = snake_5x5();
        snake.advance();
        assert_eq!(cells(&snake), vec![Cell::new(3, 2), Cell::new(2, 2), Cell::new(1, 2)]);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = snake_5x5();
        snake.propose_turn(Direction::Left);
        assert_eq!(snake.pending_heading(), None);
        snake.advance();
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.head(), Cell::new(3, 2));
    }

    #[test]
    fn test_last_proposal_wins() {
        let mut snake = snake_5x5();
        snake.propose_turn(Direction::Up);
        snake.propose_turn(Direction::Down);
        snake.advance();
        assert_eq!(snake.heading(), Direction::Down);
        assert_eq!(snake.head(), Cell::new(2, 3));
        assert_eq!(snake.pending_heading(), None);
    }

    #[test]
    fn test_stale_proposal_revalidated_at_tick() {
        let mut snake = snake_5x5();
        snake.propose_turn(Direction::Up);
        snake.advance();
        assert_eq!(snake.heading(), Direction::Up);

        // Queued while heading up, applied only if still legal
        snake.propose_turn(Direction::Left);
        snake.heading = Direction::Right;
        snake.advance();
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), None);
    }

    #[test]
    fn test_growth_is_delayed_one_tick() {
        let mut snake = snake_5x5();
        snake.grow();
        assert_eq!(snake.len(), 3);

        snake.advance();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body().back(), Some(&Cell::new(0, 2)));

        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_self_collision() {
        let grid = Grid::new(10, 10).unwrap();
        let mut snake = Snake::new(&grid, 5);
        snake.propose_turn(Direction::Up);
        snake.advance();
        snake.propose_turn(Direction::Left);
        snake.advance();
        assert!(!snake.collides_with_self());
        snake.propose_turn(Direction::Down);
        snake.advance();
        assert!(snake.collides_with_self());
        assert!(snake.body().iter().skip(1).any(|c| *c == snake.head()));
    }

    #[test]
    fn test_short_snake_never_self_collides() {
        let grid = Grid::new(9, 9).unwrap();
        let mut snake = Snake::new(&grid, 2);
        let turns =
            [Direction::Left, Direction::Up, Direction::Down, Direction::Right, Direction::Left];
        for turn in turns {
            snake.propose_turn(turn);
            snake.advance();
            assert!(!snake.collides_with_self());
        }
    }

    #[test]
    fn test_reset() {
        let grid = Grid::new(5, 5).unwrap();
        let mut snake = Snake::new(&grid, 3);
        snake.propose_turn(Direction::Down);
        snake.grow();
        snake.advance();
        snake.propose_turn(Direction::Left);
        snake.grow();

        snake.reset(&grid, 3);
        assert_eq!(cells(&snake), cells(&Snake::new(&grid, 3)));
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), None);
        snake.advance();
        assert_eq!(snake.len(), 3);
    }
}
