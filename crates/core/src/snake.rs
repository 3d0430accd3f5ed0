//! Snake engine - grid snake simulation
//!
//! The snake is an ordered list of cells, head first. Every [`SnakeGame::step`]
//! moves the head one cell along the current direction, grows the body when
//! food is eaten and otherwise drops the tail so the body keeps its target
//! length.
//!
//! The board grid mirrors the body (head cell marked on advance, vacated tail
//! cleared) so food is always drawn from cells the snake does not occupy.
//! Self-collision is decided from the body list, not the grid.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::grid::SnakeBoard;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::snake_speed_ms;
use crate::snapshot::SnakeSnapshot;
use crate::types::{
    Direction, Point, SnakeAction, EMPTY_CELL, SNAKE_BOARD_HEIGHT, SNAKE_BOARD_WIDTH,
    SNAKE_BODY_CELL, SNAKE_CELL_COUNT, SNAKE_FOOD_SCORE, SNAKE_INITIAL_LENGTH,
};

/// Complete snake game state
#[derive(Debug, Clone)]
pub struct SnakeGame<R = SimpleRng> {
    board: SnakeBoard,
    /// Head at the front
    body: VecDeque<Point>,
    food: Point,
    /// Direction applied on the last step
    direction: Direction,
    /// Requested direction, applied on the next step
    next_direction: Direction,
    score: u32,
    /// Target body length
    length: u32,
    paused: bool,
    game_over: bool,
    rng: R,
}

impl SnakeGame<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl Default for SnakeGame<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> SnakeGame<R> {
    /// Create a new game drawing food positions from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self {
            board: SnakeBoard::new(),
            body: VecDeque::with_capacity(SNAKE_CELL_COUNT),
            food: Point::default(),
            direction: Direction::Up,
            next_direction: Direction::Up,
            score: 0,
            length: SNAKE_INITIAL_LENGTH,
            paused: false,
            game_over: false,
            rng,
        };
        game.place_initial_body();
        game.spawn_food();
        game
    }

    /// Three cells centered on the board, head on top, heading up
    fn place_initial_body(&mut self) {
        let cx = (SNAKE_BOARD_WIDTH / 2) as i8;
        let cy = (SNAKE_BOARD_HEIGHT / 2) as i8;

        self.body.clear();
        for dy in 0..SNAKE_INITIAL_LENGTH as i8 {
            let cell = Point::new(cx, cy + dy);
            self.body.push_back(cell);
            self.board.set_point(cell, SNAKE_BODY_CELL);
        }
    }

    pub fn board(&self) -> &SnakeBoard {
        &self.board
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Tick period the driver should use at the current score
    pub fn speed_ms(&self) -> u32 {
        snake_speed_ms(self.score)
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            body: self.body.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            length: self.length,
            speed_ms: self.speed_ms(),
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    /// Move the food to a uniformly chosen empty cell
    ///
    /// Leaves the food where it is if the board has no empty cell.
    pub fn spawn_food(&mut self) {
        let empty: ArrayVec<Point, SNAKE_CELL_COUNT> = self.board.empty_cells().collect();
        if empty.is_empty() {
            trace!("snake: no empty cell left for food");
            return;
        }
        self.food = empty[self.rng.next_below(empty.len())];
        trace!("snake: food at ({}, {})", self.food.x, self.food.y);
    }

    /// Request a new heading for the next step
    ///
    /// A request that reverses into the neck (the opposite of the direction
    /// applied on the last step) is dropped. Requests made while paused are
    /// kept and take effect on the first step after unpausing. Returns whether
    /// the request was recorded.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.game_over || direction.is_opposite(self.direction) {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Wall or body hit for a head moving to `head`
    ///
    /// The tail is excluded: it vacates the cell on the same tick.
    fn collides(&self, head: Point) -> bool {
        if !self.board.in_bounds(head.x, head.y) {
            return true;
        }
        let keep = self.body.len().saturating_sub(1);
        self.body.iter().take(keep).any(|&cell| cell == head)
    }

    /// Advance the snake one cell
    ///
    /// Returns false when the move ran into a wall or the body (the game is
    /// then over), and also when paused or already over, in which case
    /// nothing changes.
    pub fn step(&mut self) -> bool {
        if self.game_over || self.paused {
            return false;
        }

        self.direction = self.next_direction;
        let head = self.head().step(self.direction);

        if self.collides(head) {
            self.game_over = true;
            debug!(
                "snake: game over at ({}, {}) score={} length={}",
                head.x, head.y, self.score, self.length
            );
            return false;
        }

        let ate_food = head == self.food;

        // Vacate the tail before marking the head: the head may enter the
        // cell the tail is leaving.
        if !ate_food && self.body.len() + 1 > self.length as usize {
            if let Some(tail) = self.body.pop_back() {
                self.board.set_point(tail, EMPTY_CELL);
            }
        }
        self.body.push_front(head);
        self.board.set_point(head, SNAKE_BODY_CELL);

        if ate_food {
            self.score += SNAKE_FOOD_SCORE;
            self.length += 1;
            self.spawn_food();
        }

        true
    }

    /// Toggle pause; no effect once the game is over
    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
    }

    /// Start over from the initial board; only food placement is random
    pub fn reset(&mut self) {
        debug!(
            "snake: reset (score={} length={} game_over={})",
            self.score, self.length, self.game_over
        );
        self.board.clear();
        self.place_initial_body();
        self.direction = Direction::Up;
        self.next_direction = Direction::Up;
        self.score = 0;
        self.length = SNAKE_INITIAL_LENGTH;
        self.paused = false;
        self.game_over = false;
        self.spawn_food();
    }

    /// Apply a driver command; returns whether it took effect
    pub fn apply_action(&mut self, action: SnakeAction) -> bool {
        match action {
            SnakeAction::Turn(direction) => self.request_direction(direction),
            SnakeAction::Pause => {
                let was = self.paused;
                self.toggle_pause();
                was != self.paused
            }
            SnakeAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    /// Game whose food always lands on the first empty cell (top-left corner)
    fn corner_food_game() -> SnakeGame<SequenceRng> {
        SnakeGame::with_rng(SequenceRng::new(vec![0]))
    }

    fn place_food(game: &mut SnakeGame<SequenceRng>, at: Point) {
        game.food = at;
    }

    #[test]
    fn test_new_game() {
        let game = SnakeGame::new(42);
        assert_eq!(
            game.body().iter().copied().collect::<Vec<_>>(),
            vec![Point::new(10, 7), Point::new(10, 8), Point::new(10, 9)]
        );
        assert_eq!(game.direction(), Direction::Up);
        assert_eq!(game.next_direction(), Direction::Up);
        assert_eq!(game.score(), 0);
        assert_eq!(game.length(), 3);
        assert!(!game.paused());
        assert!(!game.game_over());
        assert!(!game.body().contains(&game.food()));
        assert_eq!(game.board().occupied_count(), 3);
    }

    #[test]
    fn test_food_drawn_from_empty_cells() {
        let game = corner_food_game();
        assert_eq!(game.food(), Point::new(0, 0));
    }

    #[test]
    fn test_reverse_request_dropped() {
        let mut game = SnakeGame::new(1);
        assert!(!game.request_direction(Direction::Down));
        assert_eq!(game.next_direction(), Direction::Up);

        assert!(game.request_direction(Direction::Left));
        assert_eq!(game.next_direction(), Direction::Left);

        // Still checked against the applied direction, not the pending one.
        assert!(game.request_direction(Direction::Right));
        assert_eq!(game.next_direction(), Direction::Right);
    }

    #[test]
    fn test_step_moves_head_and_drops_tail() {
        let mut game = corner_food_game();
        assert!(game.step());
        assert_eq!(
            game.body().iter().copied().collect::<Vec<_>>(),
            vec![Point::new(10, 6), Point::new(10, 7), Point::new(10, 8)]
        );
        assert!(game.board().is_empty_at(10, 9));
        assert!(game.board().is_occupied(10, 6));
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut game = corner_food_game();
        place_food(&mut game, Point::new(10, 6));

        assert!(game.step());
        assert_eq!(game.score(), 10);
        assert_eq!(game.length(), 4);
        assert_eq!(game.body().len(), 4);
        assert_eq!(game.food(), Point::new(0, 0));

        assert!(game.step());
        assert_eq!(game.body().len(), 4);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut game = corner_food_game();
        place_food(&mut game, Point::new(0, 14));
        for _ in 0..7 {
            assert!(game.step());
        }
        assert_eq!(game.head(), Point::new(10, 0));
        assert!(!game.step());
        assert!(game.game_over());
        assert_eq!(game.head(), Point::new(10, 0));
    }

    #[test]
    fn test_moving_into_vacating_tail_is_allowed() {
        let mut game = corner_food_game();
        place_food(&mut game, Point::new(0, 14));
        // Grow to four cells and curl into a square: up, left, down, right.
        game.length = 4;
        assert!(game.step());
        game.request_direction(Direction::Left);
        assert!(game.step());
        game.request_direction(Direction::Down);
        assert!(game.step());
        game.request_direction(Direction::Right);
        assert!(game.step(), "head enters the cell the tail just left");
        assert!(!game.game_over());
        assert_eq!(game.board().occupied_count(), 4);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut game = corner_food_game();
        place_food(&mut game, Point::new(0, 14));
        game.length = 5;
        assert!(game.step());
        assert!(game.step());
        game.request_direction(Direction::Left);
        assert!(game.step());
        game.request_direction(Direction::Down);
        assert!(game.step());
        game.request_direction(Direction::Right);
        assert!(!game.step());
        assert!(game.game_over());
    }

    #[test]
    fn test_pause_blocks_step_but_buffers_direction() {
        let mut game = corner_food_game();
        game.toggle_pause();
        assert!(game.request_direction(Direction::Left));
        assert!(!game.step());
        assert_eq!(game.head(), Point::new(10, 7));

        game.toggle_pause();
        assert!(game.step());
        assert_eq!(game.head(), Point::new(9, 7));
        assert_eq!(game.direction(), Direction::Left);
    }

    #[test]
    fn test_commands_are_noops_after_game_over() {
        let mut game = corner_food_game();
        game.game_over = true;
        assert!(!game.request_direction(Direction::Left));
        assert!(!game.step());
        game.toggle_pause();
        assert!(!game.paused());
    }

    #[test]
    fn test_full_board_keeps_food() {
        let mut game = corner_food_game();
        for y in 0..SNAKE_BOARD_HEIGHT as i8 {
            for x in 0..SNAKE_BOARD_WIDTH as i8 {
                game.board.set(x, y, SNAKE_BODY_CELL);
            }
        }
        let before = game.food();
        game.spawn_food();
        assert_eq!(game.food(), before);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = corner_food_game();
        place_food(&mut game, Point::new(10, 6));
        game.step();
        game.request_direction(Direction::Left);
        game.toggle_pause();
        game.reset();

        assert_eq!(game.head(), Point::new(10, 7));
        assert_eq!(game.body().len(), 3);
        assert_eq!(game.score(), 0);
        assert_eq!(game.length(), 3);
        assert_eq!(game.direction(), Direction::Up);
        assert_eq!(game.next_direction(), Direction::Up);
        assert!(!game.paused());
        assert_eq!(game.board().occupied_count(), 3);
    }

    #[test]
    fn test_apply_action() {
        let mut game = SnakeGame::new(3);
        assert!(game.apply_action(SnakeAction::Turn(Direction::Right)));
        assert!(!game.apply_action(SnakeAction::Turn(Direction::Down)));
        assert!(game.apply_action(SnakeAction::Pause));
        assert!(game.paused());
        assert!(game.apply_action(SnakeAction::Restart));
        assert!(!game.paused());
    }
}
