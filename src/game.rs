use crate::food::Food;
use crate::geometry::{Direction, GridPosition};
use crate::snake::Snake;

use log::info;
use rand::{rngs::ThreadRng, Rng};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Title,
    Running,
    Stopped,
    GameOver,
}

/// A discrete player input, already decoded from whatever key produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    Confirm,
    Cancel,
    Move(Direction),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameOverCause {
    Wall,
    Tail,
}

impl GameState {
    /// The state `input` leads to, or `None` if the input does not change it.
    pub fn on_input(self, input: Input) -> Option<GameState> {
        use GameState::*;

        match (self, input) {
            (Title, Input::Confirm) => Some(Running),
            (Running, Input::Confirm) | (Running, Input::Cancel) => Some(Stopped),
            (Stopped, Input::Confirm) => Some(Running),
            (GameOver, Input::Confirm) => Some(Title),
            _ => None,
        }
    }
}

pub struct Game<R: Rng = ThreadRng> {
    snake: Snake,
    food: Food,
    state: GameState,
    score: u32,
    final_score: u32,
    rng: R,
}

impl Game<ThreadRng> {
    pub fn new() -> Self {
        Game::with_rng(rand::thread_rng())
    }
}

impl Default for Game<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let snake = Snake::initial();
        let food = Food::new(snake.body(), &mut rng);
        Game { snake, food, state: GameState::Title, score: 0, final_score: 0, rng }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> GridPosition {
        self.food.position
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    pub fn handle_input(&mut self, input: Input) {
        // Turning is allowed in every state, it only shows once the snake moves
        if let Input::Move(direction) = input {
            self.snake.set_direction(direction);
            return;
        }

        if let Some(next) = self.state.on_input(input) {
            info!("{:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// One fixed-interval logic update. Does nothing unless the game is running.
    pub fn tick(&mut self) {
        if self.state == GameState::Running {
            self.advance_turn();
        }
    }

    pub fn advance_turn(&mut self) {
        self.snake.advance();
        let head = self.snake.head();

        // Order matters: food, then walls, then tail
        if head == self.food.position {
            self.food.relocate(self.snake.body(), &mut self.rng);
            self.snake.grow_on_next_advance();
            self.score += 1;
        }

        if !head.in_grid() {
            self.game_over(GameOverCause::Wall);
        } else if self.snake.body()[1..].contains(&head) {
            self.game_over(GameOverCause::Tail);
        }
    }

    fn game_over(&mut self, cause: GameOverCause) {
        info!(
            "Game over ({:?}), final score {}, length {}",
            cause, self.score, self.snake.len()
        );

        self.final_score = self.score;
        self.snake.reset_to_initial();
        self.food.relocate(self.snake.body(), &mut self.rng);
        self.state = GameState::GameOver;
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction::*;
    use crate::snake::INITIAL_LENGTH;
    use rand::{rngs::StdRng, SeedableRng};

    fn pos(x: i32, y: i32) -> GridPosition {
        GridPosition::new(x, y)
    }

    fn running_game() -> Game<StdRng> {
        let mut game = Game::with_rng(StdRng::seed_from_u64(1234));
        game.state = GameState::Running;
        // Far away from anything the tests drive the snake through
        game.food.position = pos(0, 24);
        game
    }

    fn assert_reset_after_game_over(game: &Game<StdRng>) {
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().body(), Snake::initial().body());
        assert_eq!(game.snake().direction(), Right);
        assert!(!game.snake().body().contains(&game.food()));
    }

    #[test]
    fn test_new_game() {
        let game = Game::with_rng(StdRng::seed_from_u64(0));
        assert_eq!(game.state(), GameState::Title);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), INITIAL_LENGTH);
        assert!(!game.snake().body().contains(&game.food()));
    }

    #[test]
    fn test_transition_table() {
        use GameState::*;

        assert_eq!(Title.on_input(Input::Confirm), Some(Running));
        assert_eq!(Title.on_input(Input::Cancel), None);
        assert_eq!(Running.on_input(Input::Confirm), Some(Stopped));
        assert_eq!(Running.on_input(Input::Cancel), Some(Stopped));
        assert_eq!(Stopped.on_input(Input::Confirm), Some(Running));
        assert_eq!(Stopped.on_input(Input::Cancel), None);
        assert_eq!(GameOver.on_input(Input::Confirm), Some(Title));
        assert_eq!(GameOver.on_input(Input::Cancel), None);

        for state in [Title, Running, Stopped, GameOver] {
            assert_eq!(state.on_input(Input::Move(Up)), None);
        }
    }

    #[test]
    fn test_confirm_on_title_only_starts_the_run() {
        let mut game = Game::with_rng(StdRng::seed_from_u64(5));
        let food = game.food();
        let body = game.snake().body().to_vec();

        game.handle_input(Input::Confirm);

        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.food(), food);
        assert_eq!(game.snake().body(), &body[..]);
    }

    #[test]
    fn test_ticks_only_move_the_snake_while_running() {
        let mut game = Game::with_rng(StdRng::seed_from_u64(9));
        game.food.position = pos(0, 24);

        game.tick();
        assert_eq!(game.snake().head(), pos(5, 5));

        game.handle_input(Input::Confirm);
        game.tick();
        assert_eq!(game.snake().head(), pos(6, 5));

        game.handle_input(Input::Cancel);
        assert_eq!(game.state(), GameState::Stopped);
        game.tick();
        assert_eq!(game.snake().head(), pos(6, 5));

        game.handle_input(Input::Confirm);
        game.tick();
        assert_eq!(game.snake().head(), pos(7, 5));
    }

    #[test]
    fn test_move_input_is_accepted_in_every_state() {
        let mut game = Game::with_rng(StdRng::seed_from_u64(11));
        game.handle_input(Input::Move(Down));
        assert_eq!(game.state(), GameState::Title);
        assert_eq!(game.snake().direction(), Down);

        game.handle_input(Input::Move(Up));
        assert_eq!(game.snake().direction(), Down);
    }

    #[test]
    fn test_eating_food() {
        let mut game = running_game();
        game.food.position = pos(6, 5);

        game.tick();

        assert_eq!(game.snake().head(), pos(6, 5));
        assert_eq!(game.score(), 1);
        assert!(!game.snake().body().contains(&game.food()));

        // Growth is deferred: the tick that eats only sets the grow flag, the
        // body reaches length 4 on the next advance
        assert_eq!(game.snake().len(), 3);
        game.food.position = pos(0, 24);
        game.tick();
        assert_eq!(game.snake().body(), &[pos(7, 5), pos(6, 5), pos(5, 5), pos(4, 5)]);
    }

    #[test]
    fn test_length_only_changes_after_eating() {
        let mut game = running_game();
        let mut expected_len = game.snake().len();
        let mut grows_next = false;

        // Walk right along row 5, then down column 19, with food on every fourth step
        let mut moves = vec![Right; 14];
        moves.extend(vec![Down; 10]);

        for (i, dir) in moves.into_iter().enumerate() {
            game.food.position = if i % 4 == 0 {
                game.snake().head().moved(dir)
            } else {
                pos(0, 24)
            };

            game.handle_input(Input::Move(dir));
            let food_before = game.food();
            game.tick();
            assert_eq!(game.state(), GameState::Running);

            if grows_next {
                expected_len += 1;
            }
            assert_eq!(game.snake().len(), expected_len);
            grows_next = game.snake().head() == food_before;
            if grows_next {
                assert!(!game.snake().body().contains(&game.food()));
            }
        }

        assert_eq!(game.score(), 6);
    }

    #[test]
    fn test_wall_collision() {
        let mut game = running_game();
        game.score = 4;
        game.snake = Snake::new(pos(24, 5), 3, Right);

        game.tick();

        assert_eq!(game.final_score(), 4);
        assert_reset_after_game_over(&game);
    }

    #[test]
    fn test_wall_collision_at_origin_sides() {
        let mut game = running_game();
        game.snake = Snake::new(pos(0, 10), 3, Left);
        game.tick();
        assert_reset_after_game_over(&game);

        let mut game = running_game();
        game.snake = Snake::new(pos(10, 0), 3, Up);
        game.tick();
        assert_reset_after_game_over(&game);
    }

    #[test]
    fn test_bottom_wall_collision() {
        let mut game = running_game();
        game.score = 3;
        game.snake = Snake::new(pos(10, 24), 3, Down);

        game.tick();

        assert_eq!(game.final_score(), 3);
        assert_reset_after_game_over(&game);
    }

    #[test]
    fn test_tail_collision() {
        let mut game = running_game();
        game.score = 2;
        game.snake = Snake::new(pos(10, 10), 5, Right);

        for dir in [Down, Left, Up] {
            game.handle_input(Input::Move(dir));
            game.tick();
        }

        assert_eq!(game.final_score(), 2);
        assert_reset_after_game_over(&game);
    }

    #[test]
    fn test_game_over_returns_to_title() {
        let mut game = running_game();
        game.snake = Snake::new(pos(24, 5), 3, Right);
        game.tick();

        // Ticks are ignored until a new run starts
        game.tick();
        assert_eq!(game.snake().body(), Snake::initial().body());

        game.handle_input(Input::Cancel);
        assert_eq!(game.state(), GameState::GameOver);
        game.handle_input(Input::Confirm);
        assert_eq!(game.state(), GameState::Title);
        game.handle_input(Input::Confirm);
        assert_eq!(game.state(), GameState::Running);
    }
}
