use crate::canvas::Canvas;
use crate::game::{Game, GameState};
use crate::geometry::{self, Direction, GridPosition, BORDER_THICKNESS, OFFSET_X};

use crossterm::style::Color;
use rand::Rng;

pub const TITLE: &str = "Rust Snake Game";

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHARS: [char; 2] = ['(', ')'];

const CONTROLS: &str = "Arrows/WASD move  Esc pause  Q quit";

/// Paints the whole frame for the current state. Only reads the game.
pub fn draw<R: Rng>(game: &Game<R>, canvas: &mut Canvas) {
    canvas.clear();

    match game.state() {
        GameState::Title => draw_title(canvas),
        GameState::Running => draw_board(game, canvas),
        GameState::Stopped => {
            draw_board(game, canvas);
            draw_banner(canvas, &["PAUSED", "", "PRESS ENTER"], Color::Yellow);
        }
        GameState::GameOver => draw_game_over(game.final_score(), canvas),
    }
}

fn draw_title(canvas: &mut Canvas) {
    let mid = canvas.height() / 2;
    canvas.print_centered(mid.saturating_sub(3), TITLE, Color::Green);
    canvas.print_centered(mid + 1, "PRESS ENTER", Color::White);
    canvas.print_centered(mid + 4, CONTROLS, Color::DarkGrey);
}

fn draw_board<R: Rng>(game: &Game<R>, canvas: &mut Canvas) {
    canvas.draw_border(geometry::board_rect(), Color::White);

    let header_x = OFFSET_X - BORDER_THICKNESS;
    canvas.print((header_x, 0), TITLE, Color::White);

    let score = format!("Score: {}", game.score());
    let score_x = canvas.width().saturating_sub(header_x + score.chars().count() as u16);
    canvas.print((score_x, 0), &score, Color::White);

    draw_cell(canvas, game.food(), &FOOD_CHARS, Color::Red);

    let body = game.snake().body();
    for pos in body.iter().skip(1) {
        draw_cell(canvas, *pos, &[SNAKE_BODY_CHAR], Color::Green);
    }
    draw_cell(canvas, body[0], &[head_char(game.snake().direction())], Color::Green);
}

fn head_char(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

fn draw_game_over(final_score: u32, canvas: &mut Canvas) {
    let mid = canvas.height() / 2;
    canvas.print_centered(mid.saturating_sub(4), "GAME OVER", Color::Red);
    canvas.print_centered(mid, &format!("Final Score: {}", final_score), Color::White);
    canvas.print_centered(mid + 2, "PRESS ENTER", Color::White);
}

// `glyphs` are repeated across the cell's width
fn draw_cell(canvas: &mut Canvas, pos: GridPosition, glyphs: &[char], color: Color) {
    let rect = match geometry::cell_rect(pos) {
        Some(rect) => rect,
        None => return,
    };

    let (x, y) = rect.top_left();
    for dy in 0..rect.height {
        for dx in 0..rect.width {
            let ch = glyphs[dx as usize % glyphs.len()];
            canvas.put((x + dx, y + dy), ch, color);
        }
    }
}

fn draw_banner(canvas: &mut Canvas, lines: &[&str], color: Color) {
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u16 + 2;
    let height = lines.len() as u16 + 2;
    let rect = geometry::Rect {
        x: canvas.width().saturating_sub(width) / 2,
        y: canvas.height().saturating_sub(height) / 2,
        width,
        height,
    };

    // Clear the area behind the message so the board does not show through
    canvas.fill(rect, ' ', Color::Reset);
    for (i, line) in lines.iter().enumerate() {
        canvas.print_centered(rect.y + 1 + i as u16, line, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Input;
    use rand::{rngs::StdRng, SeedableRng};

    fn render(game: &Game<StdRng>) -> Canvas {
        let (width, height) = geometry::screen_size();
        let mut canvas = Canvas::new(width, height);
        draw(game, &mut canvas);
        canvas
    }

    fn screen_text(canvas: &Canvas) -> String {
        (0..canvas.height()).map(|y| canvas.row_text(y)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_title_screen() {
        let game = Game::with_rng(StdRng::seed_from_u64(1));
        let text = screen_text(&render(&game));
        assert!(text.contains(TITLE));
        assert!(text.contains("PRESS ENTER"));
        assert!(!text.contains(SNAKE_BODY_CHAR));
    }

    #[test]
    fn test_running_board() {
        let mut game = Game::with_rng(StdRng::seed_from_u64(2));
        game.handle_input(Input::Confirm);
        let canvas = render(&game);

        assert!(canvas.row_text(0).contains("Score: 0"));
        assert!(canvas.row_text(0).starts_with("   Rust Snake Game"));
        assert_eq!(canvas.get((3, 1)).map(|cell| cell.ch), Some('+'));

        // Snake starts at cells (5,5), (4,5), (3,5), head first
        let ch_at = |x: u16| canvas.get((x, 2 + 5)).map(|cell| cell.ch);
        assert_eq!(ch_at(3), Some('|'));
        for x in 10..14 {
            assert_eq!(ch_at(x), Some(SNAKE_BODY_CHAR));
        }
        assert_eq!(ch_at(14), Some('>'));
        assert_eq!(ch_at(15), Some('>'));

        let food = geometry::cell_rect(game.food()).unwrap();
        assert_eq!(canvas.get(food.top_left()).map(|cell| cell.ch), Some('('));
        assert_eq!(canvas.get(food.top_left()).map(|cell| cell.color), Some(Color::Red));
    }

    #[test]
    fn test_head_follows_direction() {
        let mut game = Game::with_rng(StdRng::seed_from_u64(6));
        game.handle_input(Input::Confirm);
        game.handle_input(Input::Move(Direction::Down));
        let head = geometry::cell_rect(game.snake().head()).unwrap();
        assert_eq!(render(&game).get(head.top_left()).map(|cell| cell.ch), Some('v'));
    }

    #[test]
    fn test_paused_banner() {
        let mut game = Game::with_rng(StdRng::seed_from_u64(3));
        game.handle_input(Input::Confirm);
        game.handle_input(Input::Cancel);
        let text = screen_text(&render(&game));
        assert!(text.contains("PAUSED"));
        assert!(text.contains("PRESS ENTER"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut game = Game::with_rng(StdRng::seed_from_u64(4));
        game.handle_input(Input::Confirm);
        while game.state() == GameState::Running {
            game.tick();
        }

        let text = screen_text(&render(&game));
        assert!(text.contains("GAME OVER"));
        assert!(text.contains(&format!("Final Score: {}", game.final_score())));
    }
}
