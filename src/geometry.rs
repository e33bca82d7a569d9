use crate::Coords;
use Direction::*;

/// Cells per side of the square board.
pub const NUMBER_OF_CELLS: i32 = 25;

// A terminal character is roughly twice as tall as it is wide, so a cell
// takes two columns to look square.
pub const CELL_WIDTH: u16 = 2;
pub const CELL_HEIGHT: u16 = 1;

pub const OFFSET_X: u16 = 4;
pub const OFFSET_Y: u16 = 2;
pub const BORDER_THICKNESS: u16 = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// A cell on the board. Signed, because a head that just left the board is a
/// valid transient value until the game checks it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        GridPosition { x, y }
    }

    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        GridPosition::new(self.x + dx, self.y + dy)
    }

    pub fn in_grid(self) -> bool {
        (0..NUMBER_OF_CELLS).contains(&self.x) && (0..NUMBER_OF_CELLS).contains(&self.y)
    }
}

/// A rectangle on the canvas, in characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn top_left(&self) -> Coords {
        (self.x, self.y)
    }
}

/// Size of the whole canvas: the board plus an offset margin on every side.
pub fn screen_size() -> Coords {
    let n = NUMBER_OF_CELLS as u16;
    (OFFSET_X * 2 + CELL_WIDTH * n, OFFSET_Y * 2 + CELL_HEIGHT * n)
}

pub fn board_rect() -> Rect {
    let n = NUMBER_OF_CELLS as u16;
    Rect { x: OFFSET_X, y: OFFSET_Y, width: CELL_WIDTH * n, height: CELL_HEIGHT * n }
}

pub fn cell_rect(pos: GridPosition) -> Option<Rect> {
    if !pos.in_grid() {
        return None;
    }

    Some(Rect {
        x: OFFSET_X + pos.x as u16 * CELL_WIDTH,
        y: OFFSET_Y + pos.y as u16 * CELL_HEIGHT,
        width: CELL_WIDTH,
        height: CELL_HEIGHT,
    })
}
