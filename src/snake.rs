use crate::geometry::{Direction::{self, *}, GridPosition};

pub const INITIAL_HEAD: GridPosition = GridPosition::new(5, 5);
pub const INITIAL_LENGTH: usize = 3;
pub const INITIAL_DIRECTION: Direction = Right;

pub struct Snake {
    // Head first
    body: Vec<GridPosition>,
    direction: Direction,
    grow_next_move: bool,
}

impl Snake {
    /// Builds a straight snake whose tail trails behind `head`, opposite to
    /// the direction it is moving in.
    pub fn new(head: GridPosition, size: usize, direction: Direction) -> Self {
        Snake { body: straight_body(head, size, direction), direction, grow_next_move: false }
    }

    pub fn initial() -> Self {
        Snake::new(INITIAL_HEAD, INITIAL_LENGTH, INITIAL_DIRECTION)
    }

    pub fn body(&self) -> &[GridPosition] {
        &self.body
    }

    pub fn head(&self) -> GridPosition {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// No bounds checking here, the game decides what an out-of-grid head means.
    pub fn advance(&mut self) {
        let new_head = self.head().moved(self.direction);
        self.body.insert(0, new_head);

        if self.grow_next_move {
            self.grow_next_move = false;
        } else {
            self.body.pop();
        }
    }

    pub fn grow_on_next_advance(&mut self) {
        self.grow_next_move = true;
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        if !new_direction.is_opposite(self.direction) {
            self.direction = new_direction;
        }
    }

    pub fn reset_to_initial(&mut self) {
        self.body = straight_body(INITIAL_HEAD, INITIAL_LENGTH, INITIAL_DIRECTION);
        self.direction = INITIAL_DIRECTION;
        self.grow_next_move = false;
    }
}

fn straight_body(head: GridPosition, size: usize, direction: Direction) -> Vec<GridPosition> {
    let behind = direction.opposite();
    let mut body = Vec::with_capacity(size.max(1));
    body.push(head);

    for i in 1..size {
        body.push(body[i - 1].moved(behind));
    }

    body
}
