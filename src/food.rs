use crate::geometry::{GridPosition, NUMBER_OF_CELLS};

use log::debug;
use rand::Rng;

pub struct Food {
    pub position: GridPosition,
}

impl Food {
    pub fn new<R: Rng>(occupied: &[GridPosition], rng: &mut R) -> Self {
        Food { position: random_free_cell(occupied, rng) }
    }

    /// Moves the food to a random cell outside `occupied` and returns it.
    pub fn relocate<R: Rng>(&mut self, occupied: &[GridPosition], rng: &mut R) -> GridPosition {
        self.position = random_free_cell(occupied, rng);
        debug!("Food relocated to ({}, {})", self.position.x, self.position.y);
        self.position
    }
}

fn random_cell<R: Rng>(rng: &mut R) -> GridPosition {
    GridPosition::new(rng.gen_range(0..NUMBER_OF_CELLS), rng.gen_range(0..NUMBER_OF_CELLS))
}

// Rejection sampling. Never returns if every cell is occupied.
fn random_free_cell<R: Rng>(occupied: &[GridPosition], rng: &mut R) -> GridPosition {
    loop {
        let pos = random_cell(rng);
        if !occupied.contains(&pos) {
            return pos;
        }
    }
}
