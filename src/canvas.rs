use crate::geometry::Rect;
use crate::{Coords, TermInt};

use crossterm::style::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', color: Color::Reset };
}

/// An off-screen frame. Everything is drawn here first and the terminal only
/// receives the cells that changed since the previous frame.
#[derive(Clone, PartialEq)]
pub struct Canvas {
    width: TermInt,
    height: TermInt,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Canvas { width, height, cells: vec![Cell::BLANK; width as usize * height as usize] }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::BLANK);
    }

    #[cfg(test)]
    pub fn get(&self, pos: Coords) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Writes outside the canvas are dropped.
    pub fn put(&mut self, pos: Coords, ch: char, color: Color) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Cell { ch, color };
        }
    }

    pub fn print(&mut self, pos: Coords, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            let x = pos.0 as usize + i;
            if x >= self.width as usize {
                break;
            }
            self.put((x as TermInt, pos.1), ch, color);
        }
    }

    pub fn print_centered(&mut self, y: TermInt, text: &str, color: Color) {
        let len = text.chars().count() as TermInt;
        let x = self.width.saturating_sub(len) / 2;
        self.print((x, y), text, color);
    }

    pub fn fill(&mut self, rect: Rect, ch: char, color: Color) {
        for y in rect.y..rect.y.saturating_add(rect.height) {
            for x in rect.x..rect.x.saturating_add(rect.width) {
                self.put((x, y), ch, color);
            }
        }
    }

    /// Draws a one character border just outside `inner`.
    pub fn draw_border(&mut self, inner: Rect, color: Color) {
        if inner.x == 0 || inner.y == 0 {
            return;
        }

        let (left, top) = (inner.x - 1, inner.y - 1);
        let (right, bottom) = (inner.x + inner.width, inner.y + inner.height);

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            self.put((x, top), ch, color);
            self.put((x, bottom), ch, color);
        }

        for y in inner.y..bottom {
            self.put((left, y), '|', color);
            self.put((right, y), '|', color);
        }
    }

    #[cfg(test)]
    pub fn row_text(&self, y: TermInt) -> String {
        if y >= self.height {
            return String::new();
        }

        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize].iter().map(|cell| cell.ch).collect()
    }

    /// Cells of `self` that differ from `previous`. A canvas of another size
    /// counts as entirely different.
    pub fn diff(&self, previous: Option<&Canvas>) -> Vec<(Coords, Cell)> {
        let same_size = previous.filter(|p| p.width == self.width && p.height == self.height);

        self.cells
            .iter()
            .enumerate()
            .filter(|(i, cell)| same_size.map_or(true, |p| p.cells[*i] != **cell))
            .map(|(i, cell)| (self.coords(i), *cell))
            .collect()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> Option<usize> {
        if pos.0 < self.width && pos.1 < self.height {
            Some(self.width as usize * pos.1 as usize + pos.0 as usize)
        } else {
            None
        }
    }

    fn coords(&self, index: usize) -> Coords {
        let width = self.width as usize;
        ((index % width) as TermInt, (index / width) as TermInt)
    }
}
