use macroquad::prelude::Rect;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_rect(self, cell_size: f32) -> Rect {
        Rect::new(
            self.x as f32 * cell_size,
            self.y as f32 * cell_size,
            cell_size,
            cell_size,
        )
    }

    /// One step in `dir` on a `width` x `height` torus.
    pub fn step_wrapped(self, dir: Direction, width: i32, height: i32) -> Cell {
        let (dx, dy) = dir.delta();
        Cell {
            x: (self.x + dx + width).rem_euclid(width),
            y: (self.y + dy + height).rem_euclid(height),
        }
    }
}
