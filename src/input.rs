use macroquad::prelude::*;

use crate::grid::Direction;

/// Directional key presses seen since the last game frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    /// Latches this render frame's key-pressed edges. Presses accumulate until
    /// `take` so a tap between two game frames is not lost.
    pub fn poll(&mut self) {
        self.up |= is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W);
        self.down |= is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S);
        self.left |= is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A);
        self.right |= is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D);
    }

    pub fn take(&mut self) -> DirectionKeys {
        std::mem::take(self)
    }

    /// The turn to apply this frame, if any. Keys are checked up, down, left,
    /// right; the first one pressed that does not reverse `current` wins.
    pub fn choose(&self, current: Direction) -> Option<Direction> {
        [
            (self.up, Direction::Up),
            (self.down, Direction::Down),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .find(|&(pressed, dir)| pressed && !dir.is_opposite(current))
        .map(|(_, dir)| dir)
    }
}
