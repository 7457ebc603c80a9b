use rand::Rng;

use crate::grid::Cell;
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Food,
}

/// Fixed-size grid holding at most one food tile.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    food: Option<Cell>,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; (width * height) as usize],
            food: None,
        }
    }

    #[cfg(test)]
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    #[cfg(test)]
    pub fn tile(&self, cell: Cell) -> Tile {
        self.tiles[self.index(cell)]
    }

    pub fn has_food_at(&self, cell: Cell) -> bool {
        self.food == Some(cell)
    }

    /// Row-major iteration over every cell with its tile.
    pub fn tiles(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(i, t)| {
            let i = i as i32;
            (Cell::new(i % self.width, i / self.width), *t)
        })
    }

    pub fn clear_food(&mut self) {
        if let Some(old) = self.food.take() {
            let idx = self.index(old);
            self.tiles[idx] = Tile::Empty;
        }
    }

    pub fn set_food(&mut self, cell: Cell) {
        self.clear_food();
        let idx = self.index(cell);
        self.tiles[idx] = Tile::Food;
        self.food = Some(cell);
    }

    /// Replaces the food with a new one at a uniformly random cell.
    ///
    /// With `avoid_snake` the draw is restricted to cells the snake does not
    /// cover; a fully covered board falls back to any cell.
    pub fn place_food<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        snake: &Snake,
        avoid_snake: bool,
    ) -> Cell {
        self.clear_food();
        let cell = if avoid_snake {
            self.random_free_cell(rng, snake).unwrap_or_else(|| self.random_cell(rng))
        } else {
            self.random_cell(rng)
        };
        self.set_food(cell);
        cell
    }

    fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    fn random_free_cell<R: Rng + ?Sized>(&self, rng: &mut R, snake: &Snake) -> Option<Cell> {
        let free = self.tiles().filter(|(c, _)| !snake.occupies(*c)).count();
        if free == 0 {
            return None;
        }
        let pick = rng.gen_range(0..free);
        self.tiles().map(|(c, _)| c).filter(|c| !snake.occupies(*c)).nth(pick)
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.y * self.width + cell.x) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn food_tiles(board: &Board) -> usize {
        board.tiles().filter(|(_, t)| *t == Tile::Food).count()
    }

    #[test]
    fn new_board_is_empty() {
        let b = Board::new(32, 24);
        assert_eq!(b.tiles().count(), 768);
        assert_eq!(food_tiles(&b), 0);
        assert_eq!(b.food(), None);
    }

    #[test]
    fn tiles_are_row_major() {
        let b = Board::new(4, 3);
        let cells: Vec<Cell> = b.tiles().map(|(c, _)| c).take(6).collect();
        assert_eq!(cells[3], Cell::new(3, 0));
        assert_eq!(cells[4], Cell::new(0, 1));
    }

    #[test]
    fn placing_food_keeps_a_single_marker() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = Board::new(8, 6);
        let snake = Snake::new(Cell::new(4, 3), 3, Direction::Right, 10, 8, 6);
        for _ in 0..50 {
            let cell = b.place_food(&mut rng, &snake, false);
            assert_eq!(food_tiles(&b), 1);
            assert_eq!(b.tile(cell), Tile::Food);
            assert!(b.has_food_at(cell));
            assert!((0..8).contains(&cell.x) && (0..6).contains(&cell.y));
        }
    }

    #[test]
    fn avoiding_food_never_lands_on_snake() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut b = Board::new(4, 4);
        let snake = Snake::from_cells(
            (0..4).flat_map(|y| (0..4).map(move |x| Cell::new(x, y))).take(14).collect(),
            Direction::Right,
            16,
        );
        for _ in 0..40 {
            let cell = b.place_food(&mut rng, &snake, true);
            assert!(!snake.occupies(cell), "food spawned under snake at {cell:?}");
        }
    }

    #[test]
    fn every_free_cell_gets_picked() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut b = Board::new(4, 4);
        let snake = Snake::new(Cell::new(2, 1), 3, Direction::Right, 16, 4, 4);
        let mut hits: HashMap<Cell, u32> = HashMap::new();
        for _ in 0..1300 {
            *hits.entry(b.place_food(&mut rng, &snake, true)).or_default() += 1;
        }
        // 13 free cells, 100 draws each on average.
        assert_eq!(hits.len(), 13);
        for (cell, n) in &hits {
            assert!(!snake.occupies(*cell));
            assert!((50..=150).contains(n), "{cell:?} picked {n} times");
        }
    }

    #[test]
    fn full_board_falls_back_to_any_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut b = Board::new(4, 4);
        let snake = Snake::from_cells(
            (0..4).flat_map(|y| (0..4).map(move |x| Cell::new(x, y))).collect(),
            Direction::Right,
            16,
        );
        let cell = b.place_food(&mut rng, &snake, true);
        assert_eq!(b.food(), Some(cell));
        assert_eq!(food_tiles(&b), 1);
    }

    #[test]
    fn clear_food_empties_the_tile() {
        let mut b = Board::new(5, 5);
        b.set_food(Cell::new(2, 2));
        b.set_food(Cell::new(1, 4));
        assert_eq!(b.tile(Cell::new(2, 2)), Tile::Empty);
        b.clear_food();
        assert_eq!(food_tiles(&b), 0);
        assert_eq!(b.food(), None);
    }
}
