use crate::grid::{Cell, Direction};

/// What a single move did to the body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Growth {
    None,
    Grew,
    /// Food was owed but the body is already at capacity.
    Capped,
}

/// The snake body, head at index 0 and tail at the end.
///
/// Storage is allocated once at `capacity` and never reallocated.
#[derive(Clone, Debug)]
pub struct Snake {
    cells: Vec<Cell>,
    direction: Direction,
    pending_growth: u32,
    capacity: usize,
}

impl Snake {
    /// A straight snake of `length` segments whose head is `head`, trailing
    /// away opposite to `direction`.
    pub fn new(
        head: Cell,
        length: usize,
        direction: Direction,
        capacity: usize,
        width: i32,
        height: i32,
    ) -> Self {
        let capacity = capacity.max(length);
        let back = direction.opposite();
        let mut cells = Vec::with_capacity(capacity);
        let mut cell = head;
        for _ in 0..length {
            cells.push(cell);
            cell = cell.step_wrapped(back, width, height);
        }
        Self { cells, direction, pending_growth: 0, capacity }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    pub fn owe_segment(&mut self) {
        self.pending_growth += 1;
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Turns unless `dir` reverses the current heading. Returns whether the
    /// heading changed to `dir`.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.direction) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// True when the head shares a cell with any other segment.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.cells[1..].contains(&head)
    }

    /// Follow-the-leader move: every segment takes its predecessor's old
    /// position, the head steps forward with wraparound, and one owed segment
    /// is appended where the tail used to be.
    pub fn advance(&mut self, width: i32, height: i32) -> Growth {
        let len = self.cells.len();
        let vacated = self.cells[len - 1];
        let new_head = self.cells[0].step_wrapped(self.direction, width, height);

        // copy_within reads every source before writing, so no stale reads.
        self.cells.copy_within(0..len - 1, 1);
        self.cells[0] = new_head;

        if self.pending_growth == 0 {
            return Growth::None;
        }
        if self.cells.len() >= self.capacity {
            self.pending_growth = 0;
            return Growth::Capped;
        }
        self.cells.push(vacated);
        self.pending_growth -= 1;
        Growth::Grew
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<Cell>, direction: Direction, capacity: usize) -> Self {
        let capacity = capacity.max(cells.len());
        let mut body = Vec::with_capacity(capacity);
        body.extend(cells);
        Self { cells: body, direction, pending_growth: 0, capacity }
    }
}
