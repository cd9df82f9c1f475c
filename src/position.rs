use crate::layout::{COLUMNS, MAX_HEIGHT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub fn new(col: u8, row: u8) -> Self {
        Position { col, row }
    }

    pub fn is_valid(&self) -> bool {
        (self.col as usize) < COLUMNS && (self.row as usize) < MAX_HEIGHT
    }

    /// Number of steps of `(dc, dr)` that stay on the grid.
    pub fn reach(&self, dc: i8, dr: i8) -> usize {
        let horizontal = match dc.signum() {
            1 => COLUMNS - 1 - self.col as usize,
            -1 => self.col as usize,
            _ => usize::MAX,
        };
        let vertical = match dr.signum() {
            1 => MAX_HEIGHT - 1 - self.row as usize,
            -1 => self.row as usize,
            _ => usize::MAX,
        };
        horizontal.min(vertical)
    }

    /// The position `steps` steps of `(dc, dr)` away. Callers stay within
    /// [`Position::reach`].
    pub fn step(&self, dc: i8, dr: i8, steps: usize) -> Position {
        debug_assert!(steps <= self.reach(dc, dr));
        let steps = steps as i16;
        Position {
            col: (self.col as i16 + dc as i16 * steps) as u8,
            row: (self.row as i16 + dr as i16 * steps) as u8,
        }
    }
}
