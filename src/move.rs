use crate::board::PackedBoard;
use crate::error::BoardError;
use crate::layout::{HEIGHT_BITS, LAYOUT, MAX_HEIGHT};
use crate::player::Player;
use crate::position::Position;

/// Where a dropped piece landed and who dropped it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub column: u8,
    pub row: u8,
    pub player: Player,
}

impl Placement {
    pub fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.player.to_char(), self.column, self.row)
    }
}

impl PackedBoard {
    /// Drop the current player's piece into `column`.
    ///
    /// Nothing is written unless the move is legal.
    #[hotpath::measure]
    pub fn apply_move(&mut self, column: usize) -> Result<Placement, BoardError> {
        Self::check_column(column)?;
        let height = self.column_height(column);
        if height as usize >= MAX_HEIGHT {
            return Err(BoardError::ColumnFull { column });
        }
        let player = self.turn();

        let changed = height ^ (height + 1);
        for (i, bit) in LAYOUT.heights(column).bits().enumerate() {
            if changed & (1 << (HEIGHT_BITS - 1 - i)) != 0 {
                self.toggle_bit(bit);
            }
        }

        if player.is_set_bit() {
            self.set_bit(LAYOUT.cells(column).location(height as usize));
        }

        self.toggle_bit(LAYOUT.turn().location(0));

        Ok(Placement {
            column: column as u8,
            row: height,
            player,
        })
    }

    /// Copy of the board with the move applied.
    pub fn with_move(&self, column: usize) -> Result<PackedBoard, BoardError> {
        let mut next = *self;
        next.apply_move(column)?;
        Ok(next)
    }
}
