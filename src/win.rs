use crate::board::PackedBoard;
use crate::error::BoardError;
use crate::layout::COLUMNS;
use crate::player::Player;
use crate::position::Position;

/// Pieces in a row needed to win.
pub const LINE_LENGTH: usize = 4;

/// One direction per axis: horizontal, vertical, rising and falling diagonal.
/// Each axis is also walked in the opposite direction.
const AXES: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

impl PackedBoard {
    /// Whether the piece at `(column, row)` is part of four in a row.
    #[hotpath::measure]
    pub fn is_winning_cell(&self, column: usize, row: usize) -> Result<bool, BoardError> {
        Ok(self.winning_line(column, row)?.is_some())
    }

    /// Four cells of a line through `(column, row)` owned by the same player,
    /// if one exists.
    pub fn winning_line(
        &self,
        column: usize,
        row: usize,
    ) -> Result<Option<[Position; LINE_LENGTH]>, BoardError> {
        let owner = self.cell(column, row)?;
        let origin = Position::new(column as u8, row as u8);

        for (dc, dr) in AXES {
            let forward = self.run_length(origin, dc, dr, owner);
            let backward = self.run_length(origin, -dc, -dr, owner);
            if 1 + forward + backward >= LINE_LENGTH {
                let start = origin.step(-dc, -dr, backward);
                return Ok(Some(std::array::from_fn(|i| start.step(dc, dr, i))));
            }
        }
        Ok(None)
    }

    /// Consecutive pieces of `owner` after `origin` along `(dc, dr)`, at most
    /// `LINE_LENGTH - 1`. Stops at the edge, at an empty cell or at the
    /// opponent's piece.
    fn run_length(&self, origin: Position, dc: i8, dr: i8, owner: Player) -> usize {
        let reach = origin.reach(dc, dr).min(LINE_LENGTH - 1);
        (1..=reach)
            .map(|steps| origin.step(dc, dr, steps))
            .take_while(|pos| self.get_piece(pos.col as usize, pos.row as usize) == Some(owner))
            .count()
    }

    /// Player owning any four in a row on the board.
    pub fn winner(&self) -> Option<Player> {
        (0..COLUMNS).find_map(|column| {
            (0..self.column_height(column) as usize).find_map(|row| {
                match self.is_winning_cell(column, row) {
                    Ok(true) => self.get_piece(column, row),
                    _ => None,
                }
            })
        })
    }
}
