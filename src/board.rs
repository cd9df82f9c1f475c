use crate::error::BoardError;
use crate::layout::{BitLocation, FieldLayout, BOARD_BYTES, COLUMNS, LAYOUT, MAX_HEIGHT};
use crate::player::Player;

/// Decoded grid, indexed `[column][row]` with row 0 at the bottom.
pub type Grid = [[Option<Player>; MAX_HEIGHT]; COLUMNS];

/// The whole game state in eight bytes.
///
/// A column's height counter says how many of its cells are filled; the
/// cell bit of each filled cell names its owner (clear for `A`, set for `B`).
/// Cell bits at or above the height are always clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedBoard {
    raw: [u8; BOARD_BYTES],
}

impl PackedBoard {
    /// Empty board, `A` to move.
    pub const fn new() -> Self {
        PackedBoard {
            raw: [0; BOARD_BYTES],
        }
    }

    /// Rebuild a board from its bytes, rejecting anything no sequence of
    /// moves could have produced.
    pub fn from_bytes(raw: [u8; BOARD_BYTES]) -> Result<Self, BoardError> {
        let board = PackedBoard { raw };

        if (0..BOARD_BYTES).any(|b| raw[b] & !LAYOUT.used_mask(b) != 0) {
            return Err(BoardError::InvalidEncoding("unused bits are set"));
        }

        let mut pieces = 0;
        let mut b_pieces = 0;
        for column in 0..COLUMNS {
            let height = board.column_height(column) as usize;
            if height > MAX_HEIGHT {
                return Err(BoardError::InvalidEncoding("column height exceeds maximum"));
            }
            for (row, bit) in LAYOUT.cells(column).bits().enumerate() {
                if board.test_bit(bit) {
                    if row >= height {
                        return Err(BoardError::InvalidEncoding("cell set above column height"));
                    }
                    b_pieces += 1;
                }
            }
            pieces += height;
        }

        if board.turn().is_set_bit() != (pieces % 2 == 1) {
            return Err(BoardError::InvalidEncoding("turn does not match piece count"));
        }
        if b_pieces != pieces / 2 {
            return Err(BoardError::InvalidEncoding("piece counts of the players are unbalanced"));
        }

        Ok(board)
    }

    pub const fn to_bytes(&self) -> [u8; BOARD_BYTES] {
        self.raw
    }

    pub fn as_bytes(&self) -> &[u8; BOARD_BYTES] {
        &self.raw
    }

    #[inline]
    pub(crate) fn test_bit(&self, bit: BitLocation) -> bool {
        self.raw[bit.byte] & bit.mask != 0
    }

    #[inline]
    pub(crate) fn set_bit(&mut self, bit: BitLocation) {
        self.raw[bit.byte] |= bit.mask;
    }

    #[inline]
    pub(crate) fn toggle_bit(&mut self, bit: BitLocation) {
        self.raw[bit.byte] ^= bit.mask;
    }

    /// Read a field as an unsigned integer, first bit most significant.
    #[inline]
    fn read_field<const N: usize>(&self, field: &FieldLayout<N>) -> u8 {
        field
            .bits()
            .fold(0, |value, bit| (value << 1) | self.test_bit(bit) as u8)
    }

    /// Number of pieces in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column >= COLUMNS`.
    #[inline]
    pub fn column_height(&self, column: usize) -> u8 {
        self.read_field(LAYOUT.heights(column))
    }

    /// Player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        Player::from_bit(self.test_bit(LAYOUT.turn().location(0)))
    }

    pub(crate) fn check_column(column: usize) -> Result<(), BoardError> {
        if column < COLUMNS {
            Ok(())
        } else {
            Err(BoardError::InvalidColumn { column })
        }
    }

    /// Owner of the piece at `(column, row)`.
    pub fn cell(&self, column: usize, row: usize) -> Result<Player, BoardError> {
        Self::check_column(column)?;
        let height = self.column_height(column);
        if row >= height as usize {
            return Err(BoardError::OutOfRange {
                column,
                row,
                height,
            });
        }
        Ok(Player::from_bit(
            self.test_bit(LAYOUT.cells(column).location(row)),
        ))
    }

    /// Whether `(column, row)` holds a piece. Rows at or above the column's
    /// height are an error rather than `false`.
    pub fn cell_occupied(&self, column: usize, row: usize) -> Result<bool, BoardError> {
        self.cell(column, row).map(|_| true)
    }

    /// Owner of the piece at `(column, row)`, or `None` for empty and
    /// off-board cells.
    pub fn get_piece(&self, column: usize, row: usize) -> Option<Player> {
        self.cell(column, row).ok()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        column >= COLUMNS || self.column_height(column) as usize >= MAX_HEIGHT
    }

    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|column| self.is_column_full(column))
    }

    pub fn piece_count(&self) -> usize {
        (0..COLUMNS)
            .map(|column| self.column_height(column) as usize)
            .sum()
    }

    /// Columns that still accept a piece.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLUMNS)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Decode every cell.
    pub fn cells(&self) -> Grid {
        let mut grid = [[None; MAX_HEIGHT]; COLUMNS];
        for (column, cells) in grid.iter_mut().enumerate() {
            for (row, cell) in cells.iter_mut().enumerate() {
                *cell = self.get_piece(column, row);
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size() {
        assert_eq!(std::mem::size_of::<PackedBoard>(), 8);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = PackedBoard::new();
        assert_eq!(board.to_bytes(), [0; BOARD_BYTES]);
        assert_eq!(board.turn(), Player::A);
        assert_eq!(board.piece_count(), 0);
        for column in 0..COLUMNS {
            assert_eq!(board.column_height(column), 0);
            assert_eq!(
                board.cell_occupied(column, 0),
                Err(BoardError::OutOfRange {
                    column,
                    row: 0,
                    height: 0
                })
            );
        }
        assert_eq!(board.cells(), [[None; MAX_HEIGHT]; COLUMNS]);
        assert_eq!(board, PackedBoard::default());
    }

    #[test]
    fn test_height_decodes_msb_first() {
        // Column 0's counter is bits 30..33: byte 3 masks 0x02, 0x01, byte 4 mask 0x80.
        let mut raw = [0u8; BOARD_BYTES];
        raw[3] = 0x02; // 0b100
        let board = PackedBoard { raw };
        assert_eq!(board.column_height(0), 4);

        raw[3] = 0x01;
        raw[4] = 0x80; // 0b011
        let board = PackedBoard { raw };
        assert_eq!(board.column_height(0), 3);
        assert_eq!(board.column_height(1), 0);
    }

    #[test]
    fn test_cell_reads_wrapped_byte_only() {
        // Column 1 row 3 lives in byte 1 mask 0x80. Byte 0 has the same mask
        // set (column 0 row 0) and must not leak into the read.
        let mut raw = [0u8; BOARD_BYTES];
        raw[0] = 0x80;
        // Column 1 height 4 = 0b100 at bits 33..36: byte 4 mask 0x40.
        raw[4] = 0x40;
        let board = PackedBoard { raw };
        assert_eq!(board.column_height(1), 4);
        assert_eq!(board.cell(1, 3), Ok(Player::A));

        raw[1] = 0x80;
        let board = PackedBoard { raw };
        assert_eq!(board.cell(1, 3), Ok(Player::B));
    }

    #[test]
    fn test_cell_errors() {
        let board = PackedBoard::new();
        assert_eq!(
            board.cell(COLUMNS, 0),
            Err(BoardError::InvalidColumn { column: COLUMNS })
        );
        assert_eq!(board.get_piece(COLUMNS, 0), None);
        assert_eq!(board.get_piece(0, MAX_HEIGHT), None);
    }

    #[test]
    fn test_from_bytes_accepts_empty() {
        assert_eq!(
            PackedBoard::from_bytes([0; BOARD_BYTES]),
            Ok(PackedBoard::new())
        );
    }

    #[test]
    fn test_from_bytes_rejects_unused_bits() {
        let mut raw = [0u8; BOARD_BYTES];
        raw[7] = 0x01;
        assert_eq!(
            PackedBoard::from_bytes(raw),
            Err(BoardError::InvalidEncoding("unused bits are set"))
        );
    }

    #[test]
    fn test_from_bytes_rejects_tall_column() {
        // Column 0 height 7 = 0b111.
        let mut raw = [0u8; BOARD_BYTES];
        raw[3] = 0x03;
        raw[4] = 0x80;
        assert_eq!(
            PackedBoard::from_bytes(raw),
            Err(BoardError::InvalidEncoding("column height exceeds maximum"))
        );
    }

    #[test]
    fn test_from_bytes_rejects_cell_above_height() {
        let mut raw = [0u8; BOARD_BYTES];
        raw[0] = 0x80;
        assert_eq!(
            PackedBoard::from_bytes(raw),
            Err(BoardError::InvalidEncoding("cell set above column height"))
        );
    }

    #[test]
    fn test_from_bytes_rejects_wrong_turn() {
        // One piece in column 0 but A still to move.
        let mut raw = [0u8; BOARD_BYTES];
        raw[4] = 0x80;
        assert_eq!(
            PackedBoard::from_bytes(raw),
            Err(BoardError::InvalidEncoding("turn does not match piece count"))
        );
    }

    #[test]
    fn test_from_bytes_rejects_unbalanced_owners() {
        // One piece owned by B, B to move.
        let mut raw = [0u8; BOARD_BYTES];
        raw[0] = 0x80;
        raw[4] = 0x80;
        raw[6] = 0x80;
        assert_eq!(
            PackedBoard::from_bytes(raw),
            Err(BoardError::InvalidEncoding(
                "piece counts of the players are unbalanced"
            ))
        );
    }
}
