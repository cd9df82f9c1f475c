//! Physical layout of the packed board.
//!
//! Every logical field is a run of bits inside the eight-byte buffer. Bits
//! are numbered most significant first, so bit position `p` lives in byte
//! `p / 8` under mask `0x80 >> (p % 8)`. Fields are packed back to back with
//! no padding:
//!
//! ```text
//! bits  0..30  cell bits, 5 per column (column * 5 + row, row 0 = bottom)
//! bits 30..48  height counters, 3 per column, most significant bit first
//! bit  48      turn (0 = A to move, 1 = B to move)
//! bits 49..64  unused, always zero
//! ```
//!
//! Byte boundaries fall inside several fields (column 1's cells span bytes
//! 0 and 1, column 0's height spans bytes 3 and 4, ...). Within one byte the
//! masks of a field strictly decrease, so the point where a mask is larger
//! than the one before it is where the field wraps into the next byte.

/// Number of columns on the board.
pub const COLUMNS: usize = 6;

/// Maximum number of pieces a column holds.
pub const MAX_HEIGHT: usize = 5;

/// Width of a column's height counter.
pub const HEIGHT_BITS: usize = 3;

/// Size of the packed buffer.
pub const BOARD_BYTES: usize = 8;

const CELL_BASE: usize = 0;
const HEIGHT_BASE: usize = CELL_BASE + COLUMNS * MAX_HEIGHT;
const TURN_BASE: usize = HEIGHT_BASE + COLUMNS * HEIGHT_BITS;

/// Number of bits the layout occupies; everything past this is zero.
pub const USED_BITS: usize = TURN_BASE + 1;

/// A single bit of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitLocation {
    pub byte: usize,
    pub mask: u8,
}

/// Byte index and mask of bit `position`, counting from the most
/// significant bit of byte 0.
#[inline]
pub const fn bit_location(position: usize) -> BitLocation {
    BitLocation {
        byte: position / 8,
        mask: 0x80 >> (position % 8),
    }
}

/// Layout of one field instance: the byte its first bit lives in, and the
/// mask of each of its `N` bits in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout<const N: usize> {
    start_byte: usize,
    masks: [u8; N],
}

impl<const N: usize> FieldLayout<N> {
    const fn starting_at(first_bit: usize) -> Self {
        assert!(N >= 1 && N <= 8, "a field instance must span at most two bytes");
        let mut masks = [0u8; N];
        let mut i = 0;
        while i < N {
            masks[i] = bit_location(first_bit + i).mask;
            i += 1;
        }
        FieldLayout {
            start_byte: first_bit / 8,
            masks,
        }
    }

    #[inline]
    pub const fn start_byte(&self) -> usize {
        self.start_byte
    }

    #[inline]
    pub const fn masks(&self) -> &[u8; N] {
        &self.masks
    }

    /// Location of bit `index` of the field.
    ///
    /// A field is at most eight bits wide, so every mask after the wrap point
    /// is larger than the first mask and every mask before it is not.
    #[inline]
    pub const fn location(&self, index: usize) -> BitLocation {
        let mask = self.masks[index];
        let byte = if mask > self.masks[0] {
            self.start_byte + 1
        } else {
            self.start_byte
        };
        BitLocation { byte, mask }
    }

    /// Walk the field's bits in order.
    #[inline]
    pub fn bits(&self) -> FieldBits<'_, N> {
        FieldBits {
            masks: &self.masks,
            byte: self.start_byte,
            index: 0,
        }
    }
}

/// Iterator over the bits of one field instance.
///
/// Advances to the next byte exactly once, when it meets a mask larger than
/// the previous one.
pub struct FieldBits<'a, const N: usize> {
    masks: &'a [u8; N],
    byte: usize,
    index: usize,
}

impl<const N: usize> Iterator for FieldBits<'_, N> {
    type Item = BitLocation;

    #[inline]
    fn next(&mut self) -> Option<BitLocation> {
        let mask = *self.masks.get(self.index)?;
        if self.index > 0 && mask > self.masks[self.index - 1] {
            self.byte += 1;
        }
        self.index += 1;
        Some(BitLocation {
            byte: self.byte,
            mask,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = N - self.index;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for FieldBits<'_, N> {}

/// Every field instance of the board.
#[derive(Debug)]
pub struct Layout {
    cells: [FieldLayout<MAX_HEIGHT>; COLUMNS],
    heights: [FieldLayout<HEIGHT_BITS>; COLUMNS],
    turn: FieldLayout<1>,
    used: [u8; BOARD_BYTES],
}

/// The board layout, built and checked during constant evaluation.
pub static LAYOUT: Layout = Layout::build();

impl Layout {
    const fn build() -> Self {
        assert!(USED_BITS <= BOARD_BYTES * 8, "layout does not fit the buffer");
        assert!(
            MAX_HEIGHT < (1 << HEIGHT_BITS),
            "height counter cannot hold MAX_HEIGHT"
        );

        let mut cells = [FieldLayout::starting_at(CELL_BASE); COLUMNS];
        let mut heights = [FieldLayout::starting_at(HEIGHT_BASE); COLUMNS];
        let mut column = 0;
        while column < COLUMNS {
            cells[column] = FieldLayout::starting_at(CELL_BASE + column * MAX_HEIGHT);
            heights[column] = FieldLayout::starting_at(HEIGHT_BASE + column * HEIGHT_BITS);
            column += 1;
        }
        let turn = FieldLayout::starting_at(TURN_BASE);

        let mut used = [0u8; BOARD_BYTES];
        let mut column = 0;
        while column < COLUMNS {
            used = claim(used, &cells[column]);
            used = claim(used, &heights[column]);
            column += 1;
        }
        used = claim(used, &turn);

        Layout {
            cells,
            heights,
            turn,
            used,
        }
    }

    /// Cell bits of `column`, bottom row first.
    #[inline]
    pub fn cells(&self, column: usize) -> &FieldLayout<MAX_HEIGHT> {
        &self.cells[column]
    }

    /// Height counter of `column`, most significant bit first.
    #[inline]
    pub fn heights(&self, column: usize) -> &FieldLayout<HEIGHT_BITS> {
        &self.heights[column]
    }

    #[inline]
    pub fn turn(&self) -> &FieldLayout<1> {
        &self.turn
    }

    /// Bits of `byte` that belong to some field.
    #[inline]
    pub fn used_mask(&self, byte: usize) -> u8 {
        self.used[byte]
    }
}

/// Mark the bits of `field` as taken, failing if any is already taken or
/// falls outside the buffer.
const fn claim<const N: usize>(
    mut used: [u8; BOARD_BYTES],
    field: &FieldLayout<N>,
) -> [u8; BOARD_BYTES] {
    let mut i = 0;
    while i < N {
        let bit = field.location(i);
        assert!(bit.byte < BOARD_BYTES, "field runs past the buffer");
        assert!(used[bit.byte] & bit.mask == 0, "field instances overlap");
        used[bit.byte] |= bit.mask;
        i += 1;
    }
    used
}
