/// One of the two players. `A` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    A = 0,
    B = 1,
}

impl Player {
    pub fn opposite(&self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Player selected by a cell or turn bit.
    #[inline]
    pub fn from_bit(bit: bool) -> Player {
        if bit {
            Player::B
        } else {
            Player::A
        }
    }

    /// Whether this player's cells and turn are stored as a set bit.
    #[inline]
    pub fn is_set_bit(&self) -> bool {
        matches!(self, Player::B)
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'A' | 'a' => Some(Player::A),
            'B' | 'b' => Some(Player::B),
            _ => None,
        }
    }

    pub fn from_int(i: u8) -> Option<Player> {
        match i {
            0 => Some(Player::A),
            1 => Some(Player::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.to_char())
    }
}
