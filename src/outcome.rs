use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    AWins,
    BWins,
    Draw,
}

impl GameOutcome {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::A => GameOutcome::AWins,
            Player::B => GameOutcome::BWins,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::AWins => Some(Player::A),
            GameOutcome::BWins => Some(Player::B),
            GameOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::AWins => write!(f, "A wins"),
            GameOutcome::BWins => write!(f, "B wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
