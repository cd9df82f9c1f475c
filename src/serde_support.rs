use crate::board::PackedBoard;
use crate::game::Game;
use crate::layout::BOARD_BYTES;
use crate::player::Player;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for PackedBoard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PackedBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = <[u8; BOARD_BYTES]>::deserialize(deserializer)?;
        PackedBoard::from_bytes(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let moves: Vec<String> = self
            .move_history()
            .iter()
            .map(|column| column.to_string())
            .collect();
        serializer.serialize_str(&moves.join(";"))
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut game = Game::new();

        if s.is_empty() {
            return Ok(game);
        }

        for move_str in s.split(';') {
            let column: usize = move_str
                .trim()
                .parse()
                .map_err(|e| serde::de::Error::custom(format!("Invalid column: {}", e)))?;
            game.make_move(column).map_err(|e| {
                serde::de::Error::custom(format!("Invalid move {}: {}", column, e))
            })?;
        }

        Ok(game)
    }
}

impl Serialize for Player {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match self {
            Player::A => "A",
            Player::B => "B",
        })
    }
}

impl<'de> Deserialize<'de> for Player {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut chars = s.chars();
        match (chars.next().and_then(Player::from_char), chars.next()) {
            (Some(player), None) => Ok(player),
            _ => Err(serde::de::Error::custom(format!("Invalid player: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_as_bytes() {
        let board = Game::from_moves(&[0, 0]).unwrap().board().to_owned();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[64,0,0,1,0,0,0,0]");
        let back: PackedBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_board_rejects_corrupt_bytes() {
        let result: Result<PackedBoard, _> = serde_json::from_str("[0,0,0,0,0,0,0,1]");
        assert!(result.is_err());
    }

    #[test]
    fn test_game_round_trip() {
        let game = Game::from_moves(&[3, 2, 3, 4]).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, "\"3;2;3;4\"");
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);

        let empty: Game = serde_json::from_str("\"\"").unwrap();
        assert_eq!(empty, Game::new());
    }

    #[test]
    fn test_game_rejects_illegal_moves() {
        assert!(serde_json::from_str::<Game>("\"0;0;0;0;0;0\"").is_err());
        assert!(serde_json::from_str::<Game>("\"9\"").is_err());
        assert!(serde_json::from_str::<Game>("\"x\"").is_err());
    }

    #[test]
    fn test_player() {
        assert_eq!(serde_json::to_string(&Player::B).unwrap(), "\"B\"");
        let player: Player = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(player, Player::A);
        assert!(serde_json::from_str::<Player>("\"AB\"").is_err());
    }
}
