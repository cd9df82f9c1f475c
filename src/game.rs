use crate::board::PackedBoard;
use crate::error::GameError;
use crate::outcome::GameOutcome;
use crate::player::Player;
use crate::r#move::Placement;

/// A game in progress: the packed board plus the moves that built it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    board: PackedBoard,
    move_history: Vec<Placement>,
    outcome: Option<GameOutcome>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: PackedBoard::new(),
            move_history: Vec::new(),
            outcome: None,
        }
    }

    /// Replay a sequence of columns from the empty board.
    pub fn from_moves(columns: &[usize]) -> Result<Self, GameError> {
        let mut game = Game::new();
        for &column in columns {
            game.make_move(column)?;
        }
        Ok(game)
    }

    pub fn board(&self) -> &PackedBoard {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.board.turn()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Columns played so far, in order.
    pub fn move_history(&self) -> Vec<usize> {
        self.move_history
            .iter()
            .map(|placement| placement.column as usize)
            .collect()
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.move_history.last().copied()
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    pub fn is_legal_move(&self, column: usize) -> bool {
        !self.is_over() && !self.board.is_column_full(column)
    }

    /// Play `column` for the current player and settle the outcome.
    #[hotpath::measure]
    pub fn make_move(&mut self, column: usize) -> Result<Placement, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let placement = self.board.apply_move(column)?;
        self.move_history.push(placement);

        if self
            .board
            .is_winning_cell(placement.column as usize, placement.row as usize)?
        {
            self.outcome = Some(GameOutcome::win_for(placement.player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(placement)
    }

    /// Take back the last move. Returns `false` when there is none.
    ///
    /// Heights only ever grow in the packed form, so the board is rebuilt by
    /// replaying the remaining moves.
    pub fn unmake_move(&mut self) -> bool {
        if self.move_history.pop().is_none() {
            return false;
        }

        let mut board = PackedBoard::new();
        for placement in &self.move_history {
            if board.apply_move(placement.column as usize).is_err() {
                return false;
            }
        }
        self.board = board;
        self.outcome = None;
        true
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let moves: Vec<String> = self.move_history().iter().map(|c| c.to_string()).collect();
        write!(f, "Game[{}]", moves.join(" "))?;
        match self.outcome {
            Some(outcome) => write!(f, " {}", outcome),
            None => write!(f, " {} to move", self.turn().to_char()),
        }
    }
}
