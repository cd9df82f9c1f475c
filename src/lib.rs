pub mod board;
pub mod error;
pub mod game;
pub mod layout;
pub mod r#move;
pub mod outcome;
pub mod player;
pub mod position;
pub mod win;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use board::PackedBoard;
pub use error::{BoardError, GameError};
pub use layout::{COLUMNS, MAX_HEIGHT};
pub use player::Player;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn packed_four(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGame>()?;
    m.add_class::<PyGameOutcome>()?;
    m.add("A", Player::A as u8)?;
    m.add("B", Player::B as u8)?;
    m.add("COLUMNS", COLUMNS)?;
    m.add("MAX_HEIGHT", MAX_HEIGHT)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::game::Game;
    use crate::layout::BOARD_BYTES;
    use crate::outcome::GameOutcome;

    fn value_error(err: impl std::fmt::Display) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: PackedBoard,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new() -> Self {
            PyBoard {
                board: PackedBoard::new(),
            }
        }

        #[staticmethod]
        pub fn from_bytes(raw: Vec<u8>) -> PyResult<Self> {
            let raw: [u8; BOARD_BYTES] = raw.try_into().map_err(|_| {
                value_error(format!("Board encoding must be {} bytes", BOARD_BYTES))
            })?;
            PackedBoard::from_bytes(raw)
                .map(|board| PyBoard { board })
                .map_err(value_error)
        }

        pub fn to_bytes(&self) -> Vec<u8> {
            self.board.to_bytes().to_vec()
        }

        pub fn column_height(&self, column: usize) -> PyResult<u8> {
            PackedBoard::check_column(column).map_err(value_error)?;
            Ok(self.board.column_height(column))
        }

        pub fn cell(&self, column: usize, row: usize) -> PyResult<u8> {
            self.board
                .cell(column, row)
                .map(|p| p as u8)
                .map_err(value_error)
        }

        pub fn cell_occupied(&self, column: usize, row: usize) -> PyResult<bool> {
            self.board.cell_occupied(column, row).map_err(value_error)
        }

        pub fn get_piece(&self, column: usize, row: usize) -> Option<u8> {
            self.board.get_piece(column, row).map(|p| p as u8)
        }

        pub fn turn(&self) -> u8 {
            self.board.turn() as u8
        }

        pub fn apply_move(&mut self, column: usize) -> PyResult<u8> {
            self.board
                .apply_move(column)
                .map(|placement| placement.row)
                .map_err(value_error)
        }

        pub fn with_move(&self, column: usize) -> PyResult<PyBoard> {
            self.board
                .with_move(column)
                .map(|board| PyBoard { board })
                .map_err(value_error)
        }

        pub fn is_winning_cell(&self, column: usize, row: usize) -> PyResult<bool> {
            self.board
                .is_winning_cell(column, row)
                .map_err(value_error)
        }

        pub fn winner(&self) -> Option<u8> {
            self.board.winner().map(|p| p as u8)
        }

        pub fn legal_moves(&self) -> Vec<usize> {
            self.board.legal_moves()
        }

        pub fn is_full(&self) -> bool {
            self.board.is_full()
        }

        pub fn __eq__(&self, other: &PyBoard) -> bool {
            self.board == other.board
        }

        pub fn __hash__(&self) -> u64 {
            u64::from_be_bytes(self.board.to_bytes())
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Board(bytes={:02x?}, turn={})",
                self.board.to_bytes(),
                self.board.turn().to_char()
            )
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new() -> Self {
            PyGame { game: Game::new() }
        }

        #[staticmethod]
        pub fn from_moves(columns: Vec<usize>) -> PyResult<Self> {
            Game::from_moves(&columns)
                .map(|game| PyGame { game })
                .map_err(value_error)
        }

        pub fn make_move(&mut self, column: usize) -> PyResult<(usize, usize)> {
            self.game
                .make_move(column)
                .map(|p| (p.column as usize, p.row as usize))
                .map_err(value_error)
        }

        pub fn unmake_move(&mut self) -> bool {
            self.game.unmake_move()
        }

        pub fn legal_moves(&self) -> Vec<usize> {
            self.game.legal_moves()
        }

        pub fn is_legal_move(&self, column: usize) -> bool {
            self.game.is_legal_move(column)
        }

        pub fn turn(&self) -> u8 {
            self.game.turn() as u8
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn outcome(&self) -> Option<PyGameOutcome> {
            self.game.outcome().map(|o| PyGameOutcome { outcome: o })
        }

        pub fn move_count(&self) -> usize {
            self.game.move_count()
        }

        pub fn move_history(&self) -> Vec<usize> {
            self.game.move_history()
        }

        pub fn board(&self) -> PyBoard {
            PyBoard {
                board: *self.game.board(),
            }
        }

        pub fn clone(&self) -> PyGame {
            PyGame {
                game: self.game.clone(),
            }
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(moves={}, turn={}, over={})",
                self.game.move_count(),
                self.game.turn().to_char(),
                self.game.is_over()
            )
        }
    }

    #[pyclass(name = "GameOutcome")]
    #[derive(Clone, Copy, Debug)]
    pub struct PyGameOutcome {
        outcome: GameOutcome,
    }

    #[pymethods]
    impl PyGameOutcome {
        pub fn winner(&self) -> Option<u8> {
            self.outcome.winner().map(|player| player as u8)
        }

        pub fn is_draw(&self) -> bool {
            self.outcome.is_draw()
        }

        pub fn __str__(&self) -> String {
            self.outcome.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("GameOutcome({})", self.outcome)
        }

        pub fn __eq__(&self, other: &PyGameOutcome) -> bool {
            self.outcome == other.outcome
        }
    }
}
