use packed_four::game::Game;
use packed_four::PackedBoard;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

const GAMES: usize = 200_000;

/// Play seeded random games to completion and report how they ended.
#[hotpath::main]
fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let (mut a_wins, mut b_wins, mut draws) = (0usize, 0usize, 0usize);

    for _ in 0..GAMES {
        let mut game = Game::new();
        while let Some(&column) = game.legal_moves().choose(&mut rng) {
            if let Err(err) = game.make_move(column) {
                eprintln!("illegal move {column}: {err}");
                return;
            }
        }

        match game.outcome().and_then(|o| o.winner()) {
            Some(packed_four::Player::A) => a_wins += 1,
            Some(packed_four::Player::B) => b_wins += 1,
            None => draws += 1,
        }
    }

    let mut scans = 0usize;
    let mut board = PackedBoard::new();
    while let Some(&column) = board.legal_moves().choose(&mut rng) {
        if board.apply_move(column).is_err() {
            break;
        }
        for column in 0..packed_four::COLUMNS {
            for row in 0..board.column_height(column) as usize {
                if board.is_winning_cell(column, row).unwrap_or(false) {
                    scans += 1;
                }
            }
        }
    }

    println!(
        "{} games: A {} / B {} / draw {} ({} winning cells on the filled board)",
        GAMES, a_wins, b_wins, draws, scans
    );
}
