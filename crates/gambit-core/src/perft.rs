//! Perft (move path enumeration) for move generation correctness checks.

use crate::chess_move::Move;
use crate::game::Game;

/// Count the leaf nodes of the legal move tree at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves for the side to move.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves(game.team_turn());

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&child(game, mv), depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown.
///
/// Returns `(move, node_count)` pairs sorted by move text.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let moves = game.legal_moves(game.team_turn());
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|&mv| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&child(game, mv), depth - 1)
            };
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

/// The position after `mv`, which must come from `game.legal_moves`.
///
/// Applied directly rather than through [`Game::make_move`] so that every
/// generated move is counted, even one `make_move` would refuse.
fn child(game: &Game, mv: Move) -> Game {
    Game::from_parts(game.board().with_move(mv), game.team_turn().flip())
}
