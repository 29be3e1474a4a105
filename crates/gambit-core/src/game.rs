//! Game orchestration: legality filtering, move execution, and end-state queries.

use tracing::{debug, trace};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen::MoveList;
use crate::square::Square;

/// Check state of one side, as computed by [`Game::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Normal,
    /// In check, with at least one legal move.
    Check,
    /// In check, with no legal move.
    Checkmate,
    /// Not in check, with no legal move.
    Stalemate,
}

/// A chess game: one board plus the side to move.
///
/// The game has no terminal state. Checkmate and stalemate are queries;
/// deciding that a match is over is the caller's business.
///
/// All methods are synchronous. A host that shares one `Game` between
/// threads must serialize `make_move` and `set_board` itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Start a game from the standard position with White to move.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            turn: Color::White,
        }
    }

    /// Build a game from an existing board and side to move, without validation.
    pub fn from_parts(board: Board, turn: Color) -> Game {
        Game { board, turn }
    }

    /// Return the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board unconditionally. Used to resume a stored match.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Return the side to move.
    #[inline]
    pub fn team_turn(&self) -> Color {
        self.turn
    }

    /// Set the side to move unconditionally. Used to resume a stored match.
    pub fn set_team_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Legal moves for the piece on `sq`: its pseudo-legal moves minus those
    /// that leave its own king in check.
    ///
    /// Ignores whose turn it is. An empty square has no moves.
    pub fn valid_moves(&self, sq: Square) -> MoveList {
        let Some(piece) = self.board.piece_at(sq) else {
            return MoveList::new();
        };
        let us = piece.color();

        let mut moves = piece.piece_moves(&self.board, sq);
        moves.retain(|&mv| !in_check_on(&self.board.with_move(mv), us));
        moves
    }

    /// Union of [`valid_moves`](Self::valid_moves) over every piece of `color`.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut all = MoveList::new();
        for (sq, _) in self.board.pieces_of(color) {
            all.extend_from(&self.valid_moves(sq));
        }
        all
    }

    /// Execute `mv` for the side to move and pass the turn.
    ///
    /// On error the game is unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = self
            .board
            .piece_at(mv.start())
            .ok_or(MoveError::NoPiece { square: mv.start() })?;

        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn {
                color: piece.color(),
            });
        }

        if !self.valid_moves(mv.start()).contains(&mv) {
            return Err(MoveError::IllegalMove { mv });
        }

        self.board.apply_move(mv);
        self.turn = self.turn.flip();
        debug!(mv = %mv, piece = %piece, next = %self.turn, "move executed");
        Ok(())
    }

    /// Return `true` if `color`'s king is attacked. A side with no king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        in_check_on(&self.board, color)
    }

    /// In check with no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Classify `color`'s situation in one pass.
    pub fn status(&self, color: Color) -> GameStatus {
        let status = match (self.is_in_check(color), self.has_legal_move(color)) {
            (false, true) => GameStatus::Normal,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        };
        trace!(color = %color, ?status, "status computed");
        status
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(sq, _)| !self.valid_moves(sq).is_empty())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Return `true` if `color` has a king on `board` and the opponent attacks it.
fn in_check_on(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king_sq| board.is_attacked_by(king_sq, color.flip()))
}

#[cfg(test)]
mod tests {
    use super::{Game, GameStatus};
    use crate::board::Board;
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::piece::Piece;
    use crate::square::Square;

    fn play(game: &mut Game, moves: &[(Square, Square)]) {
        for &(from, to) in moves {
            game.make_move(Move::new(from, to))
                .unwrap_or_else(|e| panic!("{from}{to} rejected: {e}"));
        }
    }

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(sq, piece) in pieces {
            board.set_piece(sq, Some(piece));
        }
        board
    }

    #[test]
    fn new_game_white_to_move() {
        let game = Game::new();
        assert_eq!(game.team_turn(), Color::White);
        assert_eq!(*game.board(), Board::starting_position());
        assert_eq!(game, Game::default());
    }

    #[test]
    fn starting_position_20_moves_each_side() {
        let game = Game::new();
        assert_eq!(game.legal_moves(Color::White).len(), 20);
        assert_eq!(game.legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn empty_square_has_no_valid_moves() {
        assert!(Game::new().valid_moves(Square::E4).is_empty());
    }

    #[test]
    fn make_move_flips_turn() {
        let mut game = Game::new();
        game.make_move(Move::new(Square::E2, Square::E4)).unwrap();
        assert_eq!(game.team_turn(), Color::Black);
        assert_eq!(game.board().piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(game.board().piece_at(Square::E2), None);
        game.make_move(Move::new(Square::E7, Square::E5)).unwrap();
        assert_eq!(game.team_turn(), Color::White);
    }

    #[test]
    fn rejected_moves_leave_game_unchanged() {
        let mut game = Game::new();
        let before = game.clone();

        assert_eq!(
            game.make_move(Move::new(Square::E4, Square::E5)),
            Err(MoveError::NoPiece { square: Square::E4 })
        );
        assert_eq!(
            game.make_move(Move::new(Square::E7, Square::E5)),
            Err(MoveError::WrongTurn { color: Color::Black })
        );
        let mv = Move::new(Square::E2, Square::E5);
        assert_eq!(game.make_move(mv), Err(MoveError::IllegalMove { mv }));

        assert_eq!(game, before);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::E2, Piece::WHITE_KNIGHT),
            (Square::E8, Piece::BLACK_ROOK),
            (Square::A8, Piece::BLACK_KING),
        ]);
        let game = Game::from_parts(board, Color::White);
        assert!(game.valid_moves(Square::E2).is_empty());
        assert!(!game.is_in_check(Color::White));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A2, Piece::BLACK_ROOK),
            (Square::H8, Piece::BLACK_KING),
        ]);
        let game = Game::from_parts(board, Color::White);
        let moves = game.valid_moves(Square::E1);
        assert_eq!(moves.len(), 2, "only d1 and f1 are safe: {moves:?}");
        assert!(moves.iter().all(|m| m.end().rank() == 1));
    }

    #[test]
    fn check_must_be_answered() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A1, Piece::WHITE_ROOK),
            (Square::H2, Piece::WHITE_PAWN),
            (Square::E8, Piece::BLACK_ROOK),
            (Square::A8, Piece::BLACK_KING),
        ]);
        let game = Game::from_parts(board, Color::White);
        assert!(game.is_in_check(Color::White));
        assert!(game.valid_moves(Square::H2).is_empty());
        assert!(game.valid_moves(Square::A1).is_empty());
        assert_eq!(game.status(Color::White), GameStatus::Check);
    }

    #[test]
    fn capture_resolves_check() {
        let board = board_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::B5, Piece::WHITE_BISHOP),
            (Square::E8, Piece::BLACK_ROOK),
            (Square::A8, Piece::BLACK_KING),
        ]);
        let game = Game::from_parts(board, Color::White);
        let bishop = game.valid_moves(Square::B5);
        // Capture the checker or interpose on e2; nothing else.
        assert_eq!(bishop.len(), 2, "{bishop:?}");
        assert!(bishop.contains(&Move::new(Square::B5, Square::E8)));
        assert!(bishop.contains(&Move::new(Square::B5, Square::E2)));
    }

    #[test]
    fn promotion_replaces_pawn() {
        let board = board_with(&[
            (Square::A7, Piece::WHITE_PAWN),
            (Square::E1, Piece::WHITE_KING),
            (Square::E8, Piece::BLACK_KING),
        ]);
        let mut game = Game::from_parts(board, Color::White);
        assert_eq!(game.valid_moves(Square::A7).len(), 4);

        let plain = Move::new(Square::A7, Square::A8);
        assert_eq!(
            game.make_move(plain),
            Err(MoveError::IllegalMove { mv: plain })
        );

        game.make_move(Move::new_promotion(Square::A7, Square::A8, PromotionPiece::Rook))
            .unwrap();
        assert_eq!(game.board().piece_at(Square::A8), Some(Piece::WHITE_ROOK));
        assert!(game.is_in_check(Color::Black));
    }

    #[test]
    fn promotion_on_ordinary_move_is_illegal() {
        let mut game = Game::new();
        let mv = Move::new_promotion(Square::E2, Square::E4, PromotionPiece::Queen);
        assert_eq!(game.make_move(mv), Err(MoveError::IllegalMove { mv }));
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                (Square::F2, Square::F3),
                (Square::E7, Square::E5),
                (Square::G2, Square::G4),
                (Square::D8, Square::H4),
            ],
        );
        assert!(game.is_in_check(Color::White));
        assert!(game.is_in_checkmate(Color::White));
        assert!(!game.is_in_stalemate(Color::White));
        assert!(game.legal_moves(Color::White).is_empty());
        assert_eq!(game.status(Color::White), GameStatus::Checkmate);
        assert_eq!(game.status(Color::Black), GameStatus::Normal);
    }

    #[test]
    fn fastest_mate_against_black() {
        let mut game = Game::new();
        game.set_team_turn(Color::Black);
        play(
            &mut game,
            &[
                (Square::F7, Square::F6),
                (Square::E2, Square::E4),
                (Square::G7, Square::G5),
                (Square::D1, Square::H5),
            ],
        );
        assert!(game.is_in_checkmate(Color::Black));
        assert!(!game.is_in_checkmate(Color::White));
    }

    #[test]
    fn lone_king_stalemate() {
        let board = board_with(&[
            (Square::A8, Piece::BLACK_KING),
            (Square::B6, Piece::WHITE_QUEEN),
            (Square::C6, Piece::WHITE_KING),
        ]);
        let game = Game::from_parts(board, Color::Black);
        assert!(!game.is_in_check(Color::Black));
        assert!(game.is_in_stalemate(Color::Black));
        assert!(!game.is_in_checkmate(Color::Black));
        assert_eq!(game.status(Color::Black), GameStatus::Stalemate);
    }

    #[test]
    fn pawns_check_only_diagonally() {
        let blocked = board_with(&[
            (Square::E4, Piece::WHITE_KING),
            (Square::E5, Piece::BLACK_PAWN),
            (Square::A8, Piece::BLACK_KING),
        ]);
        let game = Game::from_parts(blocked, Color::White);
        assert!(!game.is_in_check(Color::White));

        let diagonal = board_with(&[
            (Square::E4, Piece::WHITE_KING),
            (Square::D5, Piece::BLACK_PAWN),
            (Square::A8, Piece::BLACK_KING),
        ]);
        let game = Game::from_parts(diagonal, Color::White);
        assert!(game.is_in_check(Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = board_with(&[(Square::D4, Piece::BLACK_QUEEN)]);
        let game = Game::from_parts(board, Color::White);
        assert!(!game.is_in_check(Color::White));
        assert!(!game.is_in_checkmate(Color::White));
        assert!(game.is_in_stalemate(Color::White));
    }

    #[test]
    fn set_board_round_trip() {
        let mut game = Game::new();
        play(&mut game, &[(Square::D2, Square::D4), (Square::G8, Square::F6)]);
        let snapshot = *game.board();
        game.set_board(*game.board());
        assert_eq!(*game.board(), snapshot);

        let mut resumed = Game::new();
        resumed.set_board(snapshot);
        resumed.set_team_turn(game.team_turn());
        assert_eq!(resumed, game);
    }
}
