//! Chess rules: board model, pseudo-legal move generation, legality
//! filtering, and check, checkmate, and stalemate detection.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{MoveError, NotationError};
pub use fen::STARTING_FEN;
pub use game::{Game, GameStatus};
pub use movegen::MoveList;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
