use chess::{Board, Piece, EMPTY};
use serde::{Deserialize, Serialize};

/// Halfmoves without a capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

/// Neither side can ever deliver mate: bare kings, a single minor piece,
/// or bishops that all stand on one square colour.
pub fn is_insufficient_material(board: &Board) -> bool {
    let heavy = *board.pieces(Piece::Pawn) | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    if heavy != EMPTY {
        return false;
    }

    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);
    if (knights | bishops).popcnt() <= 1 {
        return true;
    }
    if knights != EMPTY {
        return false;
    }

    let mut colours = bishops
        .into_iter()
        .map(|sq| (sq.get_rank().to_index() + sq.get_file().to_index()) % 2);
    colours
        .next()
        .is_some_and(|first| colours.all(|c| c == first))
}

/// How many times `current` occurs in `hashes`, counting the current position itself.
pub fn count_repetitions(current: u64, hashes: &[u64]) -> usize {
    1 + hashes.iter().filter(|&&h| h == current).count()
}

pub const fn is_fifty_move_draw(halfmove_clock: u32) -> bool {
    halfmove_clock >= FIFTY_MOVE_HALFMOVES
}

/// A move that resets the halfmove clock: a capture or any pawn move.
pub fn is_irreversible(board: &Board, mv: chess::ChessMove) -> bool {
    board.piece_on(mv.get_source()) == Some(Piece::Pawn) || board.piece_on(mv.get_dest()).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn board(fen: &str) -> Board {
        Board::from_str(fen).unwrap()
    }

    #[test]
    fn test_bare_kings_are_insufficient() {
        assert!(is_insufficient_material(&board("8/8/4k3/8/8/3K4/8/8 w - - 0 1")));
    }

    #[test]
    fn test_single_minor_is_insufficient() {
        assert!(is_insufficient_material(&board("8/8/4k3/8/8/3KN3/8/8 w - - 0 1")));
        assert!(is_insufficient_material(&board("8/8/4kb2/8/8/3K4/8/8 w - - 0 1")));
    }

    #[test]
    fn test_same_coloured_bishops_are_insufficient() {
        // c1 and f4 are both dark squares
        assert!(is_insufficient_material(&board("8/8/4k3/8/5b2/3K4/8/2B5 w - - 0 1")));
        // c1 dark, f5 light
        assert!(!is_insufficient_material(&board("8/8/4k3/5b2/8/3K4/8/2B5 w - - 0 1")));
    }

    #[test]
    fn test_pawn_or_rook_is_sufficient() {
        assert!(!is_insufficient_material(&board("8/8/4k3/8/8/3K4/4P3/8 w - - 0 1")));
        assert!(!is_insufficient_material(&board("8/8/4k3/8/8/3K4/8/R7 w - - 0 1")));
        assert!(!is_insufficient_material(&board("8/8/4k3/8/8/3KN3/8/6N1 w - - 0 1")));
    }

    #[test]
    fn test_count_repetitions() {
        assert_eq!(count_repetitions(7, &[]), 1);
        assert_eq!(count_repetitions(7, &[7, 3, 7]), 3);
    }

    #[test]
    fn test_fifty_move_threshold() {
        assert!(!is_fifty_move_draw(99));
        assert!(is_fifty_move_draw(100));
    }
}
