use crate::logic::board::{Color, Piece, Square};
use std::fmt;

/// Read-only queries the evaluator makes against a host-owned position.
pub trait Position {
    fn occupant_at(&self, square: Square) -> Option<Piece>;

    fn side_to_move(&self) -> Color;

    fn is_checkmate(&self) -> bool;

    /// Stalemate, insufficient material, repetition or the fifty-move rule.
    fn is_drawn(&self) -> bool;

    /// Every piece on the board in square index order.
    fn pieces(&self) -> Vec<Piece> {
        Square::all()
            .filter_map(|square| self.occupant_at(square))
            .collect()
    }
}

/// A position that can also enumerate and play moves.
pub trait Playable: Position {
    type Move: Copy + fmt::Display;

    /// Legal moves in a stable host order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply_move(&mut self, mv: Self::Move);

    fn revert_last_move(&mut self);

    /// Plays `mv`, runs `f` on the resulting position and reverts before returning.
    fn with_move<R>(&mut self, mv: Self::Move, f: impl FnOnce(&Self) -> R) -> R
    where
        Self: Sized,
    {
        self.apply_move(mv);
        let result = f(self);
        self.revert_last_move();
        result
    }
}
