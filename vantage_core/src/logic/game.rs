use crate::error::EngineError;
use crate::logic::board::{Color, Piece, Square};
use crate::logic::position::{Playable, Position};
use crate::logic::rules::{
    count_repetitions, is_fifty_move_draw, is_insufficient_material, is_irreversible, DrawReason,
};
use chess::{Board, BoardBuilder, BoardStatus, ChessMove, MoveGen, ALL_COLORS, ALL_SQUARES};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

#[derive(Debug, Clone, Copy)]
pub struct MoveRecord {
    pub mv: ChessMove,
    pub board_before: Board,
    pub halfmove_clock_before: u32,
}

/// Host position: a `chess::Board` plus the history needed for revert and draw rules.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    halfmove_clock: u32,
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            halfmove_clock: 0,
            history: Vec::new(),
        }
    }

    /// Parses a FEN record. Boards without exactly one king per side are
    /// rejected before the host board is built.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let invalid = |reason: String| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let builder = BoardBuilder::from_str(fen).map_err(|e| invalid(format!("{e:?}")))?;
        for color in ALL_COLORS {
            let kings = ALL_SQUARES
                .iter()
                .filter(|&&sq| builder[sq] == Some((chess::Piece::King, color)))
                .count();
            if kings != 1 {
                return Err(invalid(format!("expected one {color:?} king, found {kings}")));
            }
        }
        let board = Board::try_from(builder).map_err(|e| invalid(format!("{e:?}")))?;

        let halfmove_clock = fen
            .split_whitespace()
            .nth(4)
            .and_then(|field| field.parse().ok())
            .unwrap_or(0);
        Ok(Self {
            board,
            halfmove_clock,
            history: Vec::new(),
        })
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        match self.board.status() {
            BoardStatus::Checkmate => GameStatus::Checkmate {
                winner: self.side_to_move().opposite(),
            },
            BoardStatus::Stalemate => GameStatus::Draw(DrawReason::Stalemate),
            BoardStatus::Ongoing => {
                if is_insufficient_material(&self.board) {
                    GameStatus::Draw(DrawReason::InsufficientMaterial)
                } else if self.repetitions() >= 3 {
                    GameStatus::Draw(DrawReason::ThreefoldRepetition)
                } else if is_fifty_move_draw(self.halfmove_clock) {
                    GameStatus::Draw(DrawReason::FiftyMoveRule)
                } else {
                    GameStatus::Playing
                }
            }
        }
    }

    /// Occurrences of the current position since the last capture or pawn move.
    pub fn repetitions(&self) -> usize {
        let reversible: Vec<u64> = self
            .history
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .map(|record| record.board_before.get_hash())
            .collect();
        count_repetitions(self.board.get_hash(), &reversible)
    }

    /// Plays a move given in UCI notation (`e2e4`, `e7e8q`).
    pub fn make_uci_move(&mut self, uci: &str) -> Result<ChessMove, EngineError> {
        let mv = self
            .legal_moves()
            .into_iter()
            .find(|mv| mv.to_string() == uci)
            .ok_or_else(|| EngineError::IllegalMove(uci.to_string()))?;
        self.apply_move(mv);
        Ok(mv)
    }

    pub fn undo_move(&mut self) -> bool {
        if let Some(record) = self.history.pop() {
            self.board = record.board_before;
            self.halfmove_clock = record.halfmove_clock_before;
            true
        } else {
            false
        }
    }
}

impl Position for GameState {
    fn occupant_at(&self, square: Square) -> Option<Piece> {
        let sq = square.to_chess();
        let piece_type = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(Piece::new(piece_type.into(), color.into(), square))
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    fn is_drawn(&self) -> bool {
        matches!(self.status(), GameStatus::Draw(_))
    }
}

impl Playable for GameState {
    type Move = ChessMove;

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply_move(&mut self, mv: ChessMove) {
        let board_before = self.board;
        let halfmove_clock_before = self.halfmove_clock;
        self.halfmove_clock = if is_irreversible(&board_before, mv) {
            0
        } else {
            halfmove_clock_before + 1
        };
        self.board = board_before.make_move_new(mv);
        self.history.push(MoveRecord {
            mv,
            board_before,
            halfmove_clock_before,
        });
    }

    fn revert_last_move(&mut self) {
        if !self.undo_move() {
            log::warn!("revert_last_move called with empty history");
        }
    }
}
