use crate::logic::board::{Color, PieceType, Square};
use std::sync::OnceLock;

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const STRAIGHT_LINES: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
#[rustfmt::skip]
pub const AROUND: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];
#[rustfmt::skip]
pub const L_SHAPES: [(i8, i8); 8] = [
    (-1, -2), (-1, 2),
    (1, -2),  (1, 2),
    (-2, -1), (-2, 1),
    (2, -1),  (2, 1),
];
pub const PAWN_CAPTURES_WHITE: [(i8, i8); 2] = [(-1, 1), (1, 1)];
pub const PAWN_CAPTURES_BLACK: [(i8, i8); 2] = [(-1, -1), (1, -1)];

/// Longest possible ray on an 8x8 board.
pub const MAX_RAY_LEN: i8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Diagonal,
    Straight,
    /// Single step that cannot be blocked (knight, king, pawn capture).
    Jump,
}

impl AxisKind {
    /// Whether a piece of type `pt` also moves along axes of this kind.
    pub const fn carries(self, pt: PieceType) -> bool {
        match self {
            Self::Diagonal => matches!(pt, PieceType::Bishop | PieceType::Queen),
            Self::Straight => matches!(pt, PieceType::Rook | PieceType::Queen),
            Self::Jump => false,
        }
    }
}

/// Squares along one direction from an origin, nearest first, cut at the board edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementAxis {
    pub kind: AxisKind,
    pub squares: Vec<Square>,
}

impl MovementAxis {
    fn ray(origin: Square, (d_file, d_rank): (i8, i8), kind: AxisKind) -> Self {
        let squares = (1..=MAX_RAY_LEN)
            .map_while(|step| origin.offset(d_file * step, d_rank * step))
            .collect();
        Self { kind, squares }
    }

    fn jump(origin: Square, (d_file, d_rank): (i8, i8)) -> Option<Self> {
        origin.offset(d_file, d_rank).map(|sq| Self {
            kind: AxisKind::Jump,
            squares: vec![sq],
        })
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Movement {
    WhitePawn = 0,
    BlackPawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl Movement {
    const ALL: [Self; 7] = [
        Self::WhitePawn,
        Self::BlackPawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    const fn of(piece_type: PieceType, color: Color) -> Self {
        match (piece_type, color) {
            (PieceType::Pawn, Color::White) => Self::WhitePawn,
            (PieceType::Pawn, Color::Black) => Self::BlackPawn,
            (PieceType::Knight, _) => Self::Knight,
            (PieceType::Bishop, _) => Self::Bishop,
            (PieceType::Rook, _) => Self::Rook,
            (PieceType::Queen, _) => Self::Queen,
            (PieceType::King, _) => Self::King,
        }
    }

    fn axes_from(self, origin: Square) -> Vec<MovementAxis> {
        match self {
            Self::WhitePawn => jumps(origin, &PAWN_CAPTURES_WHITE),
            Self::BlackPawn => jumps(origin, &PAWN_CAPTURES_BLACK),
            Self::Knight => jumps(origin, &L_SHAPES),
            Self::King => jumps(origin, &AROUND),
            Self::Bishop => rays(origin, &DIAGONALS, AxisKind::Diagonal),
            Self::Rook => rays(origin, &STRAIGHT_LINES, AxisKind::Straight),
            Self::Queen => {
                let mut axes = rays(origin, &DIAGONALS, AxisKind::Diagonal);
                axes.extend(rays(origin, &STRAIGHT_LINES, AxisKind::Straight));
                axes
            }
        }
    }
}

fn rays(origin: Square, dirs: &[(i8, i8)], kind: AxisKind) -> Vec<MovementAxis> {
    dirs.iter()
        .map(|&dir| MovementAxis::ray(origin, dir, kind))
        .filter(|axis| !axis.is_empty())
        .collect()
}

fn jumps(origin: Square, offsets: &[(i8, i8)]) -> Vec<MovementAxis> {
    offsets
        .iter()
        .filter_map(|&offset| MovementAxis::jump(origin, offset))
        .collect()
}

/// Movement axes for every piece kind from every square, built once per process.
pub struct GeometryTables {
    // Indexed by Movement, then square index.
    axes: Vec<Vec<Vec<MovementAxis>>>,
}

impl GeometryTables {
    fn new() -> Self {
        let axes = Movement::ALL
            .iter()
            .map(|movement| Square::all().map(|sq| movement.axes_from(sq)).collect())
            .collect();
        Self { axes }
    }

    pub fn get() -> &'static Self {
        static INSTANCE: OnceLock<GeometryTables> = OnceLock::new();
        INSTANCE.get_or_init(GeometryTables::new)
    }

    pub fn axes(&self, piece_type: PieceType, color: Color, origin: Square) -> &[MovementAxis] {
        self.axes
            .get(Movement::of(piece_type, color) as usize)
            .and_then(|by_square| by_square.get(origin.index()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
