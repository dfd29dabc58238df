//! Tetromino module - shape catalog, random generation and rotation
//!
//! Shapes are small 0/1 matrices (up to 4x4). A piece is a shape plus a color
//! and the grid position of the matrix's top-left corner. Rotation is a pure
//! transform of the matrix: transpose, then reverse each row.

use crate::rng::SimpleRng;
use crate::types::{Color, GRID_WIDTH};

/// Largest shape matrix side
pub const MAX_SHAPE: usize = 4;

/// A rectangular 0/1 matrix of at most `MAX_SHAPE` x `MAX_SHAPE` cells.
///
/// Cells outside `height` x `width` are always 0, so equality compares shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    height: u8,
    width: u8,
    cells: [[u8; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from a literal matrix (rows top to bottom)
    pub const fn from_rows<const H: usize, const W: usize>(rows: [[u8; W]; H]) -> Self {
        assert!(H > 0 && H <= MAX_SHAPE && W > 0 && W <= MAX_SHAPE);

        let mut cells = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        let mut i = 0;
        while i < H {
            let mut j = 0;
            while j < W {
                cells[i][j] = if rows[i][j] != 0 { 1 } else { 0 };
                j += 1;
            }
            i += 1;
        }

        Self {
            height: H as u8,
            width: W as u8,
            cells,
        }
    }

    /// Number of matrix rows
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Number of matrix columns
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Filled cells as (row, column) pairs, row-major
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height())
            .flat_map(move |i| (0..self.width()).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.cells[i][j] == 1)
    }

    /// Matrix rows, trimmed to `width`
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.height()]
            .iter()
            .map(move |row| &row[..self.width()])
    }

    /// 90° clockwise rotation: transpose, then reverse each resulting row.
    ///
    /// `new[r][c] = old[height - 1 - c][r]`; a `height x width` matrix becomes
    /// `width x height`, and four rotations give back the original.
    pub fn rotated(&self) -> Self {
        let (h, w) = (self.height(), self.width());
        let mut cells = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }

        Self {
            height: self.width,
            width: self.height,
            cells,
        }
    }
}

/// The seven catalog pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    O,
    I,
    S,
    Z,
    T,
    J,
}

impl PieceKind {
    /// Catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::J,
    ];

    /// Spawn shape of this kind
    pub fn shape(&self) -> Shape {
        match self {
            PieceKind::L => L_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::I => I_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::J => J_SHAPE,
        }
    }

    /// Catalog color of this kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::L => Color::Pink,
            PieceKind::O => Color::Cyan,
            PieceKind::I => Color::Red,
            PieceKind::S => Color::Orange,
            PieceKind::Z => Color::Yellow,
            PieceKind::T => Color::Purple,
            PieceKind::J => Color::ForestGreen,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
            PieceKind::J => "J",
        }
    }
}

const L_SHAPE: Shape = Shape::from_rows([[0, 0, 0], [1, 1, 1], [1, 0, 0]]);

// Three rows tall with an empty top row, like the other 3-row pieces.
const O_SHAPE: Shape = Shape::from_rows([[0, 0], [1, 1], [1, 1]]);

const I_SHAPE: Shape = Shape::from_rows([
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
]);

const S_SHAPE: Shape = Shape::from_rows([[0, 0, 0], [0, 1, 1], [1, 1, 0]]);

const Z_SHAPE: Shape = Shape::from_rows([[0, 0, 0], [1, 1, 0], [0, 1, 1]]);

const T_SHAPE: Shape = Shape::from_rows([[0, 0, 0], [1, 1, 1], [0, 1, 0]]);

const J_SHAPE: Shape = Shape::from_rows([[0, 0, 0], [1, 1, 1], [0, 0, 1]]);

/// A tetromino placed on (or above) the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    /// Column of the matrix's left edge
    pub x: i32,
    /// Row of the matrix's top edge; negative while entering from above
    pub y: i32,
}

impl Piece {
    /// Piece of `kind` with its matrix's top-left corner at (x, y)
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            color: kind.color(),
            x,
            y,
        }
    }

    /// Piece of `kind` at column `x`, on its spawn row (`2 - height`)
    pub fn spawn(kind: PieceKind, x: i32) -> Self {
        let shape = kind.shape();
        Self::new(kind, x, spawn_y(&shape))
    }

    /// Same piece shifted by (dx, dy)
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece, same position and color, with the shape rotated 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Absolute (x, y) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled()
            .map(move |(i, j)| (self.x + j as i32, self.y + i as i32))
    }
}

/// Spawn row for a shape: only its bottom two matrix rows start on the grid.
pub fn spawn_y(shape: &Shape) -> i32 {
    2 - shape.height() as i32
}

/// Pick a catalog piece uniformly and a spawn column uniformly in `[0, GRID_WIDTH - width]`.
pub fn random_block(rng: &mut SimpleRng) -> Piece {
    let kind = PieceKind::ALL[rng.next_index(PieceKind::ALL.len())];
    let width = kind.shape().width();
    let x = rng.next_index(GRID_WIDTH - width + 1);
    Piece::spawn(kind, x as i32)
}
