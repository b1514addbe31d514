//! Pieces module - tetromino matrices and the 90° rotation transform
//!
//! A shape is the set of filled cells of its bounding matrix, stored as
//! (dx, dy) offsets from the piece origin (the matrix's top-left corner).

use crate::types::{PieceKind, TETRIS_SPAWN};

/// Offset of a single mino relative to the piece origin
pub type MinoOffset = (i8, i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    minos: [MinoOffset; 4],
    width: i8,
    height: i8,
}

impl Shape {
    /// Spawn matrix for a piece kind.
    ///
    /// ```text
    /// I: ####      O: ##     T: .#.    S: .##
    ///                 ##        ###       ##.
    /// Z: ##.       J: #..    L: ..#
    ///    .##          ###       ###
    /// ```
    pub fn of(kind: PieceKind) -> Self {
        let (minos, width, height) = match kind {
            PieceKind::I => ([(0, 0), (1, 0), (2, 0), (3, 0)], 4, 1),
            PieceKind::O => ([(0, 0), (1, 0), (0, 1), (1, 1)], 2, 2),
            PieceKind::T => ([(1, 0), (0, 1), (1, 1), (2, 1)], 3, 2),
            PieceKind::S => ([(1, 0), (2, 0), (0, 1), (1, 1)], 3, 2),
            PieceKind::Z => ([(0, 0), (1, 0), (1, 1), (2, 1)], 3, 2),
            PieceKind::J => ([(0, 0), (0, 1), (1, 1), (2, 1)], 3, 2),
            PieceKind::L => ([(2, 0), (0, 1), (1, 1), (2, 1)], 3, 2),
        };
        Self::normalized(minos, width, height)
    }

    fn normalized(mut minos: [MinoOffset; 4], width: i8, height: i8) -> Self {
        minos.sort_unstable_by_key(|&(x, y)| (y, x));
        Self {
            minos,
            width,
            height,
        }
    }

    pub fn minos(&self) -> &[MinoOffset; 4] {
        &self.minos
    }

    pub fn width(&self) -> i8 {
        self.width
    }

    pub fn height(&self) -> i8 {
        self.height
    }

    /// Rotate the matrix 90° clockwise (transpose, then reverse each row).
    ///
    /// A cell at (x, y) of an `h`-row matrix moves to (h - 1 - y, x).
    pub fn rotated_cw(&self) -> Self {
        let h = self.height;
        let mut minos = self.minos;
        for m in &mut minos {
            *m = (h - 1 - m.1, m.0);
        }
        Self::normalized(minos, self.height, self.width)
    }

    /// Render the matrix as rows of `#` and `.` (handy in tests and logs).
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.minos.contains(&(x, y)) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// The falling piece: kind, current matrix and origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece of `kind` at the spawn origin
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
            x: TETRIS_SPAWN.0,
            y: TETRIS_SPAWN.1,
        }
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_rotation_matrix() {
        let t = Shape::of(PieceKind::T);
        assert_eq!(t.rows(), vec![".#.", "###"]);
        let r = t.rotated_cw();
        assert_eq!(r.rows(), vec!["#.", "##", "#."]);
        assert_eq!(r.rotated_cw().rows(), vec!["###", ".#."]);
    }

    #[test]
    fn test_i_becomes_vertical() {
        let i = Shape::of(PieceKind::I).rotated_cw();
        assert_eq!((i.width(), i.height()), (1, 4));
        assert_eq!(i.rows(), vec!["#", "#", "#", "#"]);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let s = Shape::of(kind);
            let back = s.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(s, back, "{:?}", kind);
        }
    }

    #[test]
    fn test_o_rotation_is_stable() {
        let o = Shape::of(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn test_spawn_origin() {
        let p = Piece::spawn(PieceKind::L);
        assert_eq!((p.x, p.y), (3, 0));
        let cells: Vec<_> = p.cells().collect();
        assert!(cells.contains(&(5, 0)));
    }
}
