use super::shapes::{ShapeKind, State, Turn};

/// The falling piece. The grid is looked up from the catalog by
/// `(kind, rotation)` instead of being turned in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Spawn placement: top row, centered over `columns`.
    pub fn spawn(kind: ShapeKind, columns: usize) -> Self {
        let width = kind.spawn_state()[0].len() as i32;
        Self {
            kind,
            rotation: 0,
            x: columns as i32 / 2 - (width + 1) / 2,
            y: 0,
        }
    }

    pub fn grid(&self) -> State {
        let states = self.kind.rotation_states();
        states[self.rotation % states.len()]
    }

    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, ShapeKind)> {
        let (ox, oy, kind) = (self.x, self.y, self.kind);
        self.grid().iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, value)| **value != 0)
                .map(move |(dx, _)| (ox + dx as i32, oy + dy as i32, kind))
        })
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut next = *self;
        next.x += dx;
        next.y += dy;
        next
    }

    pub fn rotated(&self, turn: Turn) -> Self {
        let count = self.kind.rotation_states().len();
        let mut next = *self;
        next.rotation = match turn {
            Turn::Clockwise => (self.rotation + 1) % count,
            Turn::CounterClockwise => (self.rotation + count - 1) % count,
        };
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_centered() {
        assert_eq!(Piece::spawn(ShapeKind::I, 12).x, 4);
        assert_eq!(Piece::spawn(ShapeKind::O, 12).x, 5);
        assert_eq!(Piece::spawn(ShapeKind::T, 12).x, 4);
        assert_eq!(Piece::spawn(ShapeKind::T, 12).y, 0);
    }

    #[test]
    fn cells_are_offset_by_position() {
        let piece = Piece::spawn(ShapeKind::I, 12);
        let cells: Vec<_> = piece.cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(cells, vec![(4, 1), (5, 1), (6, 1), (7, 1)]);

        let moved = piece.shifted(-1, 3);
        assert!(moved.cells().all(|(_, y, kind)| y == 4 && kind == ShapeKind::I));
    }

    #[test]
    fn rotation_index_wraps_both_ways() {
        let t = Piece::spawn(ShapeKind::T, 12);
        assert_eq!(t.rotated(Turn::CounterClockwise).rotation, 3);
        assert_eq!(t.rotated(Turn::Clockwise).rotated(Turn::Clockwise).rotation, 2);

        let i = Piece::spawn(ShapeKind::I, 12);
        assert_eq!(i.rotated(Turn::Clockwise).rotated(Turn::Clockwise), i);

        let o = Piece::spawn(ShapeKind::O, 12);
        assert_eq!(o.rotated(Turn::Clockwise), o);
    }

    #[test]
    fn opposite_turns_restore_piece() {
        for kind in ShapeKind::ALL {
            let piece = Piece::spawn(kind, 12).rotated(Turn::Clockwise);
            assert_eq!(
                piece.rotated(Turn::Clockwise).rotated(Turn::CounterClockwise),
                piece
            );
        }
    }
}
