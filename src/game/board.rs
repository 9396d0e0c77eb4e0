use crate::error::Error;

use super::piece::Piece;
use super::shapes::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(ShapeKind),
}

impl Cell {
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(kind) => kind.value(),
        }
    }

    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

impl TryFrom<u8> for Cell {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            v => ShapeKind::try_from(v).map(Cell::Filled),
        }
    }
}

/// Locked content, row-major, `y = 0` at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Build a board from rows of raw cell values. Every row must have the
    /// same length.
    pub fn from_values(rows: &[&[u8]]) -> Result<Self, Error> {
        let width = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for &value in row.iter() {
                cells.push(Cell::try_from(value)?);
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// `None` when `(x, y)` lies outside the board on either axis.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        let x = usize::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = usize::try_from(y).ok().filter(|y| *y < self.height)?;
        Some(self.cells[self.idx(x, y)])
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn values(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_filled())
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        let start = self.idx(0, y);
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_filled())
    }

    /// True when any filled piece cell sits on a filled board cell or
    /// outside the board.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .any(|(x, y, _)| !matches!(self.get(x, y), Some(Cell::Empty)))
    }

    /// Writes the piece's cells into the board. Callers check `collides`
    /// first; cells outside the board are skipped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y, kind) in piece.cells() {
            if self.get(x, y).is_some() {
                self.set(x as usize, y as usize, Cell::Filled(kind));
            }
        }
    }

    /// Removes every full row, bottom to top, inserting an empty row at the
    /// top for each. Returns how many rows were cleared.
    pub fn sweep(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            if width > 0 && self.is_row_full(y - 1) {
                // Rows above slide down into y - 1, which is examined again.
                self.cells.copy_within(0..(y - 1) * width, width);
                self.cells[..width].fill(Cell::Empty);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::shapes::Turn;

    fn board(rows: &[&[u8]]) -> Board {
        Board::from_values(rows).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(12, 20);
        assert_eq!(board.width(), 12);
        assert_eq!(board.height(), 20);
        assert_eq!(board.rows().count(), 20);
        assert!(board.rows().all(|row| row.len() == 12));
        assert!(board.is_empty());
    }

    #[test]
    fn get_out_of_bounds() {
        let board = Board::new(4, 4);
        assert_eq!(board.get(0, 0), Some(Cell::Empty));
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(4, 0), None);
        assert_eq!(board.get(0, 4), None);
    }

    #[test]
    fn from_values_rejects_bad_input() {
        assert_eq!(
            Board::from_values(&[&[0, 0], &[0]]),
            Err(Error::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Board::from_values(&[&[0, 9]]),
            Err(Error::UnknownShape(9))
        );
    }

    #[test]
    fn collides_with_walls_and_floor() {
        let board = Board::new(12, 20);
        let piece = Piece::spawn(ShapeKind::O, 12);
        assert!(!board.collides(&piece));
        assert!(board.collides(&Piece { x: -2, ..piece }));
        assert!(board.collides(&Piece { x: 11, ..piece }));
        assert!(board.collides(&Piece { y: 19, ..piece }));
        assert!(board.collides(&Piece { y: -1, ..piece }));
        assert!(!board.collides(&Piece { y: 18, ..piece }));
    }

    #[test]
    fn empty_grid_cells_may_hang_off_the_board() {
        // Vertical I sits in grid column 2, so x = -2 is still in bounds.
        let board = Board::new(12, 20);
        let piece = Piece::spawn(ShapeKind::I, 12).rotated(Turn::Clockwise);
        assert!(!board.collides(&Piece { x: -2, ..piece }));
        assert!(board.collides(&Piece { x: -3, ..piece }));
    }

    #[test]
    fn collides_with_locked_cells() {
        let mut board = Board::new(12, 20);
        let piece = Piece::spawn(ShapeKind::O, 12);
        board.set(6, 1, Cell::Filled(ShapeKind::Z));
        assert!(board.collides(&piece));
        assert!(!board.collides(&piece.shifted(-2, 0)));
    }

    #[test]
    fn merge_writes_piece_cells() {
        let mut board = Board::new(4, 4);
        let piece = Piece {
            kind: ShapeKind::T,
            rotation: 0,
            x: 0,
            y: 1,
        };
        board.merge(&piece);
        assert_eq!(
            board.values(),
            vec![
                vec![0, 0, 0, 0],
                vec![0, 6, 0, 0],
                vec![6, 6, 6, 0],
                vec![0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn sweep_clears_separated_full_rows() {
        let mut board = board(&[&[1, 1, 1], &[0, 0, 0], &[2, 2, 2], &[3, 3, 3]]);
        assert_eq!(board.sweep(), 3);
        assert_eq!(board.height(), 4);
        assert!(board.is_empty());
    }

    #[test]
    fn sweep_keeps_order_of_partial_rows() {
        let mut board = board(&[
            &[0, 4, 0],
            &[1, 1, 1],
            &[5, 0, 0],
            &[2, 2, 2],
            &[0, 0, 6],
        ]);
        assert_eq!(board.sweep(), 2);
        assert_eq!(
            board.values(),
            vec![
                vec![0, 0, 0],
                vec![0, 0, 0],
                vec![0, 4, 0],
                vec![5, 0, 0],
                vec![0, 0, 6],
            ]
        );
    }

    #[test]
    fn sweep_four_adjacent_rows() {
        let mut board = board(&[
            &[0, 0, 7, 0],
            &[1, 1, 1, 1],
            &[2, 2, 2, 2],
            &[3, 3, 3, 3],
            &[4, 4, 4, 4],
        ]);
        assert_eq!(board.sweep(), 4);
        assert_eq!(
            board.values(),
            vec![
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 7, 0],
            ]
        );
    }

    #[test]
    fn sweep_without_full_rows_is_noop() {
        let mut board = board(&[&[0, 1], &[2, 0]]);
        let before = board.clone();
        assert_eq!(board.sweep(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut board = board(&[&[1, 2], &[3, 0]]);
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.height(), 2);
    }
}
