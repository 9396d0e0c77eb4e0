use rand::Rng;

use crate::error::Error;

/// One rotation state: a square grid of cell values, `0` or the type id.
pub type State = &'static [&'static [u8]];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Rotation states in clockwise order. I, S and Z only keep two
    /// appearances and O keeps one; the others cycle through four.
    pub fn rotation_states(self) -> &'static [State] {
        match self {
            ShapeKind::I => I,
            ShapeKind::J => J,
            ShapeKind::L => L,
            ShapeKind::O => O,
            ShapeKind::S => S,
            ShapeKind::T => T,
            ShapeKind::Z => Z,
        }
    }

    pub fn spawn_state(self) -> State {
        self.rotation_states()[0]
    }

    pub fn name(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::O => 'O',
            ShapeKind::S => 'S',
            ShapeKind::T => 'T',
            ShapeKind::Z => 'Z',
        }
    }
}

impl TryFrom<u8> for ShapeKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ShapeKind::ALL
            .get(usize::from(value).wrapping_sub(1))
            .copied()
            .ok_or(Error::UnknownShape(value))
    }
}

/// Uniform pick over the seven piece types.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

impl Turn {
    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }
}

/// Owned copy of a rotation state that can be turned in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<u8>>,
}

impl Matrix {
    pub fn from_state(state: State) -> Self {
        Self {
            rows: state.iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn is_square(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.rows.len())
    }

    /// Quarter turn: transpose, then mirror columns (clockwise) or rows
    /// (counter-clockwise). Only square grids are supported.
    pub fn rotate(&mut self, turn: Turn) {
        debug_assert!(self.is_square(), "rotate needs a square grid");
        let n = self.rows.len();
        for y in 0..n {
            for x in 0..y {
                let tmp = self.rows[y][x];
                self.rows[y][x] = self.rows[x][y];
                self.rows[x][y] = tmp;
            }
        }
        match turn {
            Turn::Clockwise => self.rows.iter_mut().for_each(|row| row.reverse()),
            Turn::CounterClockwise => self.rows.reverse(),
        }
    }

    pub fn rotated(&self, turn: Turn) -> Self {
        let mut next = self.clone();
        next.rotate(turn);
        next
    }
}

impl PartialEq<State> for Matrix {
    fn eq(&self, other: &State) -> bool {
        self.rows.len() == other.len()
            && self
                .rows
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.as_slice() == *b)
    }
}

const I: &[State] = &[
    &[
        &[0, 0, 0, 0],
        &[1, 1, 1, 1],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ],
    &[
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
    ],
];

const J: &[State] = &[
    &[&[2, 0, 0], &[2, 2, 2], &[0, 0, 0]],
    &[&[0, 2, 2], &[0, 2, 0], &[0, 2, 0]],
    &[&[0, 0, 0], &[2, 2, 2], &[0, 0, 2]],
    &[&[0, 2, 0], &[0, 2, 0], &[2, 2, 0]],
];

const L: &[State] = &[
    &[&[0, 0, 3], &[3, 3, 3], &[0, 0, 0]],
    &[&[0, 3, 0], &[0, 3, 0], &[0, 3, 3]],
    &[&[0, 0, 0], &[3, 3, 3], &[3, 0, 0]],
    &[&[3, 3, 0], &[0, 3, 0], &[0, 3, 0]],
];

const O: &[State] = &[&[&[4, 4], &[4, 4]]];

const S: &[State] = &[
    &[&[0, 5, 5], &[5, 5, 0], &[0, 0, 0]],
    &[&[0, 5, 0], &[0, 5, 5], &[0, 0, 5]],
];

const T: &[State] = &[
    &[&[0, 6, 0], &[6, 6, 6], &[0, 0, 0]],
    &[&[0, 6, 0], &[0, 6, 6], &[0, 6, 0]],
    &[&[0, 0, 0], &[6, 6, 6], &[0, 6, 0]],
    &[&[0, 6, 0], &[6, 6, 0], &[0, 6, 0]],
];

const Z: &[State] = &[
    &[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]],
    &[&[0, 0, 7], &[0, 7, 7], &[0, 7, 0]],
];
