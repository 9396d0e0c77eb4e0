pub mod board;
pub mod piece;
pub mod shapes;
pub mod state;

pub use board::{Board, Cell};
pub use piece::Piece;
pub use shapes::{Matrix, ShapeKind, State, Turn, random_kind};
pub use state::{Action, DropOutcome, Game};
