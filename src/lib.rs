pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

pub use config::{
    BOARD_H, BOARD_W, CELL_W, DROP_INTERVAL, FRAME, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W,
};
pub use error::Error;
pub use game::{Action, Board, Cell, DropOutcome, Game, Piece, ShapeKind, Turn};
