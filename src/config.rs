// Shared game/UI constants.
use std::time::Duration;

pub const BOARD_W: usize = 12;
pub const BOARD_H: usize = 20;
// Fall-timer threshold; the accumulator must exceed this to trigger a drop.
pub const DROP_INTERVAL: Duration = Duration::from_millis(200);
// Event poll timeout, roughly one display refresh.
pub const FRAME: Duration = Duration::from_millis(16);
pub const CELL_W: usize = 2; // render each block as two characters wide
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H + 2; // inner height plus ceiling/floor
pub const SIDEBAR_W: u16 = 22;
// Playfield, sidebar and cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + SIDEBAR_W + 2;
