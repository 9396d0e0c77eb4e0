mod render;

use ratatui::style::Color;

use crate::game::ShapeKind;

pub use render::draw_game;

/// Fixed palette, one color per piece type.
pub fn kind_color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::I => Color::Cyan,
        ShapeKind::J => Color::Blue,
        ShapeKind::L => Color::Rgb(255, 165, 0),
        ShapeKind::O => Color::Yellow,
        ShapeKind::S => Color::Green,
        ShapeKind::T => Color::Rgb(160, 32, 240),
        ShapeKind::Z => Color::Red,
    }
}
