//! Colors of the green-on-black terminal look.

use crate::fb::{CellStyle, Rgb};

pub const BG: Rgb = Rgb::new(0, 0, 0);
/// Phosphor green used for all regular text
pub const TEXT: Rgb = Rgb::new(74, 222, 128);
pub const ALERT: Rgb = Rgb::new(239, 68, 68);
pub const GOLD: Rgb = Rgb::new(250, 204, 21);
pub const FRAME: Rgb = Rgb::new(200, 200, 200);
pub const WELL: Rgb = Rgb::new(18, 24, 20);
pub const GRID_DOT: Rgb = Rgb::new(60, 90, 70);

pub fn text() -> CellStyle {
    CellStyle::fg(TEXT)
}

pub fn alert() -> CellStyle {
    CellStyle::fg(ALERT).bold()
}

pub fn gold() -> CellStyle {
    CellStyle::fg(GOLD).bold()
}

pub fn hint() -> CellStyle {
    CellStyle::fg(TEXT).dim()
}

pub fn frame() -> CellStyle {
    CellStyle::fg(FRAME)
}
