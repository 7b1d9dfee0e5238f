//! Color themes for the board.
//!
//! Themes only affect rendering; switching never touches session state.

use crate::fb::Rgb;
use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Green,
    Blue,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Green => Theme::Blue,
            Theme::Blue => Theme::Green,
        }
    }

    /// Background behind the board.
    pub fn background(&self) -> Rgb {
        match self {
            Theme::Green => Rgb::new(187, 173, 160),
            Theme::Blue => Rgb::new(30, 30, 60),
        }
    }

    /// Color of tile numbers.
    pub fn text(&self) -> Rgb {
        match self {
            Theme::Green => Rgb::new(0, 0, 0),
            Theme::Blue => Rgb::new(255, 255, 255),
        }
    }

    /// Fill color for a tile value (0 = empty cell).
    pub fn tile(&self, value: Cell) -> Rgb {
        let palette = match self {
            Theme::Green => &GREEN_TILES,
            Theme::Blue => &BLUE_TILES,
        };
        let index = if value == 0 {
            0
        } else {
            value.trailing_zeros() as usize
        };
        palette.get(index).copied().unwrap_or(BEYOND_PALETTE)
    }
}

/// Tiles past 2048 share one color in both themes.
const BEYOND_PALETTE: Rgb = Rgb::new(60, 58, 50);

// Indexed by log2(value); slot 0 is the empty cell.
const GREEN_TILES: [Rgb; 12] = [
    Rgb::new(45, 90, 60),
    Rgb::new(102, 204, 153),
    Rgb::new(76, 175, 80),
    Rgb::new(0, 150, 136),
    Rgb::new(33, 150, 243),
    Rgb::new(30, 136, 229),
    Rgb::new(25, 118, 210),
    Rgb::new(0, 105, 92),
    Rgb::new(0, 77, 64),
    Rgb::new(51, 105, 30),
    Rgb::new(85, 139, 47),
    Rgb::new(104, 159, 56),
];

const BLUE_TILES: [Rgb; 12] = [
    Rgb::new(20, 30, 60),
    Rgb::new(70, 130, 180),
    Rgb::new(100, 149, 237),
    Rgb::new(65, 105, 225),
    Rgb::new(30, 144, 255),
    Rgb::new(0, 191, 255),
    Rgb::new(0, 154, 205),
    Rgb::new(25, 25, 112),
    Rgb::new(0, 0, 128),
    Rgb::new(0, 0, 139),
    Rgb::new(72, 61, 139),
    Rgb::new(106, 90, 205),
];
