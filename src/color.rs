//! Terminal colors: the `COLOR_*` symbolic names guest programs write into
//! `DISPLAY_COLOR`/`DISPLAY_BACKGROUND`, and the single-character bitmap
//! palette used by `OP_RENDER_BITMAP`.

use ansi_term::Colour;

pub const COLOR_MAGENTA: &str = "COLOR_MAGENTA";
pub const COLOR_GREEN: &str = "COLOR_GREEN";
pub const COLOR_YELLOW: &str = "COLOR_YELLOW";
pub const COLOR_RED: &str = "COLOR_RED";
pub const COLOR_BLACK: &str = "COLOR_BLACK";
pub const COLOR_BLUE: &str = "COLOR_BLUE";
pub const COLOR_CYAN: &str = "COLOR_CYAN";
pub const COLOR_WHITE: &str = "COLOR_WHITE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Magenta,
    Green,
    Yellow,
    Red,
    Black,
    Blue,
    Cyan,
    White,
}

impl Color {
    pub fn from_name(name: &str) -> Option<Color> {
        Some(match name {
            COLOR_MAGENTA => Color::Magenta,
            COLOR_GREEN => Color::Green,
            COLOR_YELLOW => Color::Yellow,
            COLOR_RED => Color::Red,
            COLOR_BLACK => Color::Black,
            COLOR_BLUE => Color::Blue,
            COLOR_CYAN => Color::Cyan,
            COLOR_WHITE => Color::White,
            _ => return None,
        })
    }

    /// The bitmap palette maps one letter per color, used by `OP_RENDER_BITMAP`.
    pub fn from_palette_char(ch: char) -> Option<Color> {
        Some(match ch {
            'm' => Color::Magenta,
            'g' => Color::Green,
            'y' => Color::Yellow,
            'r' => Color::Red,
            'B' => Color::Black,
            'b' => Color::Blue,
            'c' => Color::Cyan,
            'w' => Color::White,
            _ => return None,
        })
    }

    pub fn ansi(self) -> Colour {
        match self {
            Color::Magenta => Colour::Purple,
            Color::Green => Colour::Green,
            Color::Yellow => Colour::Yellow,
            Color::Red => Colour::Red,
            Color::Black => Colour::Black,
            Color::Blue => Colour::Blue,
            Color::Cyan => Colour::Cyan,
            Color::White => Colour::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_named_colors() {
        assert_eq!(Color::from_name(COLOR_RED), Some(Color::Red));
        assert_eq!(Color::from_name("COLOR_NOPE"), None);
    }

    #[test]
    fn resolves_palette_letters() {
        assert_eq!(Color::from_palette_char('r'), Some(Color::Red));
        assert_eq!(Color::from_palette_char('B'), Some(Color::Black));
        assert_eq!(Color::from_palette_char('z'), None);
    }
}
