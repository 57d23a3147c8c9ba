use ratatui::style::Color;
use term_color_support::ColorSupport;

/// Windows Terminal "Campbell" sample for an ANSI color: ((R, G, B), ANSI_256_Index)
fn campbell(color: Color) -> Option<((u8, u8, u8), u8)> {
    match color {
        Color::Black =>         Some(((12, 12, 12),   232)),
        Color::Red =>           Some(((197, 15, 31),  160)),
        Color::Green =>         Some(((19, 161, 14),  28)),
        Color::Yellow =>        Some(((193, 156, 0),  178)),
        Color::Blue =>          Some(((0, 55, 218),   20)),
        Color::Magenta =>       Some(((136, 23, 152), 90)),
        Color::Cyan =>          Some(((58, 150, 221), 38)),
        Color::Gray =>          Some(((204, 204, 204), 250)),
        Color::DarkGray =>      Some(((118, 118, 118), 243)),
        Color::LightRed =>      Some(((231, 72, 86),  203)),
        Color::LightGreen =>    Some(((22, 198, 12),  46)),
        Color::LightYellow =>   Some(((249, 241, 165), 229)),
        Color::LightBlue =>     Some(((59, 120, 255), 63)),
        Color::LightMagenta =>  Some(((180, 0, 158),  163)),
        Color::LightCyan =>     Some(((97, 214, 214), 116)),
        Color::White =>         Some(((242, 242, 242), 255)),
        _ => None,
    }
}

/// What the terminal can display, detected once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    TrueColor,
    Indexed256,
    Basic,
}

impl ColorDepth {
    pub fn detect() -> Self {
        let support = ColorSupport::stdout();
        if support.has_16m {
            ColorDepth::TrueColor
        } else if support.has_256 {
            ColorDepth::Indexed256
        } else {
            ColorDepth::Basic
        }
    }

    /// Map an ANSI color to the closest consistent rendering for this depth
    /// Custom RGB or Indexed colors are returned as-is
    pub fn adapt(self, color: Color) -> Color {
        match (campbell(color), self) {
            (Some((rgb, _)), ColorDepth::TrueColor) => Color::Rgb(rgb.0, rgb.1, rgb.2),
            (Some((_, index256)), ColorDepth::Indexed256) => Color::Indexed(index256),
            _ => color,
        }
    }
}

/// All colors the game view uses, resolved for the current terminal
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub menu_key_fg: Color,
    pub menu_key_bg_hover: Color,
    pub menu_key_fg_hover: Color,
    pub gallows: Color,
    pub figure: Color,
    pub word: Color,
    pub letter_guessed: Color,
    pub letter_unguessed: Color,
    pub won: Color,
    pub lost: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub button_bg_focus: Color,
}

impl Palette {
    pub fn new(depth: ColorDepth) -> Self {
        let c = |color| depth.adapt(color);
        Palette {
            menu_key_fg: c(Color::Yellow),
            menu_key_bg_hover: c(Color::LightBlue),
            menu_key_fg_hover: c(Color::Black),
            gallows: c(Color::Gray),
            figure: c(Color::LightRed),
            word: c(Color::White),
            letter_guessed: c(Color::LightBlue),
            letter_unguessed: c(Color::DarkGray),
            won: c(Color::LightGreen),
            lost: c(Color::Red),
            button_fg: c(Color::Black),
            button_bg: c(Color::Gray),
            button_bg_focus: c(Color::White),
        }
    }

    pub fn detect() -> Self {
        Palette::new(ColorDepth::detect())
    }
}
