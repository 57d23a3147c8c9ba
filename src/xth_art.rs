// Gallows drawings for each stage of a round
// Stage 6 is the empty gallows, stage 0 the complete figure

use crate::xth_game::MAX_GUESSES;

/// Glyph set used to draw the gallows and the figure
struct Glyphs {
    beam: &'static str,
    corner_left: &'static str,
    corner_right: &'static str,
    post: &'static str,
    base: &'static str,
    head: &'static str,
    body: &'static str,
    arm_left: &'static str,
    arm_right: &'static str,
    leg_left: &'static str,
    leg_right: &'static str,
}

const ASCII_GLYPHS: Glyphs = Glyphs {
    beam: "-",
    corner_left: "+",
    corner_right: "+",
    post: "|",
    base: "=========",
    head: "O",
    body: "|",
    arm_left: "/",
    arm_right: "\\",
    leg_left: "/",
    leg_right: "\\",
};

const BOX_GLYPHS: Glyphs = Glyphs {
    beam: "─",
    corner_left: "┌",
    corner_right: "┐",
    post: "│",
    base: "══════╧══",
    head: "●",
    body: "┃",
    arm_left: "╱",
    arm_right: "╲",
    leg_left: "╱",
    leg_right: "╲",
};

/// Height of every drawing in rows
pub const ART_HEIGHT: u16 = 7;
/// Width of every drawing in terminal columns
pub const ART_WIDTH: u16 = 9;

/// Build the drawing for `stage` (remaining guesses, 0..=6)
/// Stages above the maximum draw the empty gallows
pub fn stage_art(stage: usize, ascii: bool) -> Vec<String> {
    let g = if ascii { &ASCII_GLYPHS } else { &BOX_GLYPHS };
    // number of body parts to draw
    let parts = MAX_GUESSES - stage.min(MAX_GUESSES);
    let part = |n: usize, glyph: &'static str| if parts >= n { glyph } else { " " };

    vec![
        format!("  {}{}{}  ", g.corner_left, g.beam.repeat(3), g.corner_right),
        format!("  {}   {}  ", g.post, g.post),
        format!("  {}   {}  ", part(1, g.head), g.post),
        format!(" {}{}{}  {}  ", part(3, g.arm_left), part(2, g.body), part(4, g.arm_right), g.post),
        format!(" {} {}  {}  ", part(5, g.leg_left), part(6, g.leg_right), g.post),
        format!("      {}  ", g.post),
        g.base.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn every_stage_has_fixed_dimensions() {
        for ascii in [true, false] {
            for stage in 0..=MAX_GUESSES {
                let art = stage_art(stage, ascii);
                assert_eq!(art.len(), ART_HEIGHT as usize);
                for line in &art {
                    assert_eq!(line.as_str().width(), ART_WIDTH as usize, "{:?}", line);
                }
            }
        }
    }

    #[test]
    fn empty_gallows_at_start() {
        let art = stage_art(MAX_GUESSES, true);
        assert_eq!(art[2].trim(), "|");
        assert_eq!(art[3].trim(), "|");
        assert_eq!(art[4].trim(), "|");
    }

    #[test]
    fn figure_grows_one_part_per_miss() {
        assert_eq!(stage_art(5, true)[2], "  O   |  ");
        assert_eq!(stage_art(4, true)[3], "  |   |  ");
        assert_eq!(stage_art(3, true)[3], " /|   |  ");
        assert_eq!(stage_art(2, true)[3], " /|\\  |  ");
        assert_eq!(stage_art(1, true)[4], " /    |  ");
        assert_eq!(stage_art(0, true)[4], " / \\  |  ");
    }

    #[test]
    fn out_of_range_stage_is_empty_gallows() {
        assert_eq!(stage_art(99, false), stage_art(MAX_GUESSES, false));
    }
}
