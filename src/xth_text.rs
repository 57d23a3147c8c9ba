// UI string resources
// Centralizes every label the view draws so layout code never hardcodes text

use crate::xth_game::{GameState, GameStatus};

pub struct Assets {
    // Menu items
    pub menu_help: &'static str,
    pub menu_new: &'static str,
    pub menu_options: &'static str,
    pub menu_about: &'static str,
    pub menu_exit: &'static str,

    // Board
    pub board_title: &'static str,
    pub btn_new: &'static str,

    // Status line
    pub status_won: &'static str,
    pub status_lost_fmt: &'static str,      // "You lost! ({})"
    pub status_remaining_fmt: &'static str, // "{} guesses left"
    pub status_last_guess: &'static str,

    // Status bar
    pub status_bar_fmt: &'static str,        // " Misses: {}/{}   Letters: {} "
    pub feedback_correct_fmt: &'static str,  // "Good guess: {}"
    pub feedback_incorrect_fmt: &'static str, // "No {} in the word"
    pub feedback_repeated_fmt: &'static str, // "Already tried {}"

    // Options modal
    pub opt_ascii_art: &'static str,
    pub opt_confirm_new: &'static str,
    pub opt_hint: &'static str,

    // Help modal
    pub help_controls: &'static str,
    pub help_guess: &'static str,
    pub help_click: &'static str,
    pub help_new: &'static str,
    pub help_exit: &'static str,

    // Win/Loss modals
    pub win_title: &'static str,
    pub win_message: &'static str,
    pub loss_title: &'static str,
    pub loss_message_fmt: &'static str, // "The word was \"{}\""
    pub result_hint: &'static str,

    // About modal
    pub about_description: &'static str,
    pub about_version_fmt: &'static str, // "v{} by {}"

    // Buttons
    pub btn_ok: &'static str,
    pub btn_close: &'static str,
    pub btn_yes: &'static str,
    pub btn_no: &'static str,

    // Confirmation dialog
    pub confirm_in_game: &'static str,
    pub confirm_new: &'static str,

    // Terminal size messages
    pub tsmsg_line1: &'static str,
    pub tsmsg_line2_fmt: &'static str, // "Minimum size required: {} x {}"
    pub tsmsg_title: &'static str,
}

pub const ASSETS: Assets = Assets {
    menu_help: "Help",
    menu_new: "New",
    menu_options: "Options",
    menu_about: "About",
    menu_exit: "Exit",

    board_title: "Hangman",
    btn_new: " New ",

    status_won: "You won!",
    status_lost_fmt: "You lost! ({})",
    status_remaining_fmt: "{} guesses left",
    status_last_guess: "1 guess left",

    status_bar_fmt: " Misses: {}/{}   Letters: {} ",
    feedback_correct_fmt: "Good guess: {}",
    feedback_incorrect_fmt: "No {} in the word",
    feedback_repeated_fmt: "Already tried {}",

    opt_ascii_art: "ASCII gallows",
    opt_confirm_new: "Confirm new game",
    opt_hint: "Space: toggle   Enter: OK",

    help_controls: " Controls:",
    help_guess: "  a-z           - guess a letter",
    help_click: "  Click letter  - guess that letter",
    help_new: "  F2 | New      - start a new word",
    help_exit: "  Esc           - exit",

    win_title: "Success",
    win_message: "Word Found — You Win!",
    loss_title: "Failure",
    loss_message_fmt: "The word was \"{}\"",
    result_hint: "Press any key for a new word",

    about_description: "A terminal-based classic Hangman game",
    about_version_fmt: "v{} by {}",

    btn_ok: " OK ",
    btn_close: " CLOSE ",
    btn_yes: " Yes ",
    btn_no: " No ",

    confirm_in_game: "Game in progress",
    confirm_new: "Start new one?",

    tsmsg_line1: "Terminal layout too small",
    tsmsg_line2_fmt: "Minimum size required: {} x {}",
    tsmsg_title: "Resize needed",
};

/// Substitute each `{}` in `fmt` with the next argument, in order
pub fn fill(fmt: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(fmt.len());
    let mut args = args.iter();
    let mut rest = fmt;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        out.push_str(args.next().copied().unwrap_or(""));
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// The line under the word: win, loss (revealing the secret) or guesses left
pub fn status_text(game: &GameState) -> String {
    match game.status() {
        GameStatus::Won => ASSETS.status_won.to_string(),
        GameStatus::Lost => fill(ASSETS.status_lost_fmt, &[game.secret_word()]),
        GameStatus::Playing => match game.remaining_guesses() {
            1 => ASSETS.status_last_guess.to_string(),
            n => fill(ASSETS.status_remaining_fmt, &[&n.to_string()]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xth_game::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game_with(word: &str) -> GameState {
        GameState::new(WordList::new([word]).unwrap(), &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn fill_substitutes_in_order() {
        assert_eq!(fill("v{} by {}", &["1.0", "me"]), "v1.0 by me");
        assert_eq!(fill("no args", &[]), "no args");
        assert_eq!(fill("{} and {}", &["one"]), "one and ");
    }

    #[test]
    fn status_follows_the_round() {
        let mut game = game_with("ox");
        assert_eq!(status_text(&game), "6 guesses left");
        for c in "abcde".chars() {
            game.process_guess(c);
        }
        assert_eq!(status_text(&game), "1 guess left");
        game.process_guess('f');
        assert_eq!(status_text(&game), "You lost! (ox)");

        let mut game = game_with("ox");
        game.process_guess('o');
        game.process_guess('x');
        assert_eq!(status_text(&game), "You won!");
    }
}
