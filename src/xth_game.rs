// Core game logic
// Handles word selection, guess processing, and win/loss detection

use log::debug;
use rand::Rng;
use std::collections::BTreeSet;
use thiserror::Error;

/// Number of incorrect guesses that ends a round
pub const MAX_GUESSES: usize = 6;

/// Built-in word list the binary validates and injects at startup
pub const DEFAULT_WORDS: [&str; 10] = [
    "accretion",
    "boisterous",
    "dullard",
    "feigned",
    "haughty",
    "insipid",
    "noisome",
    "obdurate",
    "parsimonious",
    "sycophant",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,
    #[error("word {index} is empty")]
    EmptyWord { index: usize },
    #[error("word {word:?} must contain only lowercase ASCII letters")]
    InvalidWord { word: String },
}

/// A non-empty list of lowercase ASCII words to draw secrets from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Validate and wrap a list of candidate words
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        for (index, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(WordListError::EmptyWord { index });
            }
            if !word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(WordListError::InvalidWord { word: word.clone() });
            }
        }
        Ok(WordList { words })
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `new` guarantees at least one entry
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

/// Result of submitting one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,   // New letter, present in the secret word
    Incorrect, // New letter, absent from the secret word
    Repeated,  // Letter was already guessed this round
    Rejected,  // Not a lowercase letter, or the round is already over
}

impl GuessOutcome {
    /// Whether the guess changed the game state
    pub fn accepted(self) -> bool {
        matches!(self, GuessOutcome::Correct | GuessOutcome::Incorrect)
    }
}

/// Round status as seen by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    words: WordList,
    secret_word: String,
    guessed_letters: BTreeSet<char>,
    incorrect_guesses: usize,
}

impl GameState {
    /// Create a game over `words` and immediately draw the first secret
    pub fn new<R: Rng + ?Sized>(words: WordList, rng: &mut R) -> Self {
        let mut game = GameState {
            words,
            secret_word: String::new(),
            guessed_letters: BTreeSet::new(),
            incorrect_guesses: 0,
        };
        game.reset(rng);
        game
    }

    /// Start a new round with a freshly drawn secret word
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.secret_word = self.words.choose(rng).to_string();
        self.guessed_letters.clear();
        self.incorrect_guesses = 0;
        debug!("new round: {} letters", self.secret_word.len());
    }

    /// Submit a single letter guess
    pub fn process_guess(&mut self, letter: char) -> GuessOutcome {
        if self.guessed_letters.contains(&letter) {
            return GuessOutcome::Repeated;
        }
        if !letter.is_ascii_lowercase() || self.is_game_over() {
            return GuessOutcome::Rejected;
        }
        self.guessed_letters.insert(letter);
        if self.secret_word.contains(letter) {
            GuessOutcome::Correct
        } else {
            self.incorrect_guesses += 1;
            GuessOutcome::Incorrect
        }
    }

    /// The secret word with every unguessed letter replaced by '?'
    pub fn display_word(&self) -> String {
        self.secret_word
            .chars()
            .map(|c| if self.guessed_letters.contains(&c) { c } else { '?' })
            .collect()
    }

    pub fn is_word_guessed(&self) -> bool {
        self.secret_word
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }

    pub fn is_game_over(&self) -> bool {
        self.incorrect_guesses >= MAX_GUESSES || self.is_word_guessed()
    }

    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.incorrect_guesses)
    }

    pub fn status(&self) -> GameStatus {
        if self.is_word_guessed() {
            GameStatus::Won
        } else if self.incorrect_guesses >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Gallows drawing index: 6 for an untouched round, 0 once lost
    pub fn stage(&self) -> usize {
        self.remaining_guesses()
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    pub fn incorrect_guesses(&self) -> usize {
        self.incorrect_guesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game_with(word: &str) -> GameState {
        let words = WordList::new([word]).unwrap();
        GameState::new(words, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn rejects_bad_word_lists() {
        assert_eq!(WordList::new(Vec::<String>::new()), Err(WordListError::Empty));
        assert_eq!(
            WordList::new(["cat", ""]),
            Err(WordListError::EmptyWord { index: 1 })
        );
        assert!(matches!(
            WordList::new(["Cat"]),
            Err(WordListError::InvalidWord { .. })
        ));
        assert!(matches!(
            WordList::new(["two words"]),
            Err(WordListError::InvalidWord { .. })
        ));
    }

    #[test]
    fn default_list_is_valid() {
        assert!(WordList::new(DEFAULT_WORDS).is_ok());
    }

    #[test]
    fn new_game_starts_clean() {
        let game = game_with("dog");
        assert_eq!(game.secret_word(), "dog");
        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.incorrect_guesses(), 0);
        assert_eq!(game.remaining_guesses(), MAX_GUESSES);
        assert_eq!(game.display_word(), "???");
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.stage(), 6);
    }

    #[test]
    fn cat_is_won_without_mistakes() {
        let mut game = game_with("cat");
        assert_eq!(game.process_guess('a'), GuessOutcome::Correct);
        assert_eq!(game.process_guess('t'), GuessOutcome::Correct);
        assert!(!game.is_word_guessed());
        assert_eq!(game.process_guess('c'), GuessOutcome::Correct);
        assert!(game.is_word_guessed());
        assert!(game.is_game_over());
        assert_eq!(game.incorrect_guesses(), 0);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn dog_is_lost_after_six_misses() {
        let mut game = game_with("dog");
        assert_eq!(game.process_guess('x'), GuessOutcome::Incorrect);
        assert_eq!(game.incorrect_guesses(), 1);
        assert_eq!(game.remaining_guesses(), 5);

        assert_eq!(game.process_guess('d'), GuessOutcome::Correct);
        assert_eq!(game.display_word(), "d??");

        for c in ['q', 'w', 'e', 'r'] {
            assert_eq!(game.process_guess(c), GuessOutcome::Incorrect);
        }
        assert_eq!(game.incorrect_guesses(), 5);
        assert_eq!(game.remaining_guesses(), 1);
        assert!(!game.is_game_over());

        assert_eq!(game.process_guess('t'), GuessOutcome::Incorrect);
        assert_eq!(game.incorrect_guesses(), 6);
        assert!(game.is_game_over());
        assert!(!game.is_word_guessed());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.stage(), 0);
    }

    #[test]
    fn no_guesses_after_loss() {
        let mut game = game_with("dog");
        for c in ['a', 'b', 'c', 'e', 'f', 'h'] {
            game.process_guess(c);
        }
        assert!(game.is_game_over());
        assert_eq!(game.process_guess('d'), GuessOutcome::Rejected);
        assert_eq!(game.process_guess('z'), GuessOutcome::Rejected);
        assert_eq!(game.incorrect_guesses(), MAX_GUESSES);
        assert!(!game.is_guessed('d'));
    }

    #[test]
    fn non_lowercase_input_is_rejected() {
        let mut game = game_with("dog");
        for c in ['D', '1', ' ', 'é', '?'] {
            assert_eq!(game.process_guess(c), GuessOutcome::Rejected);
            assert!(!GuessOutcome::Rejected.accepted());
        }
        assert!(game.guessed_letters().is_empty());
        assert_eq!(game.incorrect_guesses(), 0);
    }

    #[test]
    fn reset_after_game_over_starts_a_new_round() {
        let words = WordList::new(DEFAULT_WORDS).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = GameState::new(words.clone(), &mut rng);
        for c in "zqxjkvwy".chars() {
            game.process_guess(c);
        }
        game.reset(&mut rng);
        assert_eq!(game.incorrect_guesses(), 0);
        assert!(game.guessed_letters().is_empty());
        assert!(DEFAULT_WORDS.contains(&game.secret_word()));
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn seeded_rng_gives_repeatable_words() {
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new(WordList::new(DEFAULT_WORDS).unwrap(), &mut rng);
            let first = game.secret_word().to_string();
            game.reset(&mut rng);
            (first, game.secret_word().to_string())
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn every_word_can_be_drawn() {
        let words = WordList::new(DEFAULT_WORDS).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = BTreeSet::new();
        for _ in 0..1000 {
            seen.insert(words.choose(&mut rng).to_string());
        }
        assert_eq!(seen.len(), DEFAULT_WORDS.len());
    }

    fn lowercase() -> impl Strategy<Value = char> {
        (b'a'..=b'z').prop_map(char::from)
    }

    proptest! {
        #[test]
        fn repeated_guess_is_a_no_op(word in "[a-z]{1,12}", letter in lowercase()) {
            let mut game = game_with(&word);
            let first = game.process_guess(letter);
            prop_assert!(first.accepted());
            let guessed = game.guessed_letters().clone();
            let incorrect = game.incorrect_guesses();
            prop_assert_eq!(game.process_guess(letter), GuessOutcome::Repeated);
            prop_assert_eq!(game.guessed_letters(), &guessed);
            prop_assert_eq!(game.incorrect_guesses(), incorrect);
        }

        #[test]
        fn full_alphabet_reveals_word(word in "[a-z]{1,12}") {
            let mut game = game_with(&word);
            // Guess the word's own letters first so the round cannot be lost
            for c in word.chars().chain('a'..='z') {
                game.process_guess(c);
            }
            prop_assert_eq!(game.display_word(), word);
            prop_assert!(game.is_word_guessed());
        }

        #[test]
        fn counters_stay_in_bounds(word in "[a-z]{1,12}", guesses in proptest::collection::vec(any::<char>(), 0..60)) {
            let mut game = game_with(&word);
            for c in guesses {
                game.process_guess(c);
                prop_assert!(game.incorrect_guesses() <= MAX_GUESSES);
                prop_assert_eq!(game.remaining_guesses() + game.incorrect_guesses(), MAX_GUESSES);
                prop_assert!(game.guessed_letters().iter().all(|c| c.is_ascii_lowercase()));
                prop_assert_eq!(
                    game.is_game_over(),
                    game.incorrect_guesses() == MAX_GUESSES || game.is_word_guessed()
                );
            }
        }
    }
}
