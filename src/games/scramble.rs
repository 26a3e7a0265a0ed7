use rand::seq::SliceRandom;
use rand::Rng;
use crate::games::words::scramble_phrase;
use crate::util::errors::ErrorCategory;
use crate::util::params::match_alias;

pub const MAX_SCRAMBLE_GUESSES: u32 = 10;

// Some phrases can't be shuffled into anything new (e.g. "aaa"), so stop trying eventually.
const SHUFFLE_ATTEMPTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleMode {
    /// Each word is shuffled on its own.
    Normal,
    /// Every letter in the phrase is shuffled together.
    Expert
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleParam {
    Start(ScrambleMode),
    Quit
}

const ACCEPTED: &[(ScrambleParam, &[&str])] = &[
    (ScrambleParam::Start(ScrambleMode::Normal), &["normal", "n", "easy", "e"]),
    (ScrambleParam::Start(ScrambleMode::Expert), &["expert", "hard", "difficult"]),
    (ScrambleParam::Quit, &["quit", "q", "exit"])
];

impl ScrambleParam {
    pub fn parse(input: Option<&str>) -> Result<Self, ErrorCategory> {
        match input.map(str::trim).filter(|o| !o.is_empty()) {
            None => Ok(ScrambleParam::Start(ScrambleMode::Normal)),
            Some(difficulty) => match_alias(difficulty, ACCEPTED).ok_or(ErrorCategory::InvalidInput)
        }
    }
}

fn shuffle_chars<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

pub fn scramble_text<R: Rng + ?Sized>(phrase: &str, mode: ScrambleMode, rng: &mut R) -> String {
    let unscrambled = match mode {
        ScrambleMode::Normal => phrase.split_whitespace().collect::<Vec<_>>().join(" "),
        ScrambleMode::Expert => phrase.split_whitespace().collect::<String>()
    };

    let mut scrambled = unscrambled.clone();
    for _ in 0..SHUFFLE_ATTEMPTS {
        scrambled = match mode {
            ScrambleMode::Normal => unscrambled.split(' ')
                .map(|word| shuffle_chars(word, rng))
                .collect::<Vec<_>>()
                .join(" "),
            ScrambleMode::Expert => shuffle_chars(&unscrambled, rng)
        };

        if scrambled != unscrambled {
            break;
        }
    }

    scrambled
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleOutcome {
    /// Single characters are chatter, not guesses.
    Ignored,
    Rejected(ErrorCategory),
    Wrong { attempts_left: u32 },
    Won { word: String, guesses: u32 },
    Lost { word: String }
}

impl ScrambleOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, ScrambleOutcome::Won { .. } | ScrambleOutcome::Lost { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ScrambleGame {
    word: String,
    scrambled: String,
    guesses: u32,
    guessed: Vec<String>
}

impl ScrambleGame {
    pub fn new<R: Rng + ?Sized>(phrase: &str, mode: ScrambleMode, rng: &mut R) -> Self {
        let word = normalize(phrase);
        let scrambled = scramble_text(&word, mode, rng);

        Self {
            word,
            scrambled,
            guesses: 0,
            guessed: Vec::new()
        }
    }

    pub fn random<R: Rng + ?Sized>(mode: ScrambleMode, rng: &mut R) -> Self {
        let phrase = scramble_phrase(rng);
        Self::new(phrase, mode, rng)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn guess(&mut self, input: &str) -> ScrambleOutcome {
        let guess = normalize(input);

        if guess.chars().count() <= 1 {
            return ScrambleOutcome::Ignored;
        }

        if guess == self.word {
            return ScrambleOutcome::Won { word: self.word.clone(), guesses: self.guesses + 1 };
        }

        if self.guessed.contains(&guess) {
            return ScrambleOutcome::Rejected(ErrorCategory::AlreadyGuessed);
        }

        if self.guesses + 1 >= MAX_SCRAMBLE_GUESSES {
            return ScrambleOutcome::Lost { word: self.word.clone() };
        }

        self.guessed.push(guess);
        self.guesses += 1;

        ScrambleOutcome::Wrong { attempts_left: MAX_SCRAMBLE_GUESSES - self.guesses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_letters(text: &str) -> Vec<char> {
        let mut letters: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn parses_difficulties_and_quit() {
        assert_eq!(ScrambleParam::parse(None), Ok(ScrambleParam::Start(ScrambleMode::Normal)));
        assert_eq!(ScrambleParam::parse(Some("e")), Ok(ScrambleParam::Start(ScrambleMode::Normal)));
        assert_eq!(ScrambleParam::parse(Some("hard")), Ok(ScrambleParam::Start(ScrambleMode::Expert)));
        assert_eq!(ScrambleParam::parse(Some("q")), Ok(ScrambleParam::Quit));
        assert_eq!(ScrambleParam::parse(Some("medium")), Err(ErrorCategory::InvalidInput));
    }

    #[test]
    fn normal_mode_keeps_word_boundaries() {
        let mut rng = StdRng::seed_from_u64(7);
        let scrambled = scramble_text("piece of cake", ScrambleMode::Normal, &mut rng);

        let original: Vec<&str> = "piece of cake".split(' ').collect();
        let shuffled: Vec<&str> = scrambled.split(' ').collect();
        assert_eq!(original.len(), shuffled.len());

        for (a, b) in original.iter().zip(&shuffled) {
            assert_eq!(sorted_letters(a), sorted_letters(b));
        }
        assert_ne!(scrambled, "piece of cake");
    }

    #[test]
    fn expert_mode_shuffles_the_whole_phrase() {
        let mut rng = StdRng::seed_from_u64(11);
        let scrambled = scramble_text("break a leg", ScrambleMode::Expert, &mut rng);

        assert!(!scrambled.contains(' '));
        assert_eq!(sorted_letters(&scrambled), sorted_letters("break a leg"));
        assert_ne!(scrambled, "breakaleg");
    }

    #[test]
    fn unshufflable_phrase_still_terminates() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(scramble_text("aaa", ScrambleMode::Normal, &mut rng), "aaa");
    }

    #[test]
    fn wrong_guesses_count_up_and_fail_at_the_limit() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = ScrambleGame::new("computer", ScrambleMode::Normal, &mut rng);

        for attempt in 1..MAX_SCRAMBLE_GUESSES {
            let outcome = game.guess(&format!("wrong{attempt}"));
            assert_eq!(outcome, ScrambleOutcome::Wrong { attempts_left: MAX_SCRAMBLE_GUESSES - attempt });
            assert_eq!(game.guesses(), attempt);
        }

        assert_eq!(game.guess("final"), ScrambleOutcome::Lost { word: "computer".to_string() });
    }

    #[test]
    fn duplicates_and_chatter_do_not_count() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = ScrambleGame::new("ice cream", ScrambleMode::Expert, &mut rng);

        game.guess("nice dream");
        assert_eq!(game.guess("Nice  Dream"), ScrambleOutcome::Rejected(ErrorCategory::AlreadyGuessed));
        assert_eq!(game.guess("k"), ScrambleOutcome::Ignored);
        assert_eq!(game.guesses(), 1);

        assert_eq!(game.guess("ICE CREAM"), ScrambleOutcome::Won { word: "ice cream".to_string(), guesses: 2 });
    }
}
