use rand::seq::SliceRandom;
use rand::Rng;

const EASY_WORDS: &[&str] = &[
    "cat", "dog", "sun", "tree", "book", "fish", "milk", "rain", "star", "frog",
    "bird", "cake", "lamp", "ship", "moon", "rock", "sand", "door", "hat", "bell",
];

const MEDIUM_WORDS: &[&str] = &[
    "planet", "garden", "rabbit", "castle", "pencil", "bridge", "winter", "monkey",
    "orange", "candle", "forest", "guitar", "island", "jacket", "kitten", "ladder",
    "market", "pirate", "rocket", "saddle",
];

const HARD_WORDS: &[&str] = &[
    "rhythm", "syzygy", "quixotic", "zephyr", "jukebox", "oxygen", "mnemonic",
    "awkward", "bagpipes", "buzzwords", "crypt", "fjord", "galvanize", "ivory",
    "kiosk", "lymph", "microwave", "nightclub", "pneumonia", "wristwatch",
];

const SCRAMBLE_PHRASES: &[&str] = &[
    "computer", "keyboard", "elephant", "mountain", "umbrella", "sandwich",
    "basketball", "dinosaur", "telescope", "waterfall", "hello world",
    "ice cream", "rock and roll", "better late than never", "piece of cake",
    "break a leg", "hot chocolate", "under the weather", "once in a blue moon",
    "time flies",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTier {
    Easy,
    Medium,
    Hard
}

impl WordTier {
    fn words(self) -> &'static [&'static str] {
        match self {
            WordTier::Easy => EASY_WORDS,
            WordTier::Medium => MEDIUM_WORDS,
            WordTier::Hard => HARD_WORDS
        }
    }
}

pub fn hangman_word<R: Rng + ?Sized>(tier: WordTier, rng: &mut R) -> &'static str {
    // The lists are constant and non-empty.
    tier.words().choose(rng).copied().unwrap_or("cow")
}

pub fn scramble_phrase<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SCRAMBLE_PHRASES.choose(rng).copied().unwrap_or("computer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_lists_are_lowercase_letters() {
        for word in EASY_WORDS.iter().chain(MEDIUM_WORDS).chain(HARD_WORDS) {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
        }

        for phrase in SCRAMBLE_PHRASES {
            assert!(phrase.chars().all(|c| c.is_ascii_lowercase() || c == ' '), "{phrase}");
        }
    }
}
