use std::collections::HashSet;
use rand::Rng;
use crate::games::words::{hangman_word, WordTier};
use crate::util::errors::ErrorCategory;
use crate::util::params::match_alias;

pub const MAX_HANGMAN_FAILS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanParam {
    Start(WordTier),
    Quit
}

const ACCEPTED: &[(HangmanParam, &[&str])] = &[
    (HangmanParam::Start(WordTier::Easy), &["easy", "simple", "e"]),
    (HangmanParam::Start(WordTier::Medium), &["medium", "m"]),
    (HangmanParam::Start(WordTier::Hard), &["hard", "difficult", "h"]),
    (HangmanParam::Quit, &["quit", "q", "exit"])
];

impl HangmanParam {
    /// No difficulty means an easy game.
    pub fn parse(input: Option<&str>) -> Result<Self, ErrorCategory> {
        match input.map(str::trim).filter(|o| !o.is_empty()) {
            None => Ok(HangmanParam::Start(WordTier::Easy)),
            Some(difficulty) => match_alias(difficulty, ACCEPTED).ok_or(ErrorCategory::InvalidInput)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not meant as a guess, so the player can keep chatting.
    Ignored,
    Rejected(ErrorCategory),
    Continue,
    Won { word: String, guesses: u32 },
    Lost { word: String, fails: u32 }
}

impl GuessOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, GuessOutcome::Won { .. } | GuessOutcome::Lost { .. })
    }
}

#[derive(Debug, Clone)]
pub struct HangmanGame {
    word: String,
    guesses: u32,
    fails: u32,
    guessed: Vec<char>,
    found: HashSet<char>
}

impl HangmanGame {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_lowercase(),
            guesses: 0,
            fails: 0,
            guessed: Vec::new(),
            found: HashSet::new()
        }
    }

    pub fn random<R: Rng + ?Sized>(tier: WordTier, rng: &mut R) -> Self {
        Self::new(hangman_word(tier, rng))
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn fails(&self) -> u32 {
        self.fails
    }

    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let guess = input.trim().to_lowercase();

        if guess == self.word {
            return GuessOutcome::Won { word: self.word.clone(), guesses: self.guesses + 1 };
        }

        let mut chars = guess.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return GuessOutcome::Ignored
        };

        if !letter.is_alphabetic() {
            return GuessOutcome::Rejected(ErrorCategory::NotALetter);
        }

        if self.guessed.contains(&letter) {
            return GuessOutcome::Rejected(ErrorCategory::AlreadyGuessed);
        }

        if self.word.contains(letter) {
            self.found.insert(letter);
        } else {
            self.fails += 1;
        }

        self.guessed.push(letter);
        self.guesses += 1;

        if self.fails >= MAX_HANGMAN_FAILS {
            return GuessOutcome::Lost { word: self.word.clone(), fails: self.fails };
        }

        if self.is_solved() {
            return GuessOutcome::Won { word: self.word.clone(), guesses: self.guesses };
        }

        GuessOutcome::Continue
    }

    fn is_solved(&self) -> bool {
        self.word.chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.found.contains(&c))
    }

    /// The word with every letter not found yet blanked out.
    pub fn masked_word(&self) -> String {
        let masked = self.word.chars()
            .map(|c| {
                if !c.is_alphabetic() || self.found.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        format!("`{masked}`")
    }

    pub fn guessed_list(&self) -> String {
        if self.guessed.is_empty() {
            return "None".to_string();
        }

        self.guessed.iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn gallows(fails: u32) -> String {
    let part = |stage: u32, drawn: &'static str| if fails >= stage { drawn } else { " " };
    let head = if fails >= MAX_HANGMAN_FAILS { "X" } else { part(1, "O") };

    format!(
        "```\n  +---+\n  |   |\n  {}   |\n {}{}{}  |\n {} {}  |\n      |\n=========\n```",
        head,
        part(3, "/"), part(2, "|"), part(4, "\\"),
        part(5, "/"), part(6, "\\")
    )
}
