use std::fmt::{Display, Formatter};
use rand::seq::SliceRandom;
use rand::Rng;
use crate::util::params::match_alias;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Rock,
    Paper,
    Scissors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    Win,
    Loss
}

const ACTIONS: [Action; 3] = [Action::Rock, Action::Paper, Action::Scissors];

const ACCEPTED: &[(Action, &[&str])] = &[
    (Action::Rock, &["rock", "r"]),
    (Action::Paper, &["paper", "p"]),
    (Action::Scissors, &["scissors", "s"])
];

impl Action {
    pub fn parse(input: &str) -> Option<Self> {
        match_alias(input, ACCEPTED)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *ACTIONS.choose(rng).unwrap_or(&Action::Rock)
    }

    pub fn beats(self, other: Action) -> bool {
        matches!(
            (self, other),
            (Action::Rock, Action::Scissors) | (Action::Paper, Action::Rock) | (Action::Scissors, Action::Paper)
        )
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Rock => write!(f, "rock"),
            Action::Paper => write!(f, "paper"),
            Action::Scissors => write!(f, "scissors")
        }
    }
}

/// The result from the user's point of view.
pub fn resolve(user: Action, bot: Action) -> Outcome {
    if user == bot {
        Outcome::Tie
    } else if user.beats(bot) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!(Action::parse("r"), Some(Action::Rock));
        assert_eq!(Action::parse("Paper"), Some(Action::Paper));
        assert_eq!(Action::parse("s"), Some(Action::Scissors));
        assert_eq!(Action::parse("lizard"), None);
    }

    #[test]
    fn rule_table() {
        assert_eq!(resolve(Action::Paper, Action::Rock), Outcome::Win);
        assert_eq!(resolve(Action::Scissors, Action::Paper), Outcome::Win);
        assert_eq!(resolve(Action::Rock, Action::Scissors), Outcome::Win);
        assert_eq!(resolve(Action::Rock, Action::Paper), Outcome::Loss);
        assert_eq!(resolve(Action::Scissors, Action::Scissors), Outcome::Tie);
    }

    #[test]
    fn swapping_players_inverts_the_result() {
        for user in ACTIONS {
            for bot in ACTIONS {
                let swapped = match resolve(user, bot) {
                    Outcome::Win => Outcome::Loss,
                    Outcome::Loss => Outcome::Win,
                    Outcome::Tie => Outcome::Tie
                };

                assert_eq!(resolve(bot, user), swapped, "{user} vs {bot}");
            }
        }
    }
}
