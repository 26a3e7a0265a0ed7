use std::fmt::{Display, Formatter};
use serenity::all::CreateEmbed;

pub const ERROR_COLOR: u32 = 0xEC4545;

/// The kinds of bad input a command can reject. Each command words these its own way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    AlreadyGuessed,
    InvalidInput,
    NotALetter,
    TooManyParameters,
    NotEnoughParameters
}

impl ErrorCategory {
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCategory::AlreadyGuessed => "You already guessed that.",
            ErrorCategory::InvalidInput => "The input was invalid.",
            ErrorCategory::NotALetter => "You can only guess letters.",
            ErrorCategory::TooManyParameters => "You gave too many parameters.",
            ErrorCategory::NotEnoughParameters => "You didn't give enough parameters."
        }
    }
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::AlreadyGuessed => "Already Guessed",
            ErrorCategory::InvalidInput => "Invalid Input",
            ErrorCategory::NotALetter => "Not A Letter",
            ErrorCategory::TooManyParameters => "Too Many Parameters",
            ErrorCategory::NotEnoughParameters => "Not Enough Parameters"
        };

        write!(f, "{name}")
    }
}

/// Per-command wording for each error category.
pub struct CommandErrors {
    messages: &'static [(ErrorCategory, &'static str)]
}

impl CommandErrors {
    pub const fn new(messages: &'static [(ErrorCategory, &'static str)]) -> Self {
        Self { messages }
    }

    pub fn message(&self, category: ErrorCategory) -> &'static str {
        self.messages.iter()
            .find(|(c, _)| *c == category)
            .map(|(_, message)| *message)
            .unwrap_or_else(|| category.default_message())
    }

    pub fn embed(&self, category: ErrorCategory) -> CreateEmbed {
        error_embed(self.message(category))
    }
}

pub fn error_embed(message: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title("Error")
        .description(message)
        .colour(ERROR_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERRORS: CommandErrors = CommandErrors::new(&[
        (ErrorCategory::AlreadyGuessed, "You already guessed that letter.")
    ]);

    #[test]
    fn command_specific_message_wins() {
        assert_eq!(ERRORS.message(ErrorCategory::AlreadyGuessed), "You already guessed that letter.");
    }

    #[test]
    fn falls_back_to_category_default() {
        assert_eq!(ERRORS.message(ErrorCategory::InvalidInput), ErrorCategory::InvalidInput.default_message());
    }
}
