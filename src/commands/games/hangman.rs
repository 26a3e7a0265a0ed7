use serenity::all::{CreateEmbed, UserId};
use poise::CreateReply;
use tokio::sync::Mutex;

use crate::{OmegaContext, Error};
use crate::commands::games::{game_embed, no_game_embed, plural, quit_embed, FAILED_ICON, HANGMAN_ICON, SUCCESS_ICON};
use crate::games::hangman::{gallows, GuessOutcome, HangmanGame, HangmanParam, MAX_HANGMAN_FAILS};
use crate::games::table::{GameTable, ServerKey};
use crate::util::errors::{CommandErrors, ErrorCategory};
use crate::util::params::split_parameters;

pub const HANGMAN_ERRORS: CommandErrors = CommandErrors::new(&[
    (ErrorCategory::AlreadyGuessed, "You already guessed that letter."),
    (ErrorCategory::InvalidInput, "That isn't a difficulty. Try `easy`, `medium`, `hard` or `quit`."),
    (ErrorCategory::NotALetter, "You can only guess letters in hangman."),
    (ErrorCategory::TooManyParameters, "In order to play a game of hangman, you only need the difficulty.")
]);

#[poise::command(
    prefix_command,
    slash_command,
    category = "Games",
    aliases("playHangman"),
    description_localized("en-US", "Play hangman. Guess letters by sending them as messages.")
)]
pub async fn hangman(
    ctx: OmegaContext<'_>,
    #[description = "easy, medium, hard or quit"]
    #[rest] difficulty: Option<String>
) -> Result<(), Error> {
    let embed = start_hangman(&ctx.data().hangman, ServerKey::from(ctx.guild_id()), ctx.author().id, difficulty.as_deref()).await;

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Starts (or replaces) a player's game, or quits it.
pub async fn start_hangman(games: &Mutex<GameTable<HangmanGame>>, server: ServerKey, user: UserId, parameters: Option<&str>) -> CreateEmbed {
    let parameters = split_parameters(parameters);
    if parameters.len() > 1 {
        return HANGMAN_ERRORS.embed(ErrorCategory::TooManyParameters);
    }

    let param = match HangmanParam::parse(parameters.first().copied()) {
        Ok(param) => param,
        Err(category) => return HANGMAN_ERRORS.embed(category)
    };

    let mut games = games.lock().await;
    match param {
        HangmanParam::Quit => match games.remove(server, user) {
            Some(_) => quit_embed("Hangman"),
            None => no_game_embed("Hangman")
        },
        HangmanParam::Start(tier) => {
            let game = games.insert(server, user, HangmanGame::random(tier, &mut rand::thread_rng()));
            board_embed(game)
        }
    }
}

/// Feeds a chat message to the player's running game. `None` means nothing should be sent.
pub async fn guess_hangman(games: &Mutex<GameTable<HangmanGame>>, server: ServerKey, user: UserId, content: &str) -> Option<CreateEmbed> {
    let mut games = games.lock().await;
    let game = games.get_mut(server, user)?;

    let outcome = game.guess(content);
    let embed = match &outcome {
        GuessOutcome::Ignored => None,
        GuessOutcome::Rejected(category) => Some(HANGMAN_ERRORS.embed(*category)),
        GuessOutcome::Continue => Some(board_embed(game)),
        GuessOutcome::Won { word, guesses } => Some(game_embed(
            "You won!",
            format!("The word was `{}`.\nYou got it in {}.", word, plural(*guesses, "guess", "guesses")),
            SUCCESS_ICON
        )),
        GuessOutcome::Lost { word, fails } => Some(game_embed(
            "You lost!",
            format!("{}\nThe word was `{}`.", gallows(*fails), word),
            FAILED_ICON
        ))
    };

    if outcome.is_finished() {
        games.remove(server, user);
    }

    embed
}

fn board_embed(game: &HangmanGame) -> CreateEmbed {
    game_embed(
        "Hangman",
        format!("{}\n{}", gallows(game.fails()), game.masked_word()),
        HANGMAN_ICON
    )
        .field("Guessed", game.guessed_list(), true)
        .field("Fails", format!("{} / {}", game.fails(), MAX_HANGMAN_FAILS), true)
}
