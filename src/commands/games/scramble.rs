use serenity::all::{CreateEmbed, UserId};
use poise::CreateReply;
use tokio::sync::Mutex;

use crate::{OmegaContext, Error};
use crate::commands::games::{game_embed, no_game_embed, plural, quit_embed, FAILED_ICON, SCRAMBLE_ICON, SUCCESS_ICON};
use crate::games::scramble::{ScrambleGame, ScrambleOutcome, ScrambleParam, MAX_SCRAMBLE_GUESSES};
use crate::games::table::{GameTable, ServerKey};
use crate::util::errors::{CommandErrors, ErrorCategory};
use crate::util::params::split_parameters;

pub const SCRAMBLE_ERRORS: CommandErrors = CommandErrors::new(&[
    (ErrorCategory::AlreadyGuessed, "You already guessed that word."),
    (ErrorCategory::InvalidInput, "That isn't a difficulty. Try `normal`, `expert` or `quit`."),
    (ErrorCategory::TooManyParameters, "To guess a scrambled word, you only need the difficulty.")
]);

#[poise::command(
    prefix_command,
    slash_command,
    category = "Games",
    aliases("playScramble", "scrambled"),
    description_localized("en-US", "Unscramble a word or phrase. Send your guesses as messages.")
)]
pub async fn scramble(
    ctx: OmegaContext<'_>,
    #[description = "normal, expert or quit"]
    #[rest] difficulty: Option<String>
) -> Result<(), Error> {
    let embed = start_scramble(&ctx.data().scramble, ServerKey::from(ctx.guild_id()), ctx.author().id, difficulty.as_deref()).await;

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

pub async fn start_scramble(games: &Mutex<GameTable<ScrambleGame>>, server: ServerKey, user: UserId, parameters: Option<&str>) -> CreateEmbed {
    let parameters = split_parameters(parameters);
    if parameters.len() > 1 {
        return SCRAMBLE_ERRORS.embed(ErrorCategory::TooManyParameters);
    }

    let param = match ScrambleParam::parse(parameters.first().copied()) {
        Ok(param) => param,
        Err(category) => return SCRAMBLE_ERRORS.embed(category)
    };

    let mut games = games.lock().await;
    match param {
        ScrambleParam::Quit => match games.remove(server, user) {
            Some(game) => quit_embed("Scramble")
                .field("Answer", game.word().to_string(), false),
            None => no_game_embed("Scramble")
        },
        ScrambleParam::Start(mode) => {
            let game = games.insert(server, user, ScrambleGame::random(mode, &mut rand::thread_rng()));
            game_embed(
                "Scramble",
                format!("Unscramble this: `{}`", game.scrambled()),
                SCRAMBLE_ICON
            )
                .field("Guesses", MAX_SCRAMBLE_GUESSES.to_string(), true)
        }
    }
}

/// Feeds a chat message to the player's running game. `None` means nothing should be sent.
pub async fn guess_scramble(games: &Mutex<GameTable<ScrambleGame>>, server: ServerKey, user: UserId, content: &str) -> Option<CreateEmbed> {
    let mut games = games.lock().await;
    let game = games.get_mut(server, user)?;

    let outcome = game.guess(content);
    let embed = match &outcome {
        ScrambleOutcome::Ignored => None,
        ScrambleOutcome::Rejected(category) => Some(SCRAMBLE_ERRORS.embed(*category)),
        ScrambleOutcome::Wrong { attempts_left } => Some(game_embed(
            "Wrong!",
            format!("Unscramble this: `{}`\nYou have {} left.", game.scrambled(), plural(*attempts_left, "guess", "guesses")),
            SCRAMBLE_ICON
        )),
        ScrambleOutcome::Won { word, guesses } => Some(game_embed(
            "You got it!",
            format!("The answer was `{}`.\nIt took you {}.", word, plural(*guesses, "guess", "guesses")),
            SUCCESS_ICON
        )),
        ScrambleOutcome::Lost { word } => Some(game_embed(
            "Out of guesses!",
            format!("The answer was `{}`.", word),
            FAILED_ICON
        ))
    };

    if outcome.is_finished() {
        games.remove(server, user);
    }

    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::games::embed_json;
    use crate::games::scramble::ScrambleMode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player() -> UserId {
        UserId::new(20)
    }

    async fn table_with(phrase: &str) -> Mutex<GameTable<ScrambleGame>> {
        let games = Mutex::new(GameTable::default());
        let game = ScrambleGame::new(phrase, ScrambleMode::Normal, &mut StdRng::seed_from_u64(3));
        games.lock().await.insert(ServerKey::Private, player(), game);
        games
    }

    #[tokio::test]
    async fn unknown_difficulty_is_invalid_input() {
        let games = Mutex::new(GameTable::default());
        let embed = embed_json(&start_scramble(&games, ServerKey::Private, player(), Some("impossible")).await);

        assert_eq!(embed["title"], "Error");
        assert!(!games.lock().await.contains(ServerKey::Private, player()));
    }

    #[tokio::test]
    async fn too_many_parameters_uses_scramble_wording() {
        let games = Mutex::new(GameTable::default());
        let embed = embed_json(&start_scramble(&games, ServerKey::Private, player(), Some("normal expert")).await);

        assert_eq!(embed["description"], "To guess a scrambled word, you only need the difficulty.");
    }

    #[tokio::test]
    async fn quitting_reveals_the_answer() {
        let games = table_with("computer").await;
        let embed = embed_json(&start_scramble(&games, ServerKey::Private, player(), Some("quit")).await);

        assert_eq!(embed["title"], "Scramble Quit");
        assert_eq!(embed["fields"][0]["value"], "computer");
    }

    #[tokio::test]
    async fn duplicate_guess_is_rejected() {
        let games = table_with("computer").await;
        guess_scramble(&games, ServerKey::Private, player(), "keyboard").await;

        let embed = embed_json(&guess_scramble(&games, ServerKey::Private, player(), "Keyboard").await.unwrap());
        assert_eq!(embed["description"], "You already guessed that word.");
    }

    #[tokio::test]
    async fn correct_guess_wins_and_ends_the_game() {
        let games = table_with("computer").await;
        let embed = embed_json(&guess_scramble(&games, ServerKey::Private, player(), "COMPUTER").await.unwrap());

        assert_eq!(embed["title"], "You got it!");
        assert!(!games.lock().await.contains(ServerKey::Private, player()));
    }

    #[tokio::test]
    async fn running_out_of_guesses_loses() {
        let games = table_with("computer").await;

        let mut last = None;
        for i in 0..MAX_SCRAMBLE_GUESSES {
            last = guess_scramble(&games, ServerKey::Private, player(), &format!("wrong{i}")).await;
        }

        assert_eq!(embed_json(&last.unwrap())["title"], "Out of guesses!");
        assert!(!games.lock().await.contains(ServerKey::Private, player()));
    }
}
