use rand::Rng;
use serenity::all::CreateEmbed;
use poise::CreateReply;

use crate::{OmegaContext, Error};
use crate::commands::games::{game_embed, EMBED_COLOR, FAILED_ICON, SUCCESS_ICON};
use crate::games::rps::{resolve, Action, Outcome};
use crate::util::errors::{CommandErrors, ErrorCategory};
use crate::util::params::split_parameters;

pub const RPS_ERRORS: CommandErrors = CommandErrors::new(&[
    (ErrorCategory::InvalidInput, "That isn't an action. Try `rock`, `paper` or `scissors`."),
    (ErrorCategory::NotEnoughParameters, "You need to type in the action you want to do."),
    (ErrorCategory::TooManyParameters, "You only need to type in the action you want to do.")
]);

#[poise::command(
    prefix_command,
    slash_command,
    category = "Games",
    aliases("rockPaperScissors"),
    description_localized("en-US", "Play rock paper scissors against the bot.")
)]
pub async fn rps(
    ctx: OmegaContext<'_>,
    #[description = "rock, paper or scissors"]
    #[rest] action: Option<String>
) -> Result<(), Error> {
    let embed = play_rps(action.as_deref(), &mut rand::thread_rng());

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

pub fn play_rps<R: Rng + ?Sized>(parameters: Option<&str>, rng: &mut R) -> CreateEmbed {
    let parameters = split_parameters(parameters);
    let action = match parameters.as_slice() {
        [] => return RPS_ERRORS.embed(ErrorCategory::NotEnoughParameters),
        [action] => *action,
        _ => return RPS_ERRORS.embed(ErrorCategory::TooManyParameters)
    };

    let Some(user) = Action::parse(action) else {
        return RPS_ERRORS.embed(ErrorCategory::InvalidInput);
    };
    let bot = Action::random(rng);

    let description = format!("You had {user} and I had {bot}.");
    match resolve(user, bot) {
        // Ties have no icon of their own.
        Outcome::Tie => CreateEmbed::new()
            .title("Tied!")
            .description("You and I both tied.")
            .colour(EMBED_COLOR),
        Outcome::Win => game_embed("You Won!", description, SUCCESS_ICON),
        Outcome::Loss => game_embed("You Lost!", description, FAILED_ICON)
    }
}
