use poise::CreateReply;
use serenity::all::CreateEmbed;
use tracing::error;

use crate::{OmegaContext, Error};
use crate::commands::info::INFO_COLOR;
use crate::util::errors::error_embed;

pub const MAX_PREFIX_LENGTH: usize = 10;

pub fn validate_prefix(prefix: &str) -> Result<&str, &'static str> {
    let prefix = prefix.trim();

    if prefix.is_empty() {
        Err("The prefix can't be empty.")
    } else if prefix.chars().any(char::is_whitespace) {
        Err("The prefix can't contain spaces.")
    } else if prefix.chars().count() > MAX_PREFIX_LENGTH {
        Err("The prefix can be at most 10 characters long.")
    } else {
        Ok(prefix)
    }
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Info",
    guild_only,
    required_permissions = "MANAGE_GUILD",
    aliases("pre"),
    description_localized("en-US", "Allows you to change the prefix for this server.")
)]
pub async fn prefix(
    ctx: OmegaContext<'_>,
    #[description = "The new prefix"] prefix: String
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let embed = match validate_prefix(&prefix) {
        Err(message) => error_embed(message),
        Ok(prefix) => match ctx.data().prefixes.set(guild_id, prefix).await {
            Ok(()) => CreateEmbed::new()
                .title("Prefix Changed")
                .description(format!("This server's prefix is now `{}`", prefix))
                .colour(INFO_COLOR),
            Err(ex) => {
                error!("Failed to set prefix for server {}: {}", guild_id, ex);
                error_embed("Failed to save the new prefix, try again later?")
            }
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Info",
    description_localized("en-US", "Shows the prefix you can use here.")
)]
pub async fn prefixes(ctx: OmegaContext<'_>) -> Result<(), Error> {
    let prefix = ctx.data().prefixes.get(ctx.guild_id()).await;

    ctx.send(CreateReply::default().embed(CreateEmbed::new()
        .title("Prefixes")
        .description(format!("You can use `{}` or mention me to run commands here.", prefix))
        .colour(INFO_COLOR)
    )).await?;
    Ok(())
}
