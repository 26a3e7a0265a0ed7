use serenity::all::{Context, CreateMessage, FullEvent, Message, UserId};
use tracing::error;

use crate::{Data, Error};
use crate::commands::games::{guess_hangman, guess_scramble};
use crate::games::table::ServerKey;
use crate::services::bot_init;

pub async fn event_handler(ctx: &Context, event: &FullEvent, framework: poise::FrameworkContext<'_, Data, Error>, data: &Data) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot } => bot_init::ready(ctx, data_about_bot).await,
        FullEvent::Message { new_message } => non_command(ctx, new_message, framework.bot_id, data).await?,
        _ => {}
    }

    Ok(())
}

fn mentions_bot(content: &str, bot_id: UserId) -> bool {
    content.starts_with(&format!("<@{}>", bot_id)) || content.starts_with(&format!("<@!{}>", bot_id))
}

/// Messages that aren't commands are treated as guesses for whatever game the author is playing.
pub async fn non_command(ctx: &Context, msg: &Message, bot_id: UserId, data: &Data) -> Result<(), Error> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.trim();
    if mentions_bot(content, bot_id) || data.prefixes.is_command(msg.guild_id, content).await {
        return Ok(());
    }

    let server = ServerKey::from(msg.guild_id);
    let user = msg.author.id;

    let mut replies = Vec::new();
    if let Some(embed) = guess_hangman(&data.hangman, server, user, content).await {
        replies.push(embed);
    }
    if let Some(embed) = guess_scramble(&data.scramble, server, user, content).await {
        replies.push(embed);
    }

    for embed in replies {
        if let Err(ex) = msg.channel_id.send_message(&ctx.http, CreateMessage::new().embed(embed)).await {
            error!("Failed to send game reply in channel {}: {}", msg.channel_id, ex);
        }
    }

    Ok(())
}
