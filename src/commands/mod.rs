pub mod games;
pub mod info;
pub mod cases;
pub mod help;

use poise::{CreateReply, FrameworkError};
use tracing::error;

use crate::{Data, Error};
use crate::util::errors::error_embed;

async fn on_error(error: FrameworkError<'_, Data, Error>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            error!("Command {} failed: {}", ctx.command().name, error);
            if let Err(ex) = ctx.send(CreateReply::default().embed(error_embed("Something went wrong running that command."))).await {
                error!("Failed to send error message: {}", ex);
            }
        }
        FrameworkError::GuildOnly { ctx, .. } => {
            if let Err(ex) = ctx.send(CreateReply::default().embed(error_embed("This command can only be run in guilds."))).await {
                error!("Failed to send guild-only message: {}", ex);
            }
        }
        FrameworkError::MissingUserPermissions { ctx, .. } => {
            if let Err(ex) = ctx.send(CreateReply::default().embed(error_embed("You need to have `Manage Server` permissions to run this."))).await {
                error!("Failed to send permissions message: {}", ex);
            }
        }
        other => {
            if let Err(ex) = poise::builtins::on_error(other).await {
                error!("Failed to handle framework error: {}", ex);
            }
        }
    }
}

pub fn get_framework() -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: vec![
            help::help(),
            games::hangman(),
            games::rps(),
            games::scramble(),
            info::botinfo(),
            info::support(),
            info::website(),
            info::botsite(),
            info::source(),
            info::invite(),
            info::ping(),
            info::uptime(),
            info::prefix(),
            info::prefixes(),
            info::tasks(),
            info::update(),
            info::pendingupdate(),
            cases::suggest(),
            cases::bug(),
            cases::mysuggestions(),
            cases::mybugs(),
            cases::case(),
            cases::seen()
        ],
        prefix_options: poise::PrefixFrameworkOptions {
            dynamic_prefix: Some(|ctx| Box::pin(async move {
                Ok(Some(ctx.data.prefixes.get(ctx.guild_id).await))
            })),
            mention_as_prefix: true,
            case_insensitive_commands: true,
            ..Default::default()
        },
        event_handler: |ctx, event, framework, data| {
            Box::pin(crate::services::message_handler::event_handler(ctx, event, framework, data))
        },
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}
