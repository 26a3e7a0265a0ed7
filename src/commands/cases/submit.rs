use poise::CreateReply;
use tracing::error;

use crate::{OmegaContext, Error};
use crate::commands::cases::{announce_case, case_embed};
use crate::models::case_models::{BugSource, CaseKind, SourceType};
use crate::util::errors::error_embed;

async fn file_case(ctx: OmegaContext<'_>, kind: CaseKind, description: String, source: Option<BugSource>) -> Result<(), Error> {
    let author = ctx.author().id.to_string();
    let data = ctx.data();

    let (number, record) = match data.cases.add_case(kind, author, description, source).await {
        Ok(filed) => filed,
        Err(ex) => {
            error!("Failed to file {}: {}", kind.title(), ex);
            ctx.send(CreateReply::default().embed(error_embed("We couldn't save that right now, try again later?"))).await?;
            return Ok(());
        }
    };

    let embed = case_embed(kind, number, &record);

    ctx.send(CreateReply::default()
        .content(format!("Thanks! Your {} was filed as #{}.", kind.title().to_lowercase(), number))
        .embed(embed.clone())
    ).await?;

    let channel = match kind {
        CaseKind::Suggestions => data.config.suggestion_channel,
        CaseKind::Bugs => data.config.bug_channel
    };
    announce_case(ctx, channel, embed).await;

    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Cases",
    aliases("suggestion"),
    description_localized("en-US", "Sends a suggestion to the developers.")
)]
pub async fn suggest(
    ctx: OmegaContext<'_>,
    #[description = "What you would like to see"]
    #[rest] suggestion: Option<String>
) -> Result<(), Error> {
    let Some(suggestion) = suggestion.map(|o| o.trim().to_string()).filter(|o| !o.is_empty()) else {
        ctx.send(CreateReply::default().embed(error_embed("You need to type in the suggestion you want to make."))).await?;
        return Ok(());
    };

    file_case(ctx, CaseKind::Suggestions, suggestion, None).await
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Cases",
    aliases("issue"),
    description_localized("en-US", "Reports a bug in the bot or on the website.")
)]
pub async fn bug(
    ctx: OmegaContext<'_>,
    #[description = "Where the bug happened"] source_type: SourceType,
    #[description = "The command or page with the bug"] source: String,
    #[description = "What went wrong"]
    #[rest] description: String
) -> Result<(), Error> {
    let description = description.trim().to_string();
    if description.is_empty() {
        ctx.send(CreateReply::default().embed(error_embed("You need to describe the bug you found."))).await?;
        return Ok(());
    }

    file_case(ctx, CaseKind::Bugs, description, Some(BugSource { source_type, source })).await
}
