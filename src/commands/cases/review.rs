use poise::CreateReply;
use serenity::all::CreateEmbed;
use tracing::{error, info};

use crate::{OmegaContext, Error};
use crate::commands::cases::{case_embed, CaseChoice, CASE_COLOR};
use crate::models::case_models::CaseKind;
use crate::util::errors::error_embed;

pub fn is_developer_id(developers: &[u64], user: u64) -> bool {
    developers.contains(&user)
}

pub(crate) async fn is_developer(ctx: OmegaContext<'_>) -> Result<bool, Error> {
    let allowed = is_developer_id(&ctx.data().config.developers, ctx.author().id.get());

    if !allowed {
        ctx.send(CreateReply::default()
            .embed(error_embed("Only my developers can run this."))
            .ephemeral(true)
        ).await?;
    }

    Ok(allowed)
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Cases",
    check = "is_developer",
    hide_in_help,
    description_localized("en-US", "Shows a bug or suggestion.")
)]
pub async fn case(
    ctx: OmegaContext<'_>,
    #[description = "bug or suggestion"] kind: CaseChoice,
    #[description = "The case number"] number: u64
) -> Result<(), Error> {
    let kind = CaseKind::from(kind);

    let embed = match ctx.data().cases.get_case(kind, number).await {
        Ok(Some(case)) => case_embed(kind, number, &case),
        Ok(None) => error_embed(format!("There is no {} #{}.", kind.title().to_lowercase(), number)),
        Err(ex) => {
            error!("Failed to get {} #{}: {}", kind.title(), number, ex);
            error_embed("We couldn't look that up right now, try again later?")
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Cases",
    check = "is_developer",
    hide_in_help,
    description_localized("en-US", "Marks a bug or suggestion as seen.")
)]
pub async fn seen(
    ctx: OmegaContext<'_>,
    #[description = "bug or suggestion"] kind: CaseChoice,
    #[description = "The case number"] number: u64
) -> Result<(), Error> {
    let kind = CaseKind::from(kind);
    let developer = ctx.author().id;

    let embed = match ctx.data().cases.mark_seen(kind, number, developer.to_string()).await {
        Ok(true) => {
            info!("{} #{} marked as seen by {}", kind.title(), number, developer);
            CreateEmbed::new()
                .title(format!("{} #{} Seen", kind.title(), number))
                .description(format!("Marked as seen by <@{}>.", developer))
                .colour(CASE_COLOR)
        }
        Ok(false) => error_embed(format!("There is no {} #{}.", kind.title().to_lowercase(), number)),
        Err(ex) => {
            error!("Failed to mark {} #{} as seen: {}", kind.title(), number, ex);
            error_embed("We couldn't update that right now, try again later?")
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
