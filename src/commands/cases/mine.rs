use poise::CreateReply;
use serenity::all::{CreateEmbed, CreateEmbedFooter};
use tracing::error;

use crate::{OmegaContext, Error};
use crate::commands::cases::{seen_text, CASE_COLOR};
use crate::models::case_models::{CaseKind, CaseRecord};
use crate::util::errors::error_embed;

// Discord allows 25 fields per embed.
const MAX_LISTED: usize = 20;
const PREVIEW_LENGTH: usize = 200;

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_LENGTH {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(PREVIEW_LENGTH).collect::<String>())
    }
}

/// Lists the newest cases first, keeping at most `MAX_LISTED` of them.
pub fn cases_embed(kind: CaseKind, cases: &[(u64, CaseRecord)]) -> CreateEmbed {
    let title = format!("Your {}s", kind.title());

    if cases.is_empty() {
        return CreateEmbed::new()
            .title(title)
            .description(format!("You haven't made any {}s yet.", kind.title().to_lowercase()))
            .colour(CASE_COLOR);
    }

    let mut embed = CreateEmbed::new()
        .title(title)
        .colour(CASE_COLOR);

    for (number, case) in cases.iter().rev().take(MAX_LISTED) {
        embed = embed.field(
            format!("#{}", number),
            format!("{}\n**Seen:** {}", preview(&case.description), seen_text(case)),
            false
        );
    }

    if cases.len() > MAX_LISTED {
        embed = embed.footer(CreateEmbedFooter::new(format!("Showing the newest {} of {}", MAX_LISTED, cases.len())));
    }

    embed
}

async fn list_cases(ctx: OmegaContext<'_>, kind: CaseKind) -> Result<(), Error> {
    let embed = match ctx.data().cases.cases_by_author(kind, ctx.author().id.to_string()).await {
        Ok(cases) => cases_embed(kind, &cases),
        Err(ex) => {
            error!("Failed to list {}s for {}: {}", kind.title(), ctx.author().id, ex);
            error_embed("We couldn't look those up right now, try again later?")
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Cases",
    aliases("mySuggestions"),
    description_localized("en-US", "Lists the suggestions you have made.")
)]
pub async fn mysuggestions(ctx: OmegaContext<'_>) -> Result<(), Error> {
    list_cases(ctx, CaseKind::Suggestions).await
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Cases",
    aliases("myBugs"),
    description_localized("en-US", "Lists the bugs you have reported.")
)]
pub async fn mybugs(ctx: OmegaContext<'_>) -> Result<(), Error> {
    list_cases(ctx, CaseKind::Bugs).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::commands::games::embed_json;

    fn record(description: &str) -> CaseRecord {
        CaseRecord {
            description: description.to_string(),
            author: "1".to_string(),
            time: Utc::now(),
            seen: None,
            source: None
        }
    }

    #[test]
    fn no_cases_says_so() {
        let embed = embed_json(&cases_embed(CaseKind::Bugs, &[]));
        assert_eq!(embed["description"], "You haven't made any bugs yet.");
    }

    #[test]
    fn newest_cases_come_first() {
        let cases = vec![(1, record("first")), (3, record("second"))];
        let embed = embed_json(&cases_embed(CaseKind::Suggestions, &cases));

        assert_eq!(embed["title"], "Your Suggestions");
        assert_eq!(embed["fields"][0]["name"], "#3");
        assert_eq!(embed["fields"][1]["name"], "#1");
    }

    #[test]
    fn long_lists_are_capped() {
        let cases: Vec<(u64, CaseRecord)> = (1..=30).map(|o| (o, record(&"x".repeat(500)))).collect();
        let embed = embed_json(&cases_embed(CaseKind::Bugs, &cases));

        assert_eq!(embed["fields"].as_array().unwrap().len(), MAX_LISTED);
        assert_eq!(embed["footer"]["text"], "Showing the newest 20 of 30");
        assert!(embed["fields"][0]["value"].as_str().unwrap().starts_with(&format!("{}...", "x".repeat(PREVIEW_LENGTH))));
    }
}
