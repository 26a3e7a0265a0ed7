pub mod submit;
pub mod mine;
pub mod review;

pub use submit::*;
pub use mine::*;
pub use review::*;

use serenity::all::{ChannelId, CreateEmbed, CreateMessage, Timestamp};
use tracing::error;

use crate::OmegaContext;
use crate::models::case_models::{CaseKind, CaseRecord};

pub const CASE_COLOR: u32 = 0x00AAFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum CaseChoice {
    #[name = "bug"]
    Bug,
    #[name = "suggestion"]
    Suggestion
}

impl From<CaseChoice> for CaseKind {
    fn from(choice: CaseChoice) -> Self {
        match choice {
            CaseChoice::Bug => CaseKind::Bugs,
            CaseChoice::Suggestion => CaseKind::Suggestions
        }
    }
}

pub fn seen_text(case: &CaseRecord) -> String {
    match &case.seen {
        Some(developer) => format!("Yes, by <@{}>", developer),
        None => "No".to_string()
    }
}

pub fn case_embed(kind: CaseKind, number: u64, case: &CaseRecord) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("{} #{}", kind.title(), number))
        .description(case.description.clone())
        .colour(CASE_COLOR)
        .field("User", format!("<@{}>", case.author), true)
        .field("Seen", seen_text(case), true);

    if let Some(source) = &case.source {
        embed = embed
            .field("Source Type", source.source_type.label(), true)
            .field("Source", source.source.clone(), true);
    }

    if let Ok(timestamp) = Timestamp::from_unix_timestamp(case.time.timestamp()) {
        embed = embed.timestamp(timestamp);
    }

    embed
}

/// Posts a new case to the channel developers watch, if one is configured.
pub async fn announce_case(ctx: OmegaContext<'_>, channel: Option<u64>, embed: CreateEmbed) {
    let Some(channel) = channel.filter(|o| *o != 0) else {
        return;
    };

    if let Err(ex) = ChannelId::new(channel).send_message(ctx.serenity_context(), CreateMessage::new().embed(embed)).await {
        error!("Failed to post case to channel {}: {}", channel, ex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::commands::games::embed_json;
    use crate::models::case_models::{BugSource, SourceType};

    fn record(seen: Option<&str>, source: Option<BugSource>) -> CaseRecord {
        CaseRecord {
            description: "The board never updates".to_string(),
            author: "123".to_string(),
            time: Utc::now(),
            seen: seen.map(str::to_string),
            source
        }
    }

    #[test]
    fn choices_map_to_collections() {
        assert_eq!(CaseKind::from(CaseChoice::Bug), CaseKind::Bugs);
        assert_eq!(CaseKind::from(CaseChoice::Suggestion), CaseKind::Suggestions);
    }

    #[test]
    fn seen_names_the_developer() {
        assert_eq!(seen_text(&record(None, None)), "No");
        assert_eq!(seen_text(&record(Some("9"), None)), "Yes, by <@9>");
    }

    #[test]
    fn bug_embeds_include_the_source() {
        let source = BugSource { source_type: SourceType::Bot, source: "hangman".to_string() };
        let embed = embed_json(&case_embed(CaseKind::Bugs, 4, &record(None, Some(source))));

        assert_eq!(embed["title"], "Bug #4");
        assert_eq!(embed["fields"].as_array().unwrap().len(), 4);
        assert_eq!(embed["fields"][2]["value"], "bot");
    }

    #[test]
    fn suggestion_embeds_skip_the_source() {
        let embed = embed_json(&case_embed(CaseKind::Suggestions, 1, &record(None, None)));

        assert_eq!(embed["title"], "Suggestion #1");
        assert_eq!(embed["fields"].as_array().unwrap().len(), 2);
    }
}
