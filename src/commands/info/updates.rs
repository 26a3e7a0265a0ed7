use poise::CreateReply;
use serenity::all::{CreateEmbed, CreateEmbedFooter};
use tracing::error;

use crate::{OmegaContext, Error};
use crate::commands::cases::review::is_developer;
use crate::commands::info::INFO_COLOR;
use crate::models::bot_models::{Change, ChangeType, PendingUpdate, Update, UpdateLog};
use crate::services::bot_notes::Release;
use crate::util::errors::error_embed;
use crate::util::fields::{add_fields, create_fields, FIELD_THRESHOLD};

const MAX_HISTORY: usize = 10;

fn change_lines(changes: &[Change], separator: &str) -> String {
    changes.iter()
        .map(|o| format!("`{}` {} {}", o.change_type.label(), separator, o.feature))
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_update_fields(mut embed: CreateEmbed, update: &Update) -> CreateEmbed {
    let sections = [
        ("Release Date", update.date.format("%B %-d, %Y").to_string()),
        ("Version", update.version.clone()),
        ("Description", update.description.clone()),
        ("Changes", change_lines(&update.features, "|"))
    ];

    for (name, text) in sections {
        embed = add_fields(embed, name, &create_fields(&text, FIELD_THRESHOLD));
    }
    embed
}

pub fn recent_update_embed(log: &UpdateLog) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("Updates")
        .colour(INFO_COLOR);

    match log.recent() {
        Some(update) => add_update_fields(embed.description("Here's the most recent update to Omega Psi."), update),
        None => embed.description("There are no updates yet.")
    }
}

/// Newest first, at most [`MAX_HISTORY`] entries.
pub fn update_history_embed(log: &UpdateLog) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("Updates")
        .colour(INFO_COLOR);

    if log.released.is_empty() {
        return embed.description("There are no updates yet.");
    }

    let mut lines: Vec<String> = log.released.iter()
        .rev()
        .take(MAX_HISTORY)
        .map(|o| format!("**{}** ({}): {}", o.version, o.date.format("%B %-d, %Y"), o.description))
        .collect();
    if log.released.len() > MAX_HISTORY {
        lines.push(format!("...and {} older", log.released.len() - MAX_HISTORY));
    }

    add_fields(
        embed.description("Here's a list of updates to Omega Psi in order of most recent to oldest."),
        "Versions",
        &create_fields(&lines.join("\n"), FIELD_THRESHOLD)
    )
}

pub fn pending_update_embed(pending: Option<&PendingUpdate>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("Pending Update")
        .colour(INFO_COLOR);

    let Some(pending) = pending else {
        return embed.description("No Pending Update Yet");
    };

    if pending.features.is_empty() {
        return embed.field("Changes", "No Changes", false);
    }
    add_fields(embed, "Changes", &create_fields(&change_lines(&pending.features, "-"), FIELD_THRESHOLD))
}

pub fn release_embed(release: &Release) -> CreateEmbed {
    match release {
        Release::Released(update) => add_update_fields(
            CreateEmbed::new()
                .title("Update Released")
                .colour(INFO_COLOR),
            update
        ),
        Release::NothingPending => error_embed("There is no pending update to release."),
        Release::VersionTaken => error_embed("That version was already released.")
    }
}

async fn send_updates(ctx: OmegaContext<'_>, render: fn(&UpdateLog) -> CreateEmbed) -> Result<(), Error> {
    let embed = match ctx.data().notes.get_updates().await {
        Ok(log) => render(&log),
        Err(ex) => {
            error!("Failed to get updates: {}", ex);
            error_embed("We couldn't look that up right now, try again later?")
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Info",
    subcommands("update_recent", "update_all", "update_add", "update_release"),
    description_localized("en-US", "Shows you information about updates to Omega Psi.")
)]
pub async fn update(ctx: OmegaContext<'_>) -> Result<(), Error> {
    send_updates(ctx, recent_update_embed).await
}

#[poise::command(prefix_command, slash_command, rename = "recent", description_localized("en-US", "Shows the most recent update."))]
pub async fn update_recent(ctx: OmegaContext<'_>) -> Result<(), Error> {
    send_updates(ctx, recent_update_embed).await
}

#[poise::command(prefix_command, slash_command, rename = "all", description_localized("en-US", "Shows a list of past updates."))]
pub async fn update_all(ctx: OmegaContext<'_>) -> Result<(), Error> {
    send_updates(ctx, update_history_embed).await
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Info",
    aliases("pendingUpdate", "pending"),
    description_localized("en-US", "Shows you information about the current pending update to Omega Psi.")
)]
pub async fn pendingupdate(ctx: OmegaContext<'_>) -> Result<(), Error> {
    send_updates(ctx, |log| pending_update_embed(log.pending.as_ref())).await
}

#[poise::command(
    prefix_command,
    slash_command,
    rename = "add",
    check = "is_developer",
    description_localized("en-US", "Adds a change to the pending update.")
)]
pub async fn update_add(
    ctx: OmegaContext<'_>,
    #[description = "feature or fix"] change_type: ChangeType,
    #[description = "What changed"]
    #[rest] feature: String
) -> Result<(), Error> {
    let feature = feature.trim().to_string();
    if feature.is_empty() {
        ctx.send(CreateReply::default().embed(error_embed("You need to describe the change."))).await?;
        return Ok(());
    }

    let embed = match ctx.data().notes.add_change(change_type, feature.clone()).await {
        Ok(count) => CreateEmbed::new()
            .title("Change Added")
            .description(format!("`{}` {}", change_type.label(), feature))
            .footer(CreateEmbedFooter::new(format!("{} pending", count)))
            .colour(INFO_COLOR),
        Err(ex) => {
            error!("Failed to add pending change: {}", ex);
            error_embed("We couldn't save that right now, try again later?")
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    rename = "release",
    check = "is_developer",
    description_localized("en-US", "Releases the pending update.")
)]
pub async fn update_release(
    ctx: OmegaContext<'_>,
    #[description = "The new version"] version: String,
    #[description = "What this update is about"]
    #[rest] description: String
) -> Result<(), Error> {
    let embed = match ctx.data().notes.release_update(version.clone(), description.trim().to_string()).await {
        Ok(release) => release_embed(&release),
        Err(ex) => {
            error!("Failed to release update {}: {}", version, ex);
            error_embed("We couldn't save that right now, try again later?")
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::commands::games::embed_json;

    fn change(change_type: ChangeType, feature: &str) -> Change {
        Change { change_type, feature: feature.to_string() }
    }

    fn release(version: &str, day: u32) -> Update {
        Update {
            version: version.to_string(),
            date: Utc.with_ymd_and_hms(2020, 3, day, 0, 0, 0).unwrap(),
            description: format!("release {version}"),
            features: vec![change(ChangeType::Feature, "tasks"), change(ChangeType::Fix, "ping")]
        }
    }

    #[test]
    fn recent_update_lists_its_changes() {
        let log = UpdateLog { pending: None, released: vec![release("1.0", 1), release("1.1", 2)] };
        let embed = embed_json(&recent_update_embed(&log));

        let fields = embed["fields"].as_array().unwrap();
        assert_eq!(fields[0]["value"], "March 2, 2020\n");
        assert_eq!(fields[1]["value"], "1.1\n");
        assert_eq!(fields[3]["value"], "`feature` | tasks\n`fix` | ping\n");
    }

    #[test]
    fn no_releases_yet() {
        let log = UpdateLog::default();

        assert_eq!(embed_json(&recent_update_embed(&log))["description"], "There are no updates yet.");
        assert_eq!(embed_json(&update_history_embed(&log))["description"], "There are no updates yet.");
    }

    #[test]
    fn history_is_newest_first_and_capped() {
        let released: Vec<Update> = (1..=12).map(|o| release(&format!("1.{o}"), o)).collect();
        let log = UpdateLog { pending: None, released };

        let embed = embed_json(&update_history_embed(&log));
        let value = embed["fields"][0]["value"].as_str().unwrap();

        assert!(value.starts_with("**1.12** (March 12, 2020): release 1.12\n"));
        assert!(!value.contains("**1.2**"));
        assert!(value.ends_with("...and 2 older\n"));
    }

    #[test]
    fn pending_update_states() {
        assert_eq!(embed_json(&pending_update_embed(None))["description"], "No Pending Update Yet");

        let empty = embed_json(&pending_update_embed(Some(&PendingUpdate::default())));
        assert_eq!(empty["fields"][0]["value"], "No Changes");

        let pending = PendingUpdate { features: vec![change(ChangeType::Fix, "hangman art")] };
        let embed = embed_json(&pending_update_embed(Some(&pending)));
        assert_eq!(embed["fields"][0]["name"], "Changes");
        assert_eq!(embed["fields"][0]["value"], "`fix` - hangman art\n");
    }

    #[test]
    fn release_failures_are_errors() {
        assert_eq!(embed_json(&release_embed(&Release::NothingPending))["title"], "Error");
        assert_eq!(embed_json(&release_embed(&Release::VersionTaken))["description"], "That version was already released.");
        assert_eq!(embed_json(&release_embed(&Release::Released(release("2.0", 5))))["title"], "Update Released");
    }

    #[test]
    fn only_developers_change_updates() {
        assert_eq!(update_add().checks.len(), 1);
        assert_eq!(update_release().checks.len(), 1);
        assert!(update_all().checks.is_empty());
        assert!(pendingupdate().aliases.iter().any(|o| o == "pending"));
    }
}
