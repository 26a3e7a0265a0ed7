use chrono::{DateTime, Duration, TimeZone, Utc};
use poise::CreateReply;
use serenity::all::CreateEmbed;
use tracing::error;

use crate::{OmegaContext, Error};
use crate::commands::info::INFO_COLOR;
use crate::models::bot_models::{ChangeType, UpdateLog};
use crate::util::fields::{add_fields, create_fields, FIELD_THRESHOLD};

/// "2 years, 3 days", "1 day", "5 hours" and so on, at most two units.
pub fn format_age(age: Duration) -> String {
    fn unit(count: i64, name: &str) -> String {
        if count == 1 {
            format!("{count} {name}")
        } else {
            format!("{count} {name}s")
        }
    }

    let days = age.num_days().max(0);
    let (years, days) = (days / 365, days % 365);

    match (years, days) {
        (0, 0) => {
            let hours = age.num_hours().max(0);
            let minutes = (age.num_minutes() % 60).max(0);
            if hours == 0 {
                unit(minutes, "minute")
            } else {
                format!("{}, {}", unit(hours, "hour"), unit(minutes, "minute"))
            }
        }
        (0, days) => unit(days, "day"),
        (years, 0) => unit(years, "year"),
        (years, days) => format!("{}, {}", unit(years, "year"), unit(days, "day"))
    }
}

fn listed(items: Vec<&str>, none: &str) -> String {
    if items.is_empty() {
        none.to_string()
    } else {
        items.join("\n")
    }
}

fn update_sections(updates: &UpdateLog) -> [(&'static str, String); 2] {
    let recent = match updates.recent() {
        Some(update) => format!(
            "**Version**: {}\n**Description**: {}\n**Features**: {}\n**Fixes**: {}",
            update.version,
            update.description,
            listed(update.of_type(ChangeType::Feature), "No Features Added."),
            listed(update.of_type(ChangeType::Fix), "No Fixes Made.")
        ),
        None => "No Updates Yet".to_string()
    };

    let pending = match &updates.pending {
        Some(pending) => format!(
            "**Features**: {}\n**Fixes**: {}",
            listed(pending.of_type(ChangeType::Feature), "No Features Added Yet."),
            listed(pending.of_type(ChangeType::Fix), "No Fixes Made Yet.")
        ),
        None => "No Pending Update Yet".to_string()
    };

    [("Recent Update", recent), ("Pending Update", pending)]
}

/// The named sections shown by `botinfo`, before they are split into fields.
/// Update sections are left out when the update log couldn't be read.
pub fn bot_info_sections(owner: &str, developers: &[u64], created: DateTime<Utc>, started: DateTime<Utc>, now: DateTime<Utc>, updates: Option<&UpdateLog>) -> Vec<(&'static str, String)> {
    let developers = if developers.is_empty() {
        "None listed".to_string()
    } else {
        developers.iter()
            .map(|id| format!("<@{id}>"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut sections = vec![
        ("Owner", owner.to_string()),
        ("Developers", developers),
        ("Created", format!("{}\n{} ago", created.format("%B %-d, %Y"), format_age(now - created))),
        ("Running Since", format!("{}\n{}", started.format("%B %-d, %Y %H:%M UTC"), format_age(now - started)))
    ];
    if let Some(updates) = updates {
        sections.extend(update_sections(updates));
    }

    sections
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Info",
    aliases("botInfo", "bi"),
    description_localized("en-US", "Info about this bot.")
)]
pub async fn botinfo(ctx: OmegaContext<'_>) -> Result<(), Error> {
    let owner = match ctx.http().get_current_application_info().await {
        Ok(info) => info.owner.map(|o| o.tag()).unwrap_or_else(|| "Unknown".to_string()),
        Err(ex) => {
            error!("Failed to fetch application info: {}", ex);
            "Unknown".to_string()
        }
    };

    let now = Utc::now();
    let created = Utc.timestamp_opt(ctx.framework().bot_id.created_at().unix_timestamp(), 0)
        .single()
        .unwrap_or(now);

    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");
    let mut embed = CreateEmbed::new()
        .title("Omega Psi Info")
        .description(format!("Here's some information about me! (v{})", VERSION.unwrap_or("<unknown>")))
        .colour(INFO_COLOR);

    let data = ctx.data();
    let updates = match data.notes.get_updates().await {
        Ok(updates) => Some(updates),
        Err(ex) => {
            error!("Failed to get updates: {}", ex);
            None
        }
    };

    for (name, text) in bot_info_sections(&owner, &data.config.developers, created, data.started, now, updates.as_ref()) {
        embed = add_fields(embed, name, &create_fields(&text, FIELD_THRESHOLD));
    }

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[poise::command(prefix_command, slash_command, category = "Info", aliases("discord"), description_localized("en-US", "Gives you the invite link to my discord server!"))]
pub async fn support(ctx: OmegaContext<'_>) -> Result<(), Error> {
    ctx.say(ctx.data().config.links.support.clone()).await?;
    Ok(())
}

#[poise::command(prefix_command, slash_command, category = "Info", description_localized("en-US", "Gives you the link to my developer's website."))]
pub async fn website(ctx: OmegaContext<'_>) -> Result<(), Error> {
    ctx.say(ctx.data().config.links.website.clone()).await?;
    Ok(())
}

#[poise::command(prefix_command, slash_command, category = "Info", aliases("botSite"), description_localized("en-US", "Gives you the link to my own website."))]
pub async fn botsite(ctx: OmegaContext<'_>) -> Result<(), Error> {
    ctx.say(ctx.data().config.links.bot_site.clone()).await?;
    Ok(())
}

#[poise::command(prefix_command, slash_command, category = "Info", aliases("src"), description_localized("en-US", "Gives you the link to my source code."))]
pub async fn source(ctx: OmegaContext<'_>) -> Result<(), Error> {
    ctx.say(ctx.data().config.links.source.clone()).await?;
    Ok(())
}

#[poise::command(prefix_command, slash_command, category = "Info", description_localized("en-US", "Allows you to invite me to your own server!"))]
pub async fn invite(ctx: OmegaContext<'_>) -> Result<(), Error> {
    ctx.say(ctx.data().config.links.invite.clone()).await?;
    Ok(())
}

/// Latency comes from the shard heartbeat and is zero until the first one is acknowledged.
pub fn pong_message(latency: std::time::Duration) -> String {
    format!("Pong! `{}ms`", latency.as_millis())
}

#[poise::command(prefix_command, slash_command, category = "Info", description_localized("en-US", "Ping-Pong!"))]
pub async fn ping(ctx: OmegaContext<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.say(pong_message(latency)).await?;
    Ok(())
}
