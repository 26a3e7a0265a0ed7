use chrono::{DateTime, Datelike, TimeZone, Utc};
use num_traits::FromPrimitive;
use poise::CreateReply;
use reqwest::header::CACHE_CONTROL;
use serde_json::{json, Value};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};
use tracing::error;

use crate::{OmegaContext, Error};
use crate::commands::info::INFO_COLOR;
use crate::models::uptime_models::{LogType, MonitorLog, MonitorsResponse};

pub const UPTIME_API_URL: &str = "https://api.uptimerobot.com/v2/getMonitors";

const DAY: i64 = 60 * 60 * 24;

#[derive(Debug, Clone, PartialEq)]
pub struct Downtime {
    pub hours: i64,
    pub minutes: i64,
    pub last: DateTime<Utc>
}

#[derive(Debug, Clone, PartialEq)]
pub struct UptimeSummary {
    pub last_day: f64,
    pub last_week: f64,
    pub this_month: f64,
    pub latest: Option<Downtime>
}

fn uptime_percent(downtime: i64, window: i64) -> f64 {
    let percent = 100.0 - (downtime as f64 / window as f64 * 100.0);
    (percent * 100.0).round() / 100.0
}

/// Totals the downtime in `logs` (newest first) over the last day, week and month so far.
/// Anything that isn't an "up" log counts as downtime.
pub fn summarize(logs: &[MonitorLog], now: DateTime<Utc>) -> UptimeSummary {
    let month_window = DAY * i64::from(now.day());
    let (mut day, mut week, mut month) = (0, 0, 0);
    let mut latest = None;

    for log in logs.iter().filter(|o| LogType::from_u8(o.kind) != Some(LogType::Up)) {
        if latest.is_none() {
            latest = Some(Downtime {
                hours: log.duration / 3600,
                minutes: log.duration % 3600 / 60,
                last: Utc.timestamp_opt(log.datetime, 0).single().unwrap_or(now)
            });
        }

        let age = now.timestamp() - log.datetime;
        if age <= DAY {
            day += log.duration;
        }
        if age <= DAY * 7 {
            week += log.duration;
        }
        if age <= month_window {
            month += log.duration;
        }
    }

    UptimeSummary {
        last_day: uptime_percent(day, DAY),
        last_week: uptime_percent(week, DAY * 7),
        this_month: uptime_percent(month, month_window),
        latest
    }
}

pub async fn fetch_monitors(client: &reqwest::Client, api_key: &str) -> Result<MonitorsResponse, reqwest::Error> {
    client.post(UPTIME_API_URL)
        .header(CACHE_CONTROL, "no-cache")
        .form(&[("api_key", api_key), ("format", "json"), ("logs", "1")])
        .send()
        .await?
        .json()
        .await
}

fn error_payload_embed(payload: &Value) -> CreateEmbed {
    let pretty = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());

    CreateEmbed::new()
        .title("Error")
        .description(format!("```json\n{}\n```", pretty))
        .colour(INFO_COLOR)
}

pub fn uptime_embed(response: Result<MonitorsResponse, reqwest::Error>, now: DateTime<Utc>, status_url: &str) -> CreateEmbed {
    let response = match response {
        Ok(response) => response,
        Err(ex) => {
            error!("Failed to fetch uptime: {}", ex);
            return error_payload_embed(&json!({ "type": "request", "message": ex.to_string() }));
        }
    };

    if response.stat != "ok" {
        let payload = response.error.unwrap_or_else(|| json!({ "stat": response.stat }));
        return error_payload_embed(&payload);
    }

    let logs = response.monitors.first().map(|o| o.logs.as_slice()).unwrap_or_default();
    let summary = summarize(logs, now);

    let mut embed = CreateEmbed::new()
        .title("Omega Psi Uptime")
        .url(status_url)
        .colour(INFO_COLOR)
        .field("Last 24 Hours", format!("{}%", summary.last_day), true)
        .field("Last 7 Days", format!("{}%", summary.last_week), true)
        .field("This Month", format!("{}%", summary.this_month), true);

    match summary.latest {
        Some(latest) => {
            embed = embed.footer(CreateEmbedFooter::new(format!("Latest downtime ({} hrs {} min)", latest.hours, latest.minutes)));
            if let Ok(timestamp) = Timestamp::from_unix_timestamp(latest.last.timestamp()) {
                embed = embed.timestamp(timestamp);
            }
        }
        None => embed = embed.footer(CreateEmbedFooter::new("No recent downtime"))
    }

    embed
}

#[poise::command(
    prefix_command,
    slash_command,
    category = "Info",
    description_localized("en-US", "Shows how reliably the bot has been online.")
)]
pub async fn uptime(ctx: OmegaContext<'_>) -> Result<(), Error> {
    let sent_msg = ctx.send(CreateReply::default().embed(CreateEmbed::new()
        .title("Omega Psi Uptime")
        .description("Now loading, please wait warmly...")
        .colour(INFO_COLOR)
    )).await?;

    let data = ctx.data();
    let response = fetch_monitors(&data.http, &data.config.uptime_api_key).await;
    let embed = uptime_embed(response, Utc::now(), &data.config.links.status);

    sent_msg.edit(ctx, CreateReply::default().embed(embed)).await?;
    Ok(())
}
