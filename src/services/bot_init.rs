use serenity::all::{Context, Ready};
use tracing::info;

pub async fn ready(_ctx: &Context, ready: &Ready) {
    info!("Logged in as {} in {} servers", ready.user.name, ready.guilds.len());
}
