use std::collections::HashMap;
use serenity::model::id::GuildId;
use tokio::sync::RwLock;
use tracing::{error, warn};

use crate::{Database, Error};

/// Per-guild command prefixes, cached after the first lookup.
pub struct Prefixes {
    default: String,
    database: Option<Database>,
    cache: RwLock<HashMap<GuildId, String>>
}

impl Prefixes {
    pub fn new(default: &str, database: Option<Database>) -> Self {
        Self {
            default: default.to_string(),
            database,
            cache: RwLock::new(HashMap::new())
        }
    }

    pub async fn get(&self, guild_id: Option<GuildId>) -> String {
        let Some(guild_id) = guild_id else {
            return self.default.clone();
        };

        if let Some(prefix) = self.cache.read().await.get(&guild_id) {
            return prefix.clone();
        }

        let prefix = match &self.database {
            Some(db) => match db.get_prefix(guild_id).await {
                Ok(prefix) => prefix.unwrap_or_else(|| self.default.clone()),
                Err(ex) => {
                    // Don't cache failures, the next message will try again.
                    error!("Failed to get prefix for server {}: {}", guild_id, ex);
                    return self.default.clone();
                }
            },
            None => self.default.clone()
        };

        self.cache.write().await.insert(guild_id, prefix.clone());
        prefix
    }

    pub async fn set(&self, guild_id: GuildId, prefix: &str) -> Result<(), Error> {
        match &self.database {
            Some(db) => db.set_prefix(guild_id, prefix).await?,
            None => warn!("No database configured, prefix for server {} will not persist", guild_id)
        }

        self.cache.write().await.insert(guild_id, prefix.to_string());
        Ok(())
    }

    /// Whether a message is aimed at the command framework rather than a running game.
    pub async fn is_command(&self, guild_id: Option<GuildId>, content: &str) -> bool {
        content.starts_with(&self.get(guild_id).await)
    }
}
