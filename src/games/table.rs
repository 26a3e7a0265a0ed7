use std::collections::HashMap;
use std::collections::hash_map::Entry;
use serenity::all::{GuildId, UserId};

/// Games started in DMs all share one "private" server slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerKey {
    Guild(GuildId),
    Private
}

impl From<Option<GuildId>> for ServerKey {
    fn from(guild: Option<GuildId>) -> Self {
        guild.map(ServerKey::Guild).unwrap_or(ServerKey::Private)
    }
}

/// Running games, one per user per server.
#[derive(Debug)]
pub struct GameTable<G> {
    servers: HashMap<ServerKey, HashMap<UserId, G>>
}

impl<G> Default for GameTable<G> {
    fn default() -> Self {
        Self { servers: HashMap::new() }
    }
}

impl<G> GameTable<G> {
    pub fn get_mut(&mut self, server: ServerKey, user: UserId) -> Option<&mut G> {
        self.servers.get_mut(&server).and_then(|o| o.get_mut(&user))
    }

    pub fn contains(&self, server: ServerKey, user: UserId) -> bool {
        self.servers.get(&server).map(|o| o.contains_key(&user)).unwrap_or(false)
    }

    /// Starts a game, replacing whatever the user was playing on that server.
    pub fn insert(&mut self, server: ServerKey, user: UserId, game: G) -> &mut G {
        match self.servers.entry(server).or_default().entry(user) {
            Entry::Occupied(mut running) => {
                running.insert(game);
                running.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(game)
        }
    }

    pub fn remove(&mut self, server: ServerKey, user: UserId) -> Option<G> {
        let games = self.servers.get_mut(&server)?;
        let game = games.remove(&user);

        if games.is_empty() {
            self.servers.remove(&server);
        }

        game
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn games_are_scoped_by_server_and_user() {
        let mut table = GameTable::default();
        let guild = ServerKey::Guild(GuildId::new(1));
        let alice = UserId::new(10);
        let bob = UserId::new(20);

        table.insert(guild, alice, "guild game");
        table.insert(ServerKey::Private, alice, "dm game");

        assert!(table.contains(guild, alice));
        assert!(!table.contains(guild, bob));
        assert_eq!(table.get_mut(ServerKey::Private, alice).map(|o| *o), Some("dm game"));

        assert_eq!(table.remove(guild, alice), Some("guild game"));
        assert!(!table.contains(guild, alice));
        assert!(table.contains(ServerKey::Private, alice));
        assert_eq!(table.remove(guild, bob), None);
    }

    #[test]
    fn starting_again_replaces_the_game() {
        let mut table = GameTable::default();
        let user = UserId::new(5);

        table.insert(ServerKey::Private, user, 1);
        *table.insert(ServerKey::Private, user, 2) += 1;

        assert_eq!(table.remove(ServerKey::Private, user), Some(3));
    }

    #[test]
    fn missing_guild_is_private() {
        assert_eq!(ServerKey::from(None), ServerKey::Private);
        assert_eq!(ServerKey::from(Some(GuildId::new(9))), ServerKey::Guild(GuildId::new(9)));
    }
}
