pub mod hangman;
pub mod rps;
pub mod scramble;

pub use hangman::*;
pub use rps::*;
pub use scramble::*;

use serenity::all::CreateEmbed;

pub const EMBED_COLOR: u32 = 0xFF8000;

pub const HANGMAN_ICON: &str = "https://i.ytimg.com/vi/r91yPViqRX0/maxresdefault.jpg";
pub const SCRAMBLE_ICON: &str = "https://i.ytimg.com/vi/iW1Z0AZvWX8/hqdefault.jpg";
pub const SUCCESS_ICON: &str = "https://cdn3.iconfinder.com/data/icons/social-messaging-ui-color-line/254000/172-512.png";
pub const FAILED_ICON: &str = "https://png.pngtree.com/svg/20161229/fail_17487.png";

pub fn game_embed(title: impl Into<String>, description: impl Into<String>, icon: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(EMBED_COLOR)
        .thumbnail(icon)
}

pub fn quit_embed(game: &str) -> CreateEmbed {
    game_embed(format!("{game} Quit"), format!("You quit your game of {game}."), SUCCESS_ICON)
}

pub fn no_game_embed(game: &str) -> CreateEmbed {
    game_embed(format!("No {game} Game"), format!("You aren't playing {game} right now."), FAILED_ICON)
}

pub fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
pub(crate) fn embed_json(embed: &CreateEmbed) -> serde_json::Value {
    serde_json::to_value(embed).expect("embeds serialize")
}
