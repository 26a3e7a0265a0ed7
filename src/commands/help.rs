use std::collections::BTreeMap;
use poise::{Command, CreateReply};
use serenity::all::CreateEmbed;

use crate::{Data, OmegaContext, Error};

#[poise::command(
    prefix_command,
    slash_command,
    description_localized("en-US", "Display the list of commands available, as well as their descriptions.")
)]
pub async fn help(
    ctx: OmegaContext<'_>,
    #[description = "The command requested for help"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    #[rest] command: Option<String>
) -> Result<(), Error> {
    let commands = &ctx.framework().options().commands;

    let embed = match command {
        Some(command) => help_single_command(commands, command.trim()),
        None => help_all_commands(commands, &ctx.data().prefixes.get(ctx.guild_id()).await)
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn description(cmd: &Command<Data, Error>) -> String {
    if let Some(help_text) = &cmd.help_text {
        help_text.clone()
    } else if let Some(description) = cmd.description_localizations.get("en-US").or(cmd.description.as_ref()) {
        description.clone()
    } else {
        "No help available".to_string()
    }
}

fn help_single_command(commands: &[Command<Data, Error>], command_name: &str) -> CreateEmbed {
    let command = commands.iter().find(|command| {
        command.name.eq_ignore_ascii_case(command_name)
            || command.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(command_name))
    });

    match command {
        Some(command) => {
            let mut embed = CreateEmbed::new()
                .title(format!("`{}`", command.name))
                .description(description(command));

            if !command.aliases.is_empty() {
                let aliases = command.aliases.iter()
                    .map(|alias| format!("`{}`", alias))
                    .collect::<Vec<_>>()
                    .join(", ");
                embed = embed.field("Aliases", aliases, false);
            }

            embed
        }
        None => CreateEmbed::new()
            .title("Help")
            .description(format!("No such command `{}`", command_name))
    }
}

fn help_all_commands(commands: &[Command<Data, Error>], prefix: &str) -> CreateEmbed {
    let mut categories: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for cmd in commands {
        if cmd.hide_in_help {
            continue;
        }

        categories.entry(cmd.category.as_deref().unwrap_or("General"))
            .or_default()
            .push(&cmd.name);
    }

    let mut embed = CreateEmbed::new()
        .title("Omega Psi Command Help")
        .description(format!("You can fetch help for a specific command with `{}help <command>`.", prefix));

    for (category, names) in categories {
        let command_list = names.iter()
            .map(|name| format!("`{}`", name))
            .collect::<Vec<_>>()
            .join(" ");

        embed = embed.field(category, command_list, false);
    }

    embed
}
