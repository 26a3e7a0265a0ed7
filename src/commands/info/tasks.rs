use poise::CreateReply;
use serenity::all::CreateEmbed;
use tracing::error;

use crate::{OmegaContext, Error};
use crate::commands::cases::review::is_developer;
use crate::commands::info::INFO_COLOR;
use crate::models::bot_models::{Task, TaskList};
use crate::util::errors::error_embed;
use crate::util::fields::{add_fields, create_fields, FIELD_THRESHOLD};

pub fn task_list_embed(list: &TaskList) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("Tasklist")
        .colour(INFO_COLOR);

    if list.tasks.is_empty() {
        return embed.description("There are currently no tasks.");
    }

    let text = list.tasks.iter()
        .enumerate()
        .map(|(index, task)| format!("**{}.)** *{}*", index + 1, task.task))
        .collect::<Vec<_>>()
        .join("\n");

    add_fields(
        embed.description("Here's what my developers plan to work on."),
        "Tasks",
        &create_fields(&text, FIELD_THRESHOLD)
    )
}

pub fn task_added_embed(task: &Task) -> CreateEmbed {
    CreateEmbed::new()
        .title("Task Added")
        .description(format!("*{}* was added to the tasklist.", task.task))
        .colour(INFO_COLOR)
}

pub fn task_removed_embed(task: Option<&Task>) -> CreateEmbed {
    match task {
        Some(task) => CreateEmbed::new()
            .title("Task Removed")
            .description(format!("*{}* was removed from the tasklist.", task.task))
            .colour(INFO_COLOR),
        None => error_embed("That task number is invalid.")
    }
}

async fn list_tasks(ctx: OmegaContext<'_>) -> Result<(), Error> {
    let embed = match ctx.data().notes.get_tasks().await {
        Ok(list) => task_list_embed(&list),
        Err(ex) => {
            error!("Failed to get tasks: {}", ex);
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
    subcommands("tasks_list", "tasks_add", "tasks_remove"),
    description_localized("en-US", "Shows what my developers plan to work on.")
)]
pub async fn tasks(ctx: OmegaContext<'_>) -> Result<(), Error> {
    list_tasks(ctx).await
}

#[poise::command(prefix_command, slash_command, rename = "list", description_localized("en-US", "Shows the tasklist."))]
pub async fn tasks_list(ctx: OmegaContext<'_>) -> Result<(), Error> {
    list_tasks(ctx).await
}

#[poise::command(
    prefix_command,
    slash_command,
    rename = "add",
    check = "is_developer",
    description_localized("en-US", "Adds a task to the tasklist.")
)]
pub async fn tasks_add(
    ctx: OmegaContext<'_>,
    #[description = "The task to add"]
    #[rest] task: Option<String>
) -> Result<(), Error> {
    let Some(task) = task.map(|o| o.trim().to_string()).filter(|o| !o.is_empty()) else {
        ctx.send(CreateReply::default().embed(error_embed("You need to type in the task you want to add."))).await?;
        return Ok(());
    };

    let embed = match ctx.data().notes.add_task(task).await {
        Ok(task) => task_added_embed(&task),
        Err(ex) => {
            error!("Failed to add task: {}", ex);
            error_embed("We couldn't save that right now, try again later?")
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    rename = "remove",
    check = "is_developer",
    description_localized("en-US", "Removes a task from the tasklist.")
)]
pub async fn tasks_remove(
    ctx: OmegaContext<'_>,
    #[description = "The number of the task to remove"] number: u64
) -> Result<(), Error> {
    // Anything that doesn't fit is past the end of the list.
    let number = usize::try_from(number).unwrap_or(usize::MAX);

    let embed = match ctx.data().notes.remove_task(number).await {
        Ok(removed) => task_removed_embed(removed.as_ref()),
        Err(ex) => {
            error!("Failed to remove task {}: {}", number, ex);
            error_embed("We couldn't update that right now, try again later?")
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::commands::games::embed_json;

    fn task(text: &str) -> Task {
        Task { task: text.to_string(), added: Utc::now() }
    }

    #[test]
    fn empty_tasklist_says_so() {
        let embed = embed_json(&task_list_embed(&TaskList::default()));

        assert_eq!(embed["title"], "Tasklist");
        assert_eq!(embed["description"], "There are currently no tasks.");
        assert!(embed["fields"].as_array().map_or(true, |o| o.is_empty()));
    }

    #[test]
    fn tasks_are_numbered_from_one() {
        let list = TaskList { tasks: vec![task("fix scramble"), task("add trivia")] };
        let embed = embed_json(&task_list_embed(&list));

        assert_eq!(embed["fields"][0]["name"], "Tasks");
        assert_eq!(embed["fields"][0]["value"], "**1.)** *fix scramble*\n**2.)** *add trivia*\n");
    }

    #[test]
    fn invalid_removal_is_an_error() {
        assert_eq!(embed_json(&task_removed_embed(None))["description"], "That task number is invalid.");

        let removed = embed_json(&task_removed_embed(Some(&task("add trivia"))));
        assert_eq!(removed["title"], "Task Removed");
        assert_eq!(removed["description"], "*add trivia* was removed from the tasklist.");
    }

    #[test]
    fn add_and_remove_are_developer_only() {
        assert_eq!(tasks_add().checks.len(), 1);
        assert_eq!(tasks_remove().checks.len(), 1);
        assert!(tasks_list().checks.is_empty());

        let names: Vec<String> = tasks().subcommands.into_iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["list", "add", "remove"]);
    }
}
