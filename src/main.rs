mod models;
mod commands;
mod games;
mod services;
mod util;

use std::env;
use std::error;
use std::fs;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use commands::get_framework;
use games::hangman::HangmanGame;
use games::scramble::ScrambleGame;
use games::table::GameTable;
use models::config::Config;
use services::database::Database;
use services::bot_notes::BotNotes;
use services::case_numbers::CaseNumbers;
use services::document_store::{DocumentStore, MemoryDocumentStore, SqlDocumentStore};
use services::prefixes::Prefixes;
use serenity::all::{ClientBuilder, GatewayIntents};
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

pub type Error = Box<dyn error::Error + Send + Sync>;
pub type OmegaContext<'a> = poise::Context<'a, Data, Error>;

pub struct Data {
    pub config: Config,
    pub prefixes: Prefixes,
    pub cases: CaseNumbers,
    pub notes: BotNotes,
    pub hangman: Mutex<GameTable<HangmanGame>>,
    pub scramble: Mutex<GameTable<ScrambleGame>>,
    pub http: reqwest::Client,
    pub started: DateTime<Utc>
}

fn init_logger() -> Result<WorkerGuard, Error> {
    let file_appender = tracing_appender::rolling::hourly("logs", "omega.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_span_events(fmt::format::FmtSpan::CLOSE)
            .with_ansi(true)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
            .with(fmt::Layer::default().with_writer(non_blocking).with_ansi(false))
    )?;

    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");
    info!("Initializing Omega Psi v{}", VERSION.unwrap_or("<unknown>"));
    info!("Reading from {}", env::current_dir()?.display());

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Dropping the guard stops the file writer.
    let _guard = init_logger()?;

    let config_json = fs::read_to_string("config.json")?;
    let config: Config = serde_json::from_str(&config_json)?;

    let database = if config.sql_enabled() {
        Some(Database::new(&config.sql_server_ip, config.sql_server_port, &config.sql_server_username, &config.sql_server_password).await?)
    } else {
        warn!("No SQL Server configured; cases, tasks, updates and prefixes will only be kept in memory");
        None
    };

    let store: Arc<dyn DocumentStore> = match &database {
        Some(db) => Arc::new(SqlDocumentStore::new(db.clone())),
        None => Arc::new(MemoryDocumentStore::default())
    };

    let token = config.token.clone();
    let data = Data {
        prefixes: Prefixes::new(&config.cmd_prefix, database),
        cases: CaseNumbers::new(store.clone()),
        notes: BotNotes::new(store),
        hangman: Mutex::new(GameTable::default()),
        scramble: Mutex::new(GameTable::default()),
        http: reqwest::Client::new(),
        started: Utc::now(),
        config
    };

    let framework = poise::Framework::builder()
        .options(get_framework())
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                if let Err(ex) = poise::builtins::register_globally(ctx, &framework.options().commands).await {
                    error!("Failed to create slash commands: {}", ex);
                }

                Ok(data)
            })
        })
        .build();

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    if let Err(ex) = client.start().await {
        error!("Discord bot client error: {:?}", ex);
    }

    Ok(())
}
