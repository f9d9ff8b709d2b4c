mod models;
mod commands;
mod services;
mod util;

use std::collections::{HashMap, HashSet};
use commands::get_framework;
use models::config::Config;
use services::*;
use std::env;
use std::error;
use serenity::{
    async_trait,
    client::{Context, EventHandler},
    model::{gateway::{Ready, GatewayIntents}, id::{GuildId, RoleId, UserId}},
    http::Http,
};
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

type Error = Box<dyn error::Error + Send + Sync>;
type StewardContext<'a> = poise::Context<'a, Data, Error>;

/// Shared state handed to every command handler by the framework.
pub struct Data {
    /// Most recently created role per guild. Written on successful role
    /// creation; nothing reads it yet, but future commands will.
    pub last_created_role: RwLock<HashMap<GuildId, RoleId>>,
}

struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        bot_init::ready(&ctx, &ready).await;
    }
}

fn init_logger() -> std::io::Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::hourly("logs", "steward.log");
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
            .with(fmt::Layer::default().with_writer(non_blocking))
    ).expect("Failed to set global subscriber");

    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");
    info!("Initializing steward v{}", VERSION.unwrap_or("<unknown>"));
    info!("Reading from {}", env::current_dir()?.display());

    Ok(guard)
}

async fn fetch_bot_info(token: &str) -> (UserId, HashSet<UserId>) {
    let http = Http::new(token);

    let (app_id, owners) = match http.get_current_application_info().await {
        Ok(info) => {
            let mut owners = HashSet::new();

            if let Some(team) = info.team {
                owners.insert(team.owner_user_id);
            } else {
                owners.insert(info.owner.id);
            }

            match http.get_current_user().await {
                Ok(app_id) => (app_id.id, owners),
                Err(ex) => panic!("Are we not a bot? {ex}")
            }
        },
        Err(ex) => panic!("Failed to fetch bot info: {ex}")
    };

    (app_id, owners)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn error::Error>> {
    let _log_guard = match init_logger() {
        Ok(guard) => Some(guard),
        Err(ex) => {
            eprintln!("Failed to initialize logger: {ex}");
            None
        }
    };

    // The token is the one piece of configuration the bot cannot run without.
    let token = env::var("DISCORD_BOT_TOKEN")
        .expect("No Discord bot token found. Please set the DISCORD_BOT_TOKEN environment variable.");
    let config = Config::load();

    let (app_id, owners) = fetch_bot_info(&token).await;
    let framework = get_framework(&config.cmd_prefix, app_id, owners).await;

    let event_handler = Handler;

    let poise = poise::Framework::builder()
        .token(&token)
        .intents(GatewayIntents::all())
        .options(framework)
        .client_settings(move |settings| {
            settings
                .event_handler(event_handler)
                .application_id(app_id.0)
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                if let Err(ex) = poise::builtins::register_globally(ctx, &framework.options().commands).await {
                    error!("Failed to create slash commands: {}", ex);
                }

                Ok(Data {
                    last_created_role: RwLock::new(HashMap::new()),
                })
            })
        })
        .build()
        .await
        .expect("Failed to create client");

    if let Err(ex) = poise.start().await {
        error!("Discord bot client error: {:?}", ex);
    }

    Ok(())
}
