pub mod roles;
pub mod royal;

use std::collections::HashSet;
use tracing::error;

use serenity::model::id::UserId;

use crate::{Data, Error, StewardContext};

#[poise::command(prefix_command, track_edits, slash_command)]
async fn help(
    ctx: StewardContext<'_>,
    #[description = "The command requested for help"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> Result<(), Error> {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            show_context_menu_commands: true,
            ..Default::default()
        },
    )
        .await?;
    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    description_localized("en-US", "Info about this bot.")
)]
async fn info(ctx: StewardContext<'_>) -> Result<(), Error> {
    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");
    let content = format!("Steward v{} - keeping your realm's roles in order", VERSION.unwrap_or("<unknown>"));

    ctx.say(content).await?;
    Ok(())
}

/// Registers or unregisters application commands in this guild or globally
#[poise::command(prefix_command, hide_in_help, owners_only)]
async fn register(ctx: StewardContext<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx).await?;

    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx } => {
            if let Err(ex) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {}", ex);
            }
        }
        poise::FrameworkError::ArgumentParse { ctx, .. } => {
            if let Err(ex) = ctx.say("Invalid argument provided!").await {
                error!("Failed to send error message: {}", ex);
            }
        }
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            if let Err(ex) = ctx.say("You don't have permission to use this command!").await {
                error!("Failed to send error message: {}", ex);
            }
        }
        poise::FrameworkError::CommandCheckFailed { error, ctx } => {
            // A check error carries its own explanation (e.g. the gate role
            // is missing entirely); a plain false means the author lacks it.
            let content = match error {
                Some(reason) => reason.to_string(),
                None => "You don't have permission to use this command!".to_string()
            };

            if let Err(ex) = ctx.say(content).await {
                error!("Failed to send error message: {}", ex);
            }
        }
        other => {
            if let Err(ex) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", ex);
            }
        }
    }
}

pub async fn get_framework(pref: &str, _app_id: UserId, owners: HashSet<UserId>) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: vec![
            help(),
            info(),
            register(),
            roles::createrole(),
            roles::roleinfo(),
            roles::deleterole(),
            roles::assignrole(),
            roles::removerole(),
            roles::moverole(),
            roles::cleanroles(),
            roles::createrolepreset(),
            roles::listtemplates(),
            royal::specialcommands(),
            royal::knightannounce(),
            royal::knightmute(),
            royal::kingdecree(),
            royal::kingrename(),
            royal::kingexile(),
            royal::godsmite(),
            royal::godblessing(),
            royal::godspeak(),
        ],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(pref.to_string()),
            mention_as_prefix: true,
            ..Default::default()
        },
        on_error: |error| Box::pin(on_error(error)),
        owners,
        ..Default::default()
    }
}
