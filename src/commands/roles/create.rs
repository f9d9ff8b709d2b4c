use crate::{Error, StewardContext};
use crate::util::is_forbidden;
use tracing::error;
use super::attrs::RoleOptions;

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_ROLES",
    description_localized("en-US", "Create a new role with the given name, color, and permissions.")
)]
pub async fn createrole(
    ctx: StewardContext<'_>,
    #[description = "The name of the new role"] name: String,
    #[description = "Options, e.g. color=red perms=kick,ban mentionable=true hoisted=true"]
    #[rest] args: Option<String>)
-> Result<(), Error> {
    if let Some(guild_id) = ctx.guild_id() {
        let options = RoleOptions::parse(args.as_deref().unwrap_or(""));

        let created = guild_id.create_role(&ctx.serenity_context().http, |r| r
            .name(&name)
            .colour(u64::from(options.colour.0))
            .permissions(options.permissions)
            .mentionable(options.mentionable)
            .hoist(options.hoist)).await;

        match created {
            Ok(role) => {
                {
                    let mut last_created = ctx.data().last_created_role.write().await;
                    last_created.insert(guild_id, role.id);
                }

                ctx.say(format!("Created role <@&{}> successfully!", role.id.as_u64())).await?;
            }
            Err(err) if is_forbidden(&err) => {
                ctx.say("I don't have permission to create roles!").await?;
            }
            Err(err) => {
                error!("Failed to create role: {}", err);
                ctx.say("Failed to create role. Please try again.").await?;
            }
        }
    } else {
        ctx.say("This command can only be run in a server.").await?;
    }

    Ok(())
}
