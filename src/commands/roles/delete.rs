use crate::{Error, StewardContext};
use crate::util::is_forbidden;
use tracing::error;

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_ROLES",
    description_localized("en-US", "Delete a role by name.")
)]
pub async fn deleterole(
    ctx: StewardContext<'_>,
    #[description = "The name of the role to delete"] #[rest] role_name: String)
-> Result<(), Error> {
    if let Some(guild) = ctx.guild() {
        let role_id = guild.roles.values()
            .find(|role| role.name == role_name)
            .map(|role| role.id);

        match role_id {
            Some(role_id) => {
                match guild.id.delete_role(&ctx.serenity_context().http, role_id).await {
                    Ok(_) => {
                        ctx.say(format!("Deleted role '{role_name}' successfully!")).await?;
                    }
                    Err(err) if is_forbidden(&err) => {
                        ctx.say("I don't have permission to delete this role!").await?;
                    }
                    Err(err) => {
                        error!("Failed to delete role: {}", err);
                        ctx.say("Failed to delete role. Please try again.").await?;
                    }
                }
            }
            None => {
                ctx.say(format!("Role '{role_name}' not found!")).await?;
            }
        }
    } else {
        ctx.say("This command can only be run in a server.").await?;
    }

    Ok(())
}
