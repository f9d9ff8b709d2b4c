use crate::{Error, StewardContext};
use crate::util::is_forbidden;
use serenity::model::guild::Member;
use tracing::error;

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_ROLES",
    description_localized("en-US", "Assign a role to a member.")
)]
pub async fn assignrole(
    ctx: StewardContext<'_>,
    #[description = "The member receiving the role"] member: Member,
    #[description = "The name of the role to assign"] #[rest] role_name: String)
-> Result<(), Error> {
    if let Some(guild) = ctx.guild() {
        match guild.roles.values().find(|role| role.name == role_name) {
            Some(role) => {
                let mut member = member;

                match member.add_role(&ctx.serenity_context().http, role.id).await {
                    Ok(_) => {
                        ctx.say(format!("Assigned role <@&{}> to <@{}>", role.id.as_u64(), member.user.id.as_u64())).await?;
                    }
                    Err(err) if is_forbidden(&err) => {
                        ctx.say("I don't have permission to assign this role!").await?;
                    }
                    Err(err) => {
                        error!("Failed to assign role: {}", err);
                        ctx.say("Failed to assign role. Please try again.").await?;
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

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_ROLES",
    description_localized("en-US", "Remove a role from a member.")
)]
pub async fn removerole(
    ctx: StewardContext<'_>,
    #[description = "The member losing the role"] member: Member,
    #[description = "The name of the role to remove"] #[rest] role_name: String)
-> Result<(), Error> {
    if let Some(guild) = ctx.guild() {
        match guild.roles.values().find(|role| role.name == role_name) {
            Some(role) => {
                let mut member = member;

                match member.remove_role(&ctx.serenity_context().http, role.id).await {
                    Ok(_) => {
                        ctx.say(format!("Removed role <@&{}> from <@{}>", role.id.as_u64(), member.user.id.as_u64())).await?;
                    }
                    Err(err) if is_forbidden(&err) => {
                        ctx.say("I don't have permission to remove this role!").await?;
                    }
                    Err(err) => {
                        error!("Failed to remove role: {}", err);
                        ctx.say("Failed to remove role. Please try again.").await?;
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
