use crate::{Error, StewardContext};
use crate::util::is_forbidden;
use serenity::model::guild::Guild;
use serenity::model::id::{GuildId, RoleId};
use tracing::error;
use super::ordering::{parse_move_request, resolve_move, GuildRole, MoveError};

/// Snapshots the guild's roles sorted by position ascending, so that slice
/// index equals position.
pub(crate) fn ordered_roles(guild: &Guild) -> Vec<GuildRole> {
    let mut roles: Vec<_> = guild.roles.values().collect();
    roles.sort_by_key(|role| (role.position, role.id));

    roles.into_iter()
        .map(|role| GuildRole::new(role.id, role.name.clone()))
        .collect()
}

/// Submits the computed ordering, one changed pair at a time (the API client
/// exposes the role-positions endpoint per role). Roles already sitting at
/// their assigned position are skipped.
async fn apply_positions(
    ctx: &StewardContext<'_>,
    guild_id: GuildId,
    current: &[GuildRole],
    mapping: &[(RoleId, u64)],
) -> serenity::Result<()> {
    for (role_id, position) in mapping {
        let unchanged = current.get(*position as usize)
            .map_or(false, |role| role.id == *role_id);

        if !unchanged {
            guild_id.edit_role_position(&ctx.serenity_context().http, *role_id, *position).await?;
        }
    }

    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_ROLES",
    description_localized("en-US", "Move a role's position, e.g. \"Knight move up 2\" or \"Knight moveto top\".")
)]
pub async fn moverole(
    ctx: StewardContext<'_>,
    #[description = "RoleName move up/down N, move over/under Reference, or moveto top/bottom"]
    #[rest] args: String)
-> Result<(), Error> {
    if let Some(guild) = ctx.guild() {
        let (role_name, request) = parse_move_request(&args);
        let roles = ordered_roles(&guild);

        match resolve_move(&roles, &role_name, &request) {
            Ok(mapping) => {
                match apply_positions(&ctx, guild.id, &roles, &mapping).await {
                    Ok(_) => {
                        ctx.say(format!("Moved role `{role_name}` successfully.")).await?;
                    }
                    Err(err) if is_forbidden(&err) => {
                        ctx.say("I don't have permission to move roles!").await?;
                    }
                    Err(err) => {
                        error!("Failed to move role: {}", err);
                        ctx.say("Failed to move role. Please try again.").await?;
                    }
                }
            }
            Err(MoveError::RoleNotFound(name)) => {
                ctx.say(format!("Role `{name}` not found.")).await?;
            }
            Err(MoveError::ReferenceNotFound(name)) => {
                ctx.say(format!("Reference role `{name}` not found.")).await?;
            }
            Err(MoveError::InvalidPosition) => {
                ctx.say("Invalid position! Use `top` or `bottom`.").await?;
            }
            Err(MoveError::InvalidSpec) => {
                ctx.say("Invalid command usage.").await?;
            }
        }
    } else {
        ctx.say("This command can only be run in a server.").await?;
    }

    Ok(())
}
