use crate::{Error, StewardContext};
use super::mover::ordered_roles;

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_ROLES",
    description_localized("en-US", "Delete roles no member holds, optionally filtered by a name pattern.")
)]
pub async fn cleanroles(
    ctx: StewardContext<'_>,
    #[description = "Only delete roles whose name contains this text"] #[rest] pattern: Option<String>)
-> Result<(), Error> {
    if let Some(guild) = ctx.guild() {
        let mut deleted_count = 0;
        let pattern = pattern.map(|p| p.to_lowercase());

        // Skip index 0; the everyone role is not deletable.
        for role in ordered_roles(&guild).iter().skip(1) {
            if let Some(pattern) = &pattern {
                if !role.name.to_lowercase().contains(pattern) {
                    continue;
                }
            }

            let in_use = guild.members.values().any(|member| member.roles.contains(&role.id));
            if in_use {
                continue;
            }

            // Per-role failures are skipped, matching the best-effort sweep.
            if guild.id.delete_role(&ctx.serenity_context().http, role.id).await.is_ok() {
                deleted_count += 1;
            }
        }

        ctx.say(format!("Cleaned up {deleted_count} unused roles!")).await?;
    } else {
        ctx.say("This command can only be run in a server.").await?;
    }

    Ok(())
}
