use crate::{Error, StewardContext};
use super::attrs::format_role_info;

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    description_localized("en-US", "Display detailed information about a role.")
)]
pub async fn roleinfo(
    ctx: StewardContext<'_>,
    #[description = "The name of the role to inspect"] #[rest] role_name: String)
-> Result<(), Error> {
    if let Some(guild) = ctx.guild() {
        match guild.roles.values().find(|role| role.name == role_name) {
            Some(role) => {
                ctx.say(format!("```\n{}\n```", format_role_info(role))).await?;
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
