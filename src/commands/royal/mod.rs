pub mod god;
pub mod king;
pub mod knight;

pub use god::*;
pub use king::*;
pub use knight::*;

use crate::{Error, StewardContext};

/// Whether the command author holds the named gate role. Pure predicate: the
/// router reports the rejection, not the check. A missing gate role is an
/// error so the router can name it.
async fn has_gate_role(ctx: StewardContext<'_>, role_name: &str) -> Result<bool, Error> {
    let role_id = match ctx.guild() {
        Some(guild) => guild.roles.values()
            .find(|role| role.name == role_name)
            .map(|role| role.id),
        None => return Ok(false)
    };

    match role_id {
        Some(role_id) => {
            let holds_role = match ctx.author_member().await {
                Some(member) => member.roles.contains(&role_id),
                None => false
            };

            Ok(holds_role)
        }
        None => Err(format!("The {role_name} role doesn't exist in this server!").into())
    }
}

pub async fn is_knight(ctx: StewardContext<'_>) -> Result<bool, Error> {
    has_gate_role(ctx, "Knight").await
}

pub async fn is_king(ctx: StewardContext<'_>) -> Result<bool, Error> {
    has_gate_role(ctx, "King").await
}

pub async fn is_god(ctx: StewardContext<'_>) -> Result<bool, Error> {
    has_gate_role(ctx, "God").await
}

/// The invoker's nickname where one is set, falling back to the account name.
pub(crate) async fn author_display_name(ctx: &StewardContext<'_>) -> String {
    match ctx.author_member().await {
        Some(member) => member.display_name().to_string(),
        None => ctx.author().name.clone()
    }
}

fn role_commands_info() -> String {
    [
        "Special Commands by Role:",
        "",
        "Knight Commands:",
        "!knightannounce [message] - Send an announcement with special formatting",
        "!knightmute @user [duration] - Temporarily mute a user",
        "",
        "King Commands:",
        "!kingdecree [message] - Make a server-wide decree",
        "!kingrename @user [new_name] - Rename a user",
        "!kingexile @user - Kick a user from the server",
        "",
        "God Commands:",
        "!godsmite @user - Ban a user dramatically",
        "!godblessing @user - Grant a random special permission",
        "!godspeak [message] - Send a divine message to all channels",
    ].join("\n")
}

#[poise::command(
    prefix_command,
    slash_command,
    description_localized("en-US", "List the special commands available to each role.")
)]
pub async fn specialcommands(ctx: StewardContext<'_>) -> Result<(), Error> {
    ctx.say(format!("```\n{}\n```", role_commands_info())).await?;
    Ok(())
}
