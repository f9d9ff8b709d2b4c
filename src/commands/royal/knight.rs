use crate::{Error, StewardContext};
use crate::util::is_forbidden;
use serenity::model::guild::Member;
use serenity::utils::Colour;
use std::time::Duration;
use super::author_display_name;

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    check = "crate::commands::royal::is_knight",
    description_localized("en-US", "Send an announcement with special formatting.")
)]
pub async fn knightannounce(
    ctx: StewardContext<'_>,
    #[description = "The announcement to make"] #[rest] message: String)
-> Result<(), Error> {
    let author = author_display_name(&ctx).await;

    ctx.send(|m| m.embed(|e| e
        .title("\u{1F4E2} Knight's Announcement")
        .description(&message)
        .colour(Colour::BLUE)
        .footer(|f| f.text(format!("Announced by Knight {author}")))
    )).await?;

    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    check = "crate::commands::royal::is_knight",
    description_localized("en-US", "Temporarily server-mute a user.")
)]
pub async fn knightmute(
    ctx: StewardContext<'_>,
    #[description = "The member to mute"] member: Member,
    #[description = "Mute duration in minutes (default 5)"] duration: Option<u64>)
-> Result<(), Error> {
    let duration = duration.unwrap_or(5);

    if duration > 60 {
        ctx.say("Knights can only mute for up to 60 minutes!").await?;
        return Ok(());
    }

    let author = author_display_name(&ctx).await;

    match member.edit(ctx.serenity_context(), |m| m.mute(true)).await {
        Ok(_) => {
            ctx.say(format!(
                "\u{1F507} <@{}> has been muted for {} minutes by Knight {}",
                member.user.id.as_u64(), duration, author
            )).await?;

            // Cooperative sleep; only this command's flow waits. If the
            // process restarts mid-delay, the unmute is lost.
            tokio::time::sleep(Duration::from_secs(duration * 60)).await;

            match member.edit(ctx.serenity_context(), |m| m.mute(false)).await {
                Ok(_) => {
                    ctx.say(format!("\u{1F50A} <@{}> has been unmuted", member.user.id.as_u64())).await?;
                }
                Err(err) if is_forbidden(&err) => {
                    ctx.say("I don't have permission to mute members!").await?;
                }
                Err(err) => return Err(err.into())
            }
        }
        Err(err) if is_forbidden(&err) => {
            ctx.say("I don't have permission to mute members!").await?;
        }
        Err(err) => return Err(err.into())
    }

    Ok(())
}
