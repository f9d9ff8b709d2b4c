use crate::{Error, StewardContext};
use crate::util::is_forbidden;
use serenity::model::guild::Member;
use serenity::utils::Colour;
use super::author_display_name;

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    check = "crate::commands::royal::is_king",
    description_localized("en-US", "Make a server-wide decree, pinned for posterity.")
)]
pub async fn kingdecree(
    ctx: StewardContext<'_>,
    #[description = "The royal decree"] #[rest] decree: String)
-> Result<(), Error> {
    let author = author_display_name(&ctx).await;

    let reply = ctx.send(|m| m.embed(|e| e
        .title("\u{1F451} Royal Decree")
        .description(&decree)
        .colour(Colour::GOLD)
        .footer(|f| f.text(format!("Decreed by King {author}")))
    )).await?;

    let message = reply.message().await?;
    if let Err(err) = message.pin(ctx.serenity_context()).await {
        if is_forbidden(&err) {
            ctx.say("Could not pin the decree (insufficient permissions)").await?;
        } else {
            return Err(err.into());
        }
    }

    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    check = "crate::commands::royal::is_king",
    description_localized("en-US", "Rename a user by royal decree.")
)]
pub async fn kingrename(
    ctx: StewardContext<'_>,
    #[description = "The member to rename"] member: Member,
    #[description = "Their new name"] #[rest] new_name: String)
-> Result<(), Error> {
    let old_name = member.display_name().to_string();

    match member.edit(ctx.serenity_context(), |m| m.nickname(&new_name)).await {
        Ok(_) => {
            ctx.say(format!("\u{1F451} By royal decree, {old_name} shall now be known as {new_name}")).await?;
        }
        Err(err) if is_forbidden(&err) => {
            ctx.say("I don't have permission to change nicknames!").await?;
        }
        Err(err) => return Err(err.into())
    }

    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    check = "crate::commands::royal::is_king",
    description_localized("en-US", "Kick a user from the server.")
)]
pub async fn kingexile(
    ctx: StewardContext<'_>,
    #[description = "The member to exile"] member: Member,
    #[description = "The reason for the exile"] #[rest] reason: Option<String>)
-> Result<(), Error> {
    let reason = reason.unwrap_or_else(|| "Royal decree".to_string());
    let author = author_display_name(&ctx).await;

    match member.kick_with_reason(ctx.serenity_context(), &format!("Exiled by King {author}: {reason}")).await {
        Ok(_) => {
            ctx.say(format!("\u{1F451} {} has been exiled from the realm!", member.user.name)).await?;
        }
        Err(err) if is_forbidden(&err) => {
            ctx.say("I don't have permission to exile members!").await?;
        }
        Err(err) => return Err(err.into())
    }

    Ok(())
}
