use crate::{Error, StewardContext};
use crate::util::is_forbidden;
use rand::seq::SliceRandom;
use serenity::model::channel::ChannelType;
use serenity::model::guild::Member;
use serenity::model::permissions::Permissions;
use serenity::utils::Colour;
use std::time::Duration;
use super::author_display_name;

const SMITE_MESSAGES: [&str; 4] = [
    "\u{26A1} Divine lightning strikes {user}!",
    "\u{1F30B} The heavens open up to cast {user} into the abyss!",
    "\u{1F4AB} {user} has been banished to the shadow realm!",
    "\u{1F31F} {user} faces divine judgment!",
];

const BLESSINGS: [(Permissions, &str); 4] = [
    (Permissions::ATTACH_FILES, "share sacred scrolls"),
    (Permissions::MENTION_EVERYONE, "call upon all believers"),
    (Permissions::MANAGE_MESSAGES, "moderate divine messages"),
    (Permissions::MOVE_MEMBERS, "guide lost souls"),
];

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    check = "crate::commands::royal::is_god",
    description_localized("en-US", "Ban a user dramatically.")
)]
pub async fn godsmite(
    ctx: StewardContext<'_>,
    #[description = "The member to smite"] member: Member,
    #[description = "The reason for the smiting"] #[rest] reason: Option<String>)
-> Result<(), Error> {
    let reason = reason.unwrap_or_else(|| "Divine judgment".to_string());
    let author = author_display_name(&ctx).await;

    let message = SMITE_MESSAGES.choose(&mut rand::thread_rng())
        .unwrap_or(&SMITE_MESSAGES[0])
        .replace("{user}", &member.user.name);

    ctx.say(message).await?;

    // Dramatic pause.
    tokio::time::sleep(Duration::from_secs(2)).await;

    match member.ban_with_reason(ctx.serenity_context(), 0, &format!("Smited by God {author}: {reason}")).await {
        Ok(_) => {
            ctx.say(format!("The divine will has been carried out. {} has been banished! \u{26A1}", member.user.name)).await?;
        }
        Err(err) if is_forbidden(&err) => {
            ctx.say("I lack the divine permission to smite!").await?;
        }
        Err(err) => return Err(err.into())
    }

    Ok(())
}

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    check = "crate::commands::royal::is_god",
    description_localized("en-US", "Grant a random special permission to a user.")
)]
pub async fn godblessing(
    ctx: StewardContext<'_>,
    #[description = "The member to bless"] member: Member)
-> Result<(), Error> {
    if let Some(guild_id) = ctx.guild_id() {
        let (permission, power) = *BLESSINGS.choose(&mut rand::thread_rng())
            .unwrap_or(&BLESSINGS[0]);

        let created = guild_id.create_role(&ctx.serenity_context().http, |r| r
            .name(&format!("Blessed with {power}"))
            .permissions(permission)
            .colour(u64::from(Colour::PURPLE.0))).await;

        match created {
            Ok(role) => {
                let mut member = member;

                match member.add_role(&ctx.serenity_context().http, role.id).await {
                    Ok(_) => {
                        ctx.say(format!(
                            "\u{2728} <@{}> has been blessed with the power to {}!",
                            member.user.id.as_u64(), power
                        )).await?;
                    }
                    Err(err) if is_forbidden(&err) => {
                        ctx.say("I lack the divine permission to grant blessings!").await?;
                    }
                    Err(err) => return Err(err.into())
                }
            }
            Err(err) if is_forbidden(&err) => {
                ctx.say("I lack the divine permission to grant blessings!").await?;
            }
            Err(err) => return Err(err.into())
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
    check = "crate::commands::royal::is_god",
    description_localized("en-US", "Send a divine message to every text channel.")
)]
pub async fn godspeak(
    ctx: StewardContext<'_>,
    #[description = "The divine message"] #[rest] message: String)
-> Result<(), Error> {
    if let Some(guild_id) = ctx.guild_id() {
        let author = author_display_name(&ctx).await;

        let channels = guild_id.channels(&ctx.serenity_context().http).await?;
        let mut text_channels: Vec<_> = channels.values()
            .filter(|channel| channel.kind == ChannelType::Text)
            .collect();
        text_channels.sort_by_key(|channel| (channel.position, channel.id));

        let mut sent_count = 0;

        for channel in text_channels {
            let sent = channel.id.send_message(&ctx.serenity_context().http, |m| m.embed(|e| e
                .title("\u{1F4FF} Divine Message")
                .description(&message)
                .colour(Colour::PURPLE)
                .footer(|f| f.text(format!("Spoken by {author}, Voice of the Divine")))
            )).await;

            match sent {
                Ok(_) => sent_count += 1,
                Err(err) if is_forbidden(&err) => continue,
                Err(err) => return Err(err.into())
            }
        }

        ctx.say(format!("Your divine message has been spread to {sent_count} channels! \u{1F64F}")).await?;
    } else {
        ctx.say("This command can only be run in a server.").await?;
    }

    Ok(())
}
