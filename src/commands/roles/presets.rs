use crate::{Error, StewardContext};
use crate::util::{is_forbidden, title_case};
use tracing::error;
use super::attrs::{find_template, format_role_info, template_info};

#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_ROLES",
    description_localized("en-US", "Create a role from a predefined template.")
)]
pub async fn createrolepreset(
    ctx: StewardContext<'_>,
    #[description = "One of: lesser_creature, knight, king, god"] template_name: String,
    #[description = "Optional custom name for the new role"] role_name: Option<String>)
-> Result<(), Error> {
    if let Some(guild_id) = ctx.guild_id() {
        let template_name = template_name.to_lowercase();

        let template = match find_template(&template_name) {
            Some(template) => template,
            None => {
                ctx.say(format!("Template '{}' not found!\n\n{}", template_name, template_info())).await?;
                return Ok(());
            }
        };

        let name = role_name.unwrap_or_else(|| title_case(&template_name));

        let created = guild_id.create_role(&ctx.serenity_context().http, |r| r
            .name(&name)
            .colour(u64::from(template.colour.0))
            .permissions(template.permissions)
            .hoist(template.hoist)
            .mentionable(template.mentionable)).await;

        match created {
            Ok(role) => {
                {
                    let mut last_created = ctx.data().last_created_role.write().await;
                    last_created.insert(guild_id, role.id);
                }

                ctx.say(format!(
                    "Created role <@&{}> using the {} template!\n```\n{}\n```",
                    role.id.as_u64(),
                    template_name,
                    format_role_info(&role)
                )).await?;
            }
            Err(err) if is_forbidden(&err) => {
                ctx.say("I don't have permission to create roles!").await?;
            }
            Err(err) => {
                error!("Failed to create role from template: {}", err);
                ctx.say("Failed to create role. Please try again.").await?;
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
    description_localized("en-US", "List all available role templates and their details.")
)]
pub async fn listtemplates(ctx: StewardContext<'_>) -> Result<(), Error> {
    ctx.say(format!("```\n{}\n```", template_info())).await?;
    Ok(())
}
