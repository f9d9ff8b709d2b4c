use regex::Regex;
use serenity::model::permissions::Permissions;
use serenity::model::guild::Role;
use serenity::utils::Colour;

/// Short permission aliases accepted by `createrole perms=`. A `-` prefix on
/// an alias clears the flag instead of setting it.
const PERMISSION_ALIASES: [(&str, Permissions); 15] = [
    ("admin", Permissions::ADMINISTRATOR),
    ("kick", Permissions::KICK_MEMBERS),
    ("ban", Permissions::BAN_MEMBERS),
    ("manage_roles", Permissions::MANAGE_ROLES),
    ("manage_channels", Permissions::MANAGE_CHANNELS),
    ("manage_messages", Permissions::MANAGE_MESSAGES),
    ("mention_everyone", Permissions::MENTION_EVERYONE),
    ("mute", Permissions::MUTE_MEMBERS),
    ("deafen", Permissions::DEAFEN_MEMBERS),
    ("move", Permissions::MOVE_MEMBERS),
    ("view_channels", Permissions::VIEW_CHANNEL),
    ("send_messages", Permissions::SEND_MESSAGES),
    ("read_messages", Permissions::READ_MESSAGE_HISTORY),
    ("attach_files", Permissions::ATTACH_FILES),
    ("add_reactions", Permissions::ADD_REACTIONS),
];

/// Converts a color name or 6-digit hex string to a Colour. Unrecognized
/// input falls back to the default (colorless) value.
pub fn parse_color(color_str: &str) -> Colour {
    match color_str.to_lowercase().as_str() {
        "red" => Colour::RED,
        "blue" => Colour::BLUE,
        "green" => Colour::new(0x2ECC71),
        "yellow" => Colour::GOLD,
        "purple" => Colour::PURPLE,
        "orange" => Colour::ORANGE,
        "white" => Colour::LIGHT_GREY,
        "black" => Colour::default(),
        other => {
            let hex = Regex::new(r"^#?([A-Fa-f0-9]{6})$").unwrap();
            if let Some(captures) = hex.captures(other) {
                // The pattern guarantees six hex digits.
                Colour::new(u32::from_str_radix(&captures[1], 16).unwrap())
            } else {
                Colour::default()
            }
        }
    }
}

/// Converts a comma-separated alias list into a permission set, starting
/// from no permissions. Unknown aliases are ignored.
pub fn parse_permissions(permission_str: &str) -> Permissions {
    let mut permissions = Permissions::empty();

    for alias in permission_str.to_lowercase().split(',') {
        let alias = alias.trim();
        let (alias, grant) = match alias.strip_prefix('-') {
            Some(negated) => (negated, false),
            None => (alias, true)
        };

        if let Some((_, flag)) = PERMISSION_ALIASES.iter().find(|(name, _)| *name == alias) {
            if grant {
                permissions.insert(*flag);
            } else {
                permissions.remove(*flag);
            }
        }
    }

    permissions
}

/// Options for a new role, parsed from trailing `key=value` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOptions {
    pub colour: Colour,
    pub permissions: Permissions,
    pub mentionable: bool,
    pub hoist: bool,
}

impl RoleOptions {
    pub fn parse(args: &str) -> Self {
        let pairs: Vec<(&str, &str)> = args.split_whitespace()
            .filter_map(|token| token.split_once('='))
            .collect();

        let lookup = |key: &str| pairs.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| *v);

        RoleOptions {
            colour: parse_color(lookup("color").unwrap_or("default")),
            permissions: lookup("perms").map(parse_permissions).unwrap_or_else(Permissions::empty),
            mentionable: lookup("mentionable").unwrap_or("false").to_lowercase() == "true",
            hoist: lookup("hoisted").unwrap_or("false").to_lowercase() == "true",
        }
    }
}

/// A predefined role configuration.
pub struct RoleTemplate {
    pub name: &'static str,
    pub colour: Colour,
    pub permissions: Permissions,
    pub hoist: bool,
    pub mentionable: bool,
    pub description: &'static str,
}

pub fn role_templates() -> [RoleTemplate; 4] {
    [
        RoleTemplate {
            name: "lesser_creature",
            colour: Colour::LIGHT_GREY,
            permissions: Permissions::VIEW_CHANNEL
                | Permissions::READ_MESSAGE_HISTORY
                | Permissions::SEND_MESSAGES
                | Permissions::ADD_REACTIONS,
            hoist: false,
            mentionable: false,
            description: "Basic member with limited permissions",
        },
        RoleTemplate {
            name: "knight",
            colour: Colour::BLUE,
            permissions: Permissions::VIEW_CHANNEL
                | Permissions::READ_MESSAGE_HISTORY
                | Permissions::SEND_MESSAGES
                | Permissions::ADD_REACTIONS
                | Permissions::ATTACH_FILES
                | Permissions::MENTION_EVERYONE
                | Permissions::MUTE_MEMBERS
                | Permissions::DEAFEN_MEMBERS,
            hoist: true,
            mentionable: true,
            description: "Trusted member with moderate permissions",
        },
        RoleTemplate {
            // Kings don't get full admin.
            name: "king",
            colour: Colour::GOLD,
            permissions: Permissions::MANAGE_ROLES
                | Permissions::MANAGE_CHANNELS
                | Permissions::MANAGE_MESSAGES
                | Permissions::KICK_MEMBERS
                | Permissions::BAN_MEMBERS
                | Permissions::MENTION_EVERYONE
                | Permissions::MUTE_MEMBERS
                | Permissions::DEAFEN_MEMBERS
                | Permissions::MOVE_MEMBERS,
            hoist: true,
            mentionable: true,
            description: "High-level administrator with extensive control",
        },
        RoleTemplate {
            name: "god",
            colour: Colour::PURPLE,
            permissions: Permissions::ADMINISTRATOR,
            hoist: true,
            mentionable: true,
            description: "Supreme role with complete server control",
        },
    ]
}

pub fn find_template(name: &str) -> Option<RoleTemplate> {
    role_templates().into_iter().find(|template| template.name == name)
}

pub fn format_role_info(role: &Role) -> String {
    let mut info = vec![
        format!("Role: {}", role.name),
        format!("ID: {}", role.id),
        format!("Color: #{:06x}", role.colour.0),
        format!("Position: {}", role.position),
        format!("Mentionable: {}", role.mentionable),
        format!("Hoisted: {}", role.hoist),
        "\nPermissions:".to_string(),
    ];

    for name in role.permissions.get_permission_names() {
        info.push(format!("\u{2705} {name}"));
    }

    info.join("\n")
}

pub fn template_info() -> String {
    let mut info = vec!["Available Role Templates:".to_string()];

    for template in role_templates() {
        info.push(format!("\n{}:", crate::util::title_case(template.name)));
        info.push(format!("Description: {}", template.description));
        info.push(format!("Key Permissions: {}", template.permissions.get_permission_names().join(", ")));
    }

    info.join("\n")
}

#[cfg(test)]
mod test {
    use super::{find_template, parse_color, parse_permissions, role_templates, RoleOptions};
    use serenity::model::permissions::Permissions;
    use serenity::utils::Colour;

    #[test]
    fn test_parse_color_is_case_insensitive() {
        assert_eq!(parse_color("RED"), parse_color("red"));
        assert_eq!(parse_color("red"), Colour::RED);
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#1a2b3c"), Colour::new(0x1A2B3C));
        assert_eq!(parse_color("1a2b3c"), Colour::new(0x1A2B3C));
        assert_eq!(parse_color("#1a2b3c"), parse_color("1a2b3c"));
    }

    #[test]
    fn test_parse_color_fallback() {
        assert_eq!(parse_color("notacolor"), Colour::default());
        assert_eq!(parse_color("#12345"), Colour::default());
        assert_eq!(parse_color("#1234567"), Colour::default());
    }

    #[test]
    fn test_parse_permissions_negation() {
        let permissions = parse_permissions("kick,-ban");
        assert!(permissions.contains(Permissions::KICK_MEMBERS));
        assert!(!permissions.contains(Permissions::BAN_MEMBERS));
    }

    #[test]
    fn test_parse_permissions_ignores_unknown() {
        let permissions = parse_permissions("kick, fly, ban");
        assert_eq!(permissions, Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS);
    }

    #[test]
    fn test_parse_permissions_empty() {
        assert_eq!(parse_permissions(""), Permissions::empty());
    }

    #[test]
    fn test_role_options_full() {
        let options = RoleOptions::parse("color=red perms=kick,ban mentionable=true hoisted=true");
        assert_eq!(options.colour, Colour::RED);
        assert_eq!(options.permissions, Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS);
        assert!(options.mentionable);
        assert!(options.hoist);
    }

    #[test]
    fn test_role_options_defaults() {
        let options = RoleOptions::parse("");
        assert_eq!(options.colour, Colour::default());
        assert_eq!(options.permissions, Permissions::empty());
        assert!(!options.mentionable);
        assert!(!options.hoist);
    }

    #[test]
    fn test_role_options_ignores_stray_tokens() {
        let options = RoleOptions::parse("whatever color=blue");
        assert_eq!(options.colour, Colour::BLUE);
    }

    #[test]
    fn test_templates() {
        assert_eq!(role_templates().len(), 4);

        let god = find_template("god").unwrap();
        assert!(god.permissions.contains(Permissions::ADMINISTRATOR));

        let king = find_template("king").unwrap();
        assert!(!king.permissions.contains(Permissions::ADMINISTRATOR));
        assert!(king.permissions.contains(Permissions::MANAGE_ROLES));

        assert!(find_template("emperor").is_none());
    }
}
