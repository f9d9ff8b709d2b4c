use serenity::model::id::RoleId;

/// A role as it sits in the guild's ordering. Index in the slice equals the
/// role's position; index 0 is always the everyone role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRole {
    pub id: RoleId,
    pub name: String,
}

impl GuildRole {
    pub fn new(id: impl Into<RoleId>, name: impl Into<String>) -> Self {
        GuildRole { id: id.into(), name: name.into() }
    }
}

/// What the user asked for, as parsed out of the trailing argument text.
/// `Other` covers every malformed shape; the resolver rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequest {
    Up { amount: Option<u64> },
    Down { amount: Option<u64> },
    Over { reference: String },
    Under { reference: String },
    MoveTo { anchor: String },
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    RoleNotFound(String),
    ReferenceNotFound(String),
    /// A `moveto` anchor that is neither `top` nor `bottom`.
    InvalidPosition,
    InvalidSpec,
}

const DIRECTION_KEYWORDS: [&str; 8] = ["move", "up", "down", "over", "under", "moveto", "top", "bottom"];

/// Splits the raw argument text into a role name and a move request.
///
/// Everything up to the first direction keyword is the role name (so names
/// with spaces work); the rest is the direction. The scan is case-insensitive
/// on keywords but the role and reference names keep their exact spelling.
pub fn parse_move_request(args: &str) -> (String, MoveRequest) {
    let parts: Vec<&str> = args.split(' ').collect();
    let mut role_name = String::new();
    let mut direction = String::new();

    for (i, part) in parts.iter().enumerate() {
        if DIRECTION_KEYWORDS.contains(&part.to_lowercase().as_str()) {
            direction = parts[i..].join(" ");
            break;
        }

        role_name.push_str(part);
        role_name.push(' ');
    }

    let role_name = role_name.trim().to_string();

    let request = if direction.starts_with("move over") || direction.starts_with("move under") {
        let mut tokens = direction.splitn(3, ' ');
        tokens.next();
        match (tokens.next(), tokens.next()) {
            (Some("over"), Some(reference)) => MoveRequest::Over { reference: reference.to_string() },
            (Some("under"), Some(reference)) => MoveRequest::Under { reference: reference.to_string() },
            _ => MoveRequest::Other
        }
    } else if direction.starts_with("move up") || direction.starts_with("move down") {
        let tokens: Vec<&str> = direction.split(' ').collect();
        let amount = tokens.get(2)
            .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
            .and_then(|token| token.parse::<u64>().ok());

        match tokens.get(1) {
            Some(&"up") => MoveRequest::Up { amount },
            Some(&"down") => MoveRequest::Down { amount },
            _ => MoveRequest::Other
        }
    } else if direction.starts_with("moveto") {
        match direction.split(' ').nth(1) {
            Some(anchor) => MoveRequest::MoveTo { anchor: anchor.to_string() },
            None => MoveRequest::Other
        }
    } else {
        MoveRequest::Other
    };

    (role_name, request)
}

/// Computes the new total ordering for a guild's roles.
///
/// `roles` must be the full role list sorted by position ascending. The
/// returned mapping assigns positions 0..N-1, each exactly once. The move is
/// remove-then-insert: the target is popped from its current index and
/// inserted into the shortened list, so a downward move lands one past the
/// reference role relative to the original sequence. That matches the
/// platform-visible behavior users already rely on; do not "fix" it here.
pub fn resolve_move(
    roles: &[GuildRole],
    target: &str,
    request: &MoveRequest,
) -> Result<Vec<(RoleId, u64)>, MoveError> {
    let current_index = roles.iter()
        .position(|role| role.name == target)
        .ok_or_else(|| MoveError::RoleNotFound(target.to_string()))?;

    let last = roles.len() - 1;

    let new_index = match request {
        MoveRequest::Up { amount: Some(amount) } if *amount > 0 => {
            // The everyone role holds index 0; nothing moves past it.
            current_index.saturating_sub(*amount as usize).max(1)
        }
        MoveRequest::Down { amount: Some(amount) } if *amount > 0 => {
            (current_index + *amount as usize).min(last)
        }
        MoveRequest::Over { reference } => {
            roles.iter()
                .position(|role| &role.name == reference)
                .ok_or_else(|| MoveError::ReferenceNotFound(reference.clone()))?
                .saturating_sub(1)
        }
        MoveRequest::Under { reference } => {
            roles.iter()
                .position(|role| &role.name == reference)
                .ok_or_else(|| MoveError::ReferenceNotFound(reference.clone()))?
                + 1
        }
        MoveRequest::MoveTo { anchor } => {
            if anchor.eq_ignore_ascii_case("top") {
                1
            } else if anchor.eq_ignore_ascii_case("bottom") {
                last
            } else {
                return Err(MoveError::InvalidPosition);
            }
        }
        _ => return Err(MoveError::InvalidSpec)
    };

    let mut ordering: Vec<&GuildRole> = roles.iter().collect();
    let moved = ordering.remove(current_index);
    // Inserting past the end appends, same as the platform's list semantics.
    let insert_index = new_index.min(ordering.len());
    ordering.insert(insert_index, moved);

    Ok(ordering.iter()
        .enumerate()
        .map(|(position, role)| (role.id, position as u64))
        .collect())
}

#[cfg(test)]
mod test {
    use super::{parse_move_request, resolve_move, GuildRole, MoveError, MoveRequest};
    use serenity::model::id::RoleId;

    fn realm() -> Vec<GuildRole> {
        vec![
            GuildRole::new(1u64, "@everyone"),
            GuildRole::new(2u64, "Member"),
            GuildRole::new(3u64, "Knight"),
            GuildRole::new(4u64, "King"),
        ]
    }

    fn position_of(mapping: &[(RoleId, u64)], id: u64) -> u64 {
        mapping.iter().find(|(role, _)| *role == RoleId(id)).unwrap().1
    }

    #[test]
    fn test_parse_relative_move() {
        assert_eq!(
            parse_move_request("Knight move up 2"),
            ("Knight".to_string(), MoveRequest::Up { amount: Some(2) })
        );
        assert_eq!(
            parse_move_request("Knight move down 3"),
            ("Knight".to_string(), MoveRequest::Down { amount: Some(3) })
        );
    }

    #[test]
    fn test_parse_missing_amount() {
        assert_eq!(
            parse_move_request("Knight move up"),
            ("Knight".to_string(), MoveRequest::Up { amount: None })
        );
        assert_eq!(
            parse_move_request("Knight move down nope"),
            ("Knight".to_string(), MoveRequest::Down { amount: None })
        );
    }

    #[test]
    fn test_parse_reference_keeps_spaces() {
        assert_eq!(
            parse_move_request("Cool Cats move over The Elder Council"),
            ("Cool Cats".to_string(), MoveRequest::Over { reference: "The Elder Council".to_string() })
        );
        assert_eq!(
            parse_move_request("Knight move under Member"),
            ("Knight".to_string(), MoveRequest::Under { reference: "Member".to_string() })
        );
    }

    #[test]
    fn test_parse_moveto() {
        assert_eq!(
            parse_move_request("Knight moveto top"),
            ("Knight".to_string(), MoveRequest::MoveTo { anchor: "top".to_string() })
        );
        assert_eq!(
            parse_move_request("Knight moveto bottom"),
            ("Knight".to_string(), MoveRequest::MoveTo { anchor: "bottom".to_string() })
        );
    }

    #[test]
    fn test_parse_malformed() {
        // A bare direction keyword without the `move` prefix is not a request.
        assert_eq!(parse_move_request("Knight up 2").1, MoveRequest::Other);
        assert_eq!(parse_move_request("Knight").1, MoveRequest::Other);
        assert_eq!(parse_move_request("Knight move over").1, MoveRequest::Other);
        assert_eq!(parse_move_request("Knight moveto").1, MoveRequest::Other);
        assert_eq!(parse_move_request("Knight flip").0, "Knight flip");
    }

    #[test]
    fn test_move_to_top() {
        let mapping = resolve_move(&realm(), "Knight", &MoveRequest::MoveTo { anchor: "top".to_string() }).unwrap();
        assert_eq!(position_of(&mapping, 1), 0);
        assert_eq!(position_of(&mapping, 3), 1);
        assert_eq!(position_of(&mapping, 2), 2);
        assert_eq!(position_of(&mapping, 4), 3);
    }

    #[test]
    fn test_positions_are_a_permutation() {
        let requests = [
            MoveRequest::Up { amount: Some(1) },
            MoveRequest::Down { amount: Some(7) },
            MoveRequest::MoveTo { anchor: "bottom".to_string() },
            MoveRequest::Under { reference: "Member".to_string() },
        ];

        for request in &requests {
            let mapping = resolve_move(&realm(), "Knight", request).unwrap();
            let mut positions: Vec<u64> = mapping.iter().map(|(_, p)| *p).collect();
            positions.sort_unstable();
            assert_eq!(positions, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_up_never_reaches_everyone() {
        let mapping = resolve_move(&realm(), "King", &MoveRequest::Up { amount: Some(50) }).unwrap();
        assert_eq!(position_of(&mapping, 4), 1);
        assert_eq!(position_of(&mapping, 1), 0);
    }

    #[test]
    fn test_down_clamps_to_bottom() {
        let mapping = resolve_move(&realm(), "Member", &MoveRequest::Down { amount: Some(50) }).unwrap();
        assert_eq!(position_of(&mapping, 2), 3);
    }

    #[test]
    fn test_missing_amount_is_invalid() {
        assert_eq!(
            resolve_move(&realm(), "Knight", &MoveRequest::Up { amount: None }),
            Err(MoveError::InvalidSpec)
        );
        assert_eq!(
            resolve_move(&realm(), "Knight", &MoveRequest::Down { amount: None }),
            Err(MoveError::InvalidSpec)
        );
    }

    #[test]
    fn test_zero_amount_is_invalid() {
        assert_eq!(
            resolve_move(&realm(), "Knight", &MoveRequest::Up { amount: Some(0) }),
            Err(MoveError::InvalidSpec)
        );
    }

    #[test]
    fn test_unknown_target() {
        assert_eq!(
            resolve_move(&realm(), "Paladin", &MoveRequest::MoveTo { anchor: "top".to_string() }),
            Err(MoveError::RoleNotFound("Paladin".to_string()))
        );
    }

    #[test]
    fn test_unknown_reference() {
        assert_eq!(
            resolve_move(&realm(), "Knight", &MoveRequest::Over { reference: "Paladin".to_string() }),
            Err(MoveError::ReferenceNotFound("Paladin".to_string()))
        );
    }

    #[test]
    fn test_name_matching_is_case_sensitive() {
        assert_eq!(
            resolve_move(&realm(), "knight", &MoveRequest::MoveTo { anchor: "top".to_string() }),
            Err(MoveError::RoleNotFound("knight".to_string()))
        );
    }

    #[test]
    fn test_bad_anchor() {
        assert_eq!(
            resolve_move(&realm(), "Knight", &MoveRequest::MoveTo { anchor: "middle".to_string() }),
            Err(MoveError::InvalidPosition)
        );
    }

    #[test]
    fn test_malformed_request() {
        assert_eq!(
            resolve_move(&realm(), "Knight", &MoveRequest::Other),
            Err(MoveError::InvalidSpec)
        );
    }

    #[test]
    fn test_under_when_moving_down_lands_one_past() {
        // Removing Member first shifts Knight up, so the insert lands the
        // role under King rather than directly under Knight. Long-standing
        // behavior; keep it.
        let mapping = resolve_move(&realm(), "Member", &MoveRequest::Under { reference: "Knight".to_string() }).unwrap();
        assert_eq!(position_of(&mapping, 3), 1);
        assert_eq!(position_of(&mapping, 4), 2);
        assert_eq!(position_of(&mapping, 2), 3);
    }

    #[test]
    fn test_under_when_moving_up_is_exact() {
        let mapping = resolve_move(&realm(), "King", &MoveRequest::Under { reference: "Member".to_string() }).unwrap();
        assert_eq!(position_of(&mapping, 2), 1);
        assert_eq!(position_of(&mapping, 4), 2);
        assert_eq!(position_of(&mapping, 3), 3);
    }

    #[test]
    fn test_over_when_moving_down_is_exact() {
        let mapping = resolve_move(&realm(), "Member", &MoveRequest::Over { reference: "King".to_string() }).unwrap();
        assert_eq!(position_of(&mapping, 3), 1);
        assert_eq!(position_of(&mapping, 2), 2);
        assert_eq!(position_of(&mapping, 4), 3);
    }

    #[test]
    fn test_under_last_role_appends() {
        let mapping = resolve_move(&realm(), "Member", &MoveRequest::Under { reference: "King".to_string() }).unwrap();
        assert_eq!(position_of(&mapping, 2), 3);
        assert_eq!(position_of(&mapping, 4), 2);
    }

    #[test]
    fn test_up_then_down_round_trip() {
        let roles = realm();
        let up = resolve_move(&roles, "King", &MoveRequest::Up { amount: Some(2) }).unwrap();

        let reordered: Vec<GuildRole> = {
            let mut pairs = up.clone();
            pairs.sort_by_key(|(_, position)| *position);
            pairs.iter()
                .map(|(id, _)| roles.iter().find(|role| role.id == *id).unwrap().clone())
                .collect()
        };
        assert_eq!(position_of(&up, 4), 1);

        let down = resolve_move(&reordered, "King", &MoveRequest::Down { amount: Some(2) }).unwrap();
        assert_eq!(position_of(&down, 4), 3);
    }

    #[test]
    fn test_single_role_guild() {
        let roles = vec![GuildRole::new(1u64, "@everyone")];
        let mapping = resolve_move(&roles, "@everyone", &MoveRequest::MoveTo { anchor: "bottom".to_string() }).unwrap();
        assert_eq!(mapping, vec![(RoleId(1), 0)]);
    }
}
