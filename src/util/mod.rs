use serenity::http::HttpError;
use serenity::prelude::SerenityError;

/// Whether an API error is Discord telling us we lack permission, as opposed
/// to a transient failure worth retrying.
pub fn is_forbidden(err: &SerenityError) -> bool {
    if let SerenityError::Http(inner) = err {
        if let HttpError::UnsuccessfulRequest(response) = &**inner {
            return response.status_code.as_u16() == 403;
        }
    }

    false
}

/// "lesser_creature" -> "Lesser Creature"
pub fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod test {
    use super::title_case;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("lesser_creature"), "Lesser Creature");
        assert_eq!(title_case("god"), "God");
        assert_eq!(title_case(""), "");
    }
}
