use data_profile::{ProfileDraft, ProfilePatch, Socials};

use crate::error::AppError;

/// Split a `key:value,key:value` list into pairs.
///
/// Values may not contain ',' or ':'; anything richer goes through `--json`.
pub fn key_value_pairs(s: &str) -> Result<Vec<(String, String)>, AppError> {
    let mut values = Vec::new();

    for pair in s.split(',') {
        let key_value: Vec<&str> = pair.split(':').collect();
        if key_value.len() != 2 {
            return Err(AppError::InvalidFieldPair);
        }
        values.push((
            key_value[0].trim().to_string(),
            key_value[1].trim().to_string(),
        ));
    }

    Ok(values)
}

/// Build a partial update from parsed pairs. `interests` takes a
/// ';'-separated list; `twitter`/`linkedin`/`facebook` land in `socials`.
pub fn patch_from_pairs(pairs: &[(String, String)]) -> Result<ProfilePatch, AppError> {
    let mut patch = ProfilePatch::default();

    for (key, value) in pairs {
        match key.as_str() {
            "name" => patch.name = Some(value.clone()),
            "image" => patch.image = Some(value.clone()),
            "description" => patch.description = Some(value.clone()),
            "address" => patch.address = Some(value.clone()),
            "email" => patch.email = Some(value.clone()),
            "phone" => patch.phone = Some(value.clone()),
            "profession" => patch.profession = Some(value.clone()),
            "city" => patch.city = Some(value.clone()),
            "interests" => {
                patch.interests = Some(
                    value
                        .split(';')
                        .map(|entry| entry.trim().to_string())
                        .filter(|entry| !entry.is_empty())
                        .collect(),
                )
            }
            "twitter" => socials(&mut patch).twitter = Some(value.clone()),
            "linkedin" => socials(&mut patch).linkedin = Some(value.clone()),
            "facebook" => socials(&mut patch).facebook = Some(value.clone()),
            other => return Err(AppError::UnknownField(other.to_owned())),
        }
    }

    Ok(patch)
}

/// Build a creation draft from parsed pairs. Required fields left out here
/// are caught by the store's validation.
pub fn draft_from_pairs(pairs: &[(String, String)]) -> Result<ProfileDraft, AppError> {
    let patch = patch_from_pairs(pairs)?;

    let mut draft = ProfileDraft::new(
        patch.name.unwrap_or_default(),
        patch.description.unwrap_or_default(),
        patch.address.unwrap_or_default(),
    );
    draft.image = patch.image;
    draft.email = patch.email;
    draft.phone = patch.phone;
    draft.profession = patch.profession;
    draft.city = patch.city;
    if let Some(interests) = patch.interests {
        draft.interests = interests;
    }
    if let Some(socials) = patch.socials {
        draft.socials = socials;
    }
    Ok(draft)
}

fn socials(patch: &mut ProfilePatch) -> &mut Socials {
    patch.socials.get_or_insert_with(Socials::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_split_and_trimmed() {
        let pairs = key_value_pairs("name: Ada , city:London").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), "Ada".to_string()),
                ("city".to_string(), "London".to_string()),
            ]
        );
    }

    #[test]
    fn a_bare_value_is_rejected() {
        assert!(matches!(
            key_value_pairs("just-a-value"),
            Err(AppError::InvalidFieldPair)
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let pairs = key_value_pairs("shoe_size:44").unwrap();
        assert!(matches!(
            patch_from_pairs(&pairs),
            Err(AppError::UnknownField(key)) if key == "shoe_size"
        ));
    }

    #[test]
    fn interests_split_on_semicolons() {
        let pairs = key_value_pairs("interests:chess; sailing").unwrap();
        let patch = patch_from_pairs(&pairs).unwrap();
        assert_eq!(
            patch.interests,
            Some(vec!["chess".to_string(), "sailing".to_string()])
        );
    }

    #[test]
    fn social_handles_collect_into_socials() {
        let pairs = key_value_pairs("twitter:adal,linkedin:ada-lovelace").unwrap();
        let patch = patch_from_pairs(&pairs).unwrap();
        let socials = patch.socials.unwrap();
        assert_eq!(socials.twitter.as_deref(), Some("adal"));
        assert_eq!(socials.linkedin.as_deref(), Some("ada-lovelace"));
        assert_eq!(socials.facebook, None);
    }

    #[test]
    fn draft_collects_all_field_kinds() {
        let pairs = key_value_pairs(
            "name:Ada,description:Engineer,address:1 Analytical Way,city:London,interests:math",
        )
        .unwrap();
        let draft = draft_from_pairs(&pairs).unwrap();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.city.as_deref(), Some("London"));
        assert_eq!(draft.interests, vec!["math".to_string()]);
    }
}
