//! Pure query operations over a collection snapshot.
//!
//! Both functions are side-effect free and stable: the same snapshot and
//! arguments always yield the same result, in the collection's own order.

use data_profile::Profile;

/// Facet criteria for [`filter`]. Omitted facets always match; supplied
/// facets require a case-insensitive exact match, so records lacking the
/// field are excluded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFilter {
    pub city: Option<String>,
    pub profession: Option<String>,
}

impl ProfileFilter {
    pub fn by_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Default::default()
        }
    }

    pub fn by_profession(profession: impl Into<String>) -> Self {
        Self {
            profession: Some(profession.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.profession.is_none()
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        if let Some(city) = &self.city {
            match &profile.city {
                Some(value) if eq_ignore_case(value, city) => {}
                _ => return false,
            }
        }
        if let Some(profession) = &self.profession {
            match &profile.profession {
                Some(value) if eq_ignore_case(value, profession) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Case-insensitive substring search over `name`, `description`, `address`,
/// `profession`, `city` and each `interests` entry. An empty or whitespace
/// query returns the whole snapshot.
pub fn search<'a>(profiles: &'a [Profile], query: &str) -> Vec<&'a Profile> {
    let query = query.trim();
    if query.is_empty() {
        return profiles.iter().collect();
    }

    let needle = query.to_lowercase();
    profiles
        .iter()
        .filter(|profile| {
            contains_ignore_case(&profile.name, &needle)
                || contains_ignore_case(&profile.description, &needle)
                || contains_ignore_case(&profile.address, &needle)
                || profile
                    .profession
                    .as_deref()
                    .map_or(false, |value| contains_ignore_case(value, &needle))
                || profile
                    .city
                    .as_deref()
                    .map_or(false, |value| contains_ignore_case(value, &needle))
                || profile
                    .interests
                    .iter()
                    .any(|interest| contains_ignore_case(interest, &needle))
        })
        .collect()
}

/// Intersection of the supplied facet criteria.
pub fn filter<'a>(profiles: &'a [Profile], criteria: &ProfileFilter) -> Vec<&'a Profile> {
    profiles
        .iter()
        .filter(|profile| criteria.matches(profile))
        .collect()
}

// `needle` must already be lowercased.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
