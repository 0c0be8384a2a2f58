use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use data_error::{DirectoryError, GeocodeError};
use data_geocode::Geocoder;
use data_profile::samples::samples;
use data_profile::{GeoPoint, Profile, ProfileDraft, ProfilePatch, Socials, PLACEHOLDER_IMAGE};
use profile_store::{Directory, ProfileFilter};

/// Deterministic fake: always resolves to the same point.
struct Pinned(GeoPoint);

#[async_trait]
impl Geocoder for Pinned {
    async fn geocode(&self, _address: &str) -> Result<GeoPoint, GeocodeError> {
        Ok(self.0)
    }
}

/// Deterministic fake: never resolves anything.
struct Failing;

#[async_trait]
impl Geocoder for Failing {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        Err(GeocodeError::NoMatch(address.to_owned()))
    }
}

/// Hands out the given points in order; panics when exhausted.
struct Scripted {
    points: Vec<GeoPoint>,
    next: Mutex<usize>,
}

impl Scripted {
    fn new(points: Vec<GeoPoint>) -> Self {
        Self {
            points,
            next: Mutex::new(0),
        }
    }
}

#[async_trait]
impl Geocoder for Scripted {
    async fn geocode(&self, _address: &str) -> Result<GeoPoint, GeocodeError> {
        let mut next = self.next.lock().unwrap();
        let point = self.points[*next];
        *next += 1;
        Ok(point)
    }
}

fn draft() -> ProfileDraft {
    let mut draft = ProfileDraft::new(
        "Nina Petrova",
        "Data engineer focused on streaming pipelines.",
        "14 Harbor Road, Portland, OR",
    );
    draft.email = Some("nina@example.com".to_owned());
    draft.profession = Some("Data Engineer".to_owned());
    draft.city = Some("Portland".to_owned());
    draft.interests = vec!["sailing".to_owned(), "chess".to_owned()];
    draft.socials = Socials {
        twitter: Some("ninap".to_owned()),
        ..Default::default()
    };
    draft
}

#[tokio::test]
async fn added_profiles_get_distinct_ids_in_insertion_order() {
    let mut directory = Directory::new("test", Pinned(GeoPoint::new(45.5, -122.6)));

    let mut added = Vec::new();
    for n in 0..10 {
        let mut draft = draft();
        draft.name = format!("Person {}", n);
        added.push(directory.add(draft).await.unwrap().profile.id);
    }

    let ids: HashSet<_> = added.iter().collect();
    assert_eq!(ids.len(), 10);

    let stored: Vec<_> = directory.profiles().iter().map(|p| &p.id).collect();
    assert_eq!(stored, added.iter().collect::<Vec<_>>());
}

#[tokio::test]
async fn add_round_trips_the_draft() {
    let point = GeoPoint::new(45.5231, -122.6765);
    let mut directory = Directory::new("test", Pinned(point));

    let committed = directory.add(draft()).await.unwrap();
    assert!(committed.geocode_failure.is_none());

    assert_eq!(directory.len(), 1);
    let stored = &directory.profiles()[0];
    assert_eq!(stored, &committed.profile);
    assert_eq!(stored.name, "Nina Petrova");
    assert_eq!(stored.address, "14 Harbor Road, Portland, OR");
    assert_eq!(stored.email.as_deref(), Some("nina@example.com"));
    assert_eq!(stored.interests, vec!["sailing", "chess"]);
    assert_eq!(stored.socials.twitter.as_deref(), Some("ninap"));
    assert_eq!(stored.image, PLACEHOLDER_IMAGE);
    assert_eq!(stored.location, Some(point));
}

#[tokio::test]
async fn add_survives_a_geocoding_failure() {
    let mut directory = Directory::new("test", Failing);

    let committed = directory.add(draft()).await.unwrap();
    assert!(matches!(
        committed.geocode_failure,
        Some(GeocodeError::NoMatch(_))
    ));
    assert_eq!(committed.profile.location, None);
    // The profile is created regardless.
    assert_eq!(directory.len(), 1);
}

#[tokio::test]
async fn add_rejects_missing_required_fields() {
    let mut directory = Directory::new("test", Failing);

    let mut blank = draft();
    blank.address = "  ".to_owned();
    let result = directory.add(blank).await;
    assert!(matches!(result, Err(DirectoryError::InvalidProfile(_))));
    assert!(directory.is_empty());
}

#[tokio::test]
async fn update_refreshes_the_location_for_a_new_address() {
    let old = GeoPoint::new(37.7749, -122.4194);
    let new = GeoPoint::new(41.8781, -87.6298);
    let mut directory = Directory::with_profiles(
        "test",
        Scripted::new(vec![new]),
        samples(),
    )
    .unwrap();
    assert_eq!(directory.get(&"1".into()).unwrap().location, Some(old));

    let patch = ProfilePatch {
        address: Some("789 Design Blvd, Chicago, IL".to_owned()),
        ..Default::default()
    };
    let committed = directory.update(&"1".into(), patch).await.unwrap();

    assert_eq!(committed.profile.location, Some(new));
    assert_eq!(directory.get(&"1".into()).unwrap().location, Some(new));
}

#[tokio::test]
async fn update_clears_the_location_when_regeocoding_fails() {
    let mut directory = Directory::with_profiles("test", Failing, samples()).unwrap();
    assert!(directory.get(&"1".into()).unwrap().location.is_some());

    let patch = ProfilePatch {
        address: Some("unresolvable".to_owned()),
        ..Default::default()
    };
    let committed = directory.update(&"1".into(), patch).await.unwrap();

    // A stale coordinate must never be paired with the new address.
    assert_eq!(committed.profile.location, None);
    assert!(committed.geocode_failure.is_some());
    let stored = directory.get(&"1".into()).unwrap();
    assert_eq!(stored.address, "unresolvable");
    assert_eq!(stored.location, None);
}

#[tokio::test]
async fn update_without_an_address_keeps_the_location() {
    let mut directory = Directory::with_profiles("test", Failing, samples()).unwrap();
    let before = directory.get(&"1".into()).unwrap().location;

    let patch = ProfilePatch {
        phone: Some("555-000-0000".to_owned()),
        ..Default::default()
    };
    let committed = directory.update(&"1".into(), patch).await.unwrap();

    assert!(committed.geocode_failure.is_none());
    assert_eq!(directory.get(&"1".into()).unwrap().location, before);
}

#[tokio::test]
async fn update_of_an_unknown_id_changes_nothing() {
    let mut directory = Directory::with_profiles("test", Failing, samples()).unwrap();
    let before: Vec<Profile> = directory.profiles().to_vec();
    let revision = directory.revision();

    let patch = ProfilePatch {
        name: Some("Nobody".to_owned()),
        ..Default::default()
    };
    let result = directory.update(&"missing".into(), patch).await;

    assert!(matches!(result, Err(DirectoryError::NotFound(id)) if id == "missing"));
    assert_eq!(directory.profiles(), &before[..]);
    assert_eq!(directory.revision(), revision);
}

#[tokio::test]
async fn update_rejects_a_patch_that_blanks_required_fields() {
    let mut directory = Directory::with_profiles("test", Failing, samples()).unwrap();

    let patch = ProfilePatch {
        name: Some(String::new()),
        ..Default::default()
    };
    let result = directory.update(&"1".into(), patch).await;

    assert!(matches!(result, Err(DirectoryError::InvalidProfile(_))));
    assert_eq!(directory.get(&"1".into()).unwrap().name, "Alex Johnson");
}

#[tokio::test]
async fn removed_profiles_stay_gone() {
    let mut directory = Directory::with_profiles("test", Failing, samples()).unwrap();

    let removed = directory.remove(&"3".into()).unwrap();
    assert_eq!(removed.name, "David Wilson");

    assert!(directory.get(&"3".into()).is_none());
    assert!(directory
        .search("")
        .iter()
        .all(|profile| profile.id != "3".into()));
    assert!(directory
        .filter(&ProfileFilter::by_city("Chicago"))
        .is_empty());
}

#[tokio::test]
async fn queries_see_mutations_immediately() {
    let mut directory = Directory::new("test", Pinned(GeoPoint::new(45.5, -122.6)));

    let committed = directory.add(draft()).await.unwrap();
    assert_eq!(directory.search("streaming").len(), 1);
    assert_eq!(
        directory.filter(&ProfileFilter::by_profession("data engineer")).len(),
        1
    );

    directory.remove(&committed.profile.id);
    assert!(directory.search("streaming").is_empty());
}
