use std::collections::HashSet;

use itertools::Itertools;

use data_error::{DirectoryError, GeocodeError, Result};
use data_geocode::Geocoder;
use data_profile::{Profile, ProfileDraft, ProfileId, ProfilePatch};

use crate::query::{self, ProfileFilter};

/// The record committed by [`Directory::add`] or [`Directory::update`].
///
/// A geocoding failure does not abort the mutation; it rides along here so
/// the caller can notify the user and decide whether to retry.
#[derive(Debug)]
pub struct Committed {
    pub profile: Profile,
    pub geocode_failure: Option<GeocodeError>,
}

/// Sole owner of the profile collection and the current selection.
///
/// The collection keeps insertion order; every mutation goes through a
/// `&mut` method, so concurrent writers are unrepresentable. Mutations that
/// involve an address run the injected [`Geocoder`] and suspend at that
/// await without blocking unrelated work.
///
/// Views observe changes by re-reading after a mutation;
/// [`Directory::revision`] is bumped by every effective change, so polling
/// it is enough to know whether a re-render is due.
pub struct Directory<G> {
    label: String,
    geocoder: G,
    profiles: Vec<Profile>,
    selected: Option<ProfileId>,
    revision: u64,
}

impl<G: Geocoder> Directory<G> {
    /// Create an empty directory with a diagnostic label used in log lines.
    pub fn new(label: impl Into<String>, geocoder: G) -> Self {
        Self {
            label: label.into(),
            geocoder,
            profiles: Vec::new(),
            selected: None,
            revision: 0,
        }
    }

    /// Create a directory seeded with existing records.
    ///
    /// Seed ids must be pairwise distinct; a duplicate is a
    /// [`DirectoryError::Collision`].
    pub fn with_profiles(
        label: impl Into<String>,
        geocoder: G,
        profiles: Vec<Profile>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(&profile.id) {
                return Err(DirectoryError::Collision(profile.id.to_string()));
            }
        }

        let mut directory = Self::new(label, geocoder);
        directory.profiles = profiles;
        Ok(directory)
    }

    /// The collection, in insertion order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| &profile.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Monotonic counter bumped by every effective mutation, selection
    /// changes included.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn selected_id(&self) -> Option<&ProfileId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Profile> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Replace the selection. `None` clears it; selecting an id that is not
    /// in the collection is a [`DirectoryError::NotFound`].
    pub fn select(&mut self, id: Option<ProfileId>) -> Result<()> {
        if let Some(id) = &id {
            if self.get(id).is_none() {
                return Err(DirectoryError::NotFound(id.to_string()));
            }
        }
        if self.selected != id {
            self.selected = id;
            self.revision += 1;
            log::debug!(
                "store/{}: selection is now {:?}",
                self.label,
                self.selected
            );
        }
        Ok(())
    }

    /// Validate the draft, assign a fresh id, geocode the address and append
    /// the record to the collection.
    ///
    /// A geocoding failure leaves `location` absent and is reported in the
    /// returned [`Committed`] instead of aborting the add.
    pub async fn add(&mut self, draft: ProfileDraft) -> Result<Committed> {
        draft.validate()?;

        let id = self.fresh_id();
        let (location, geocode_failure) = match self.geocoder.geocode(&draft.address).await {
            Ok(point) => (Some(point), None),
            Err(err) => {
                log::warn!(
                    "store/{}: could not geocode \"{}\": {}",
                    self.label,
                    draft.address,
                    err
                );
                (None, Some(err))
            }
        };

        let profile = draft.into_profile(id, location);
        self.profiles.push(profile.clone());
        self.revision += 1;
        log::info!(
            "store/{}: added profile {} ({})",
            self.label,
            profile.id,
            profile.name
        );

        Ok(Committed {
            profile,
            geocode_failure,
        })
    }

    /// Merge `patch` into the record with the given id.
    ///
    /// An unknown id is a [`DirectoryError::NotFound`]. When the patch
    /// carries an address the location is re-derived: on geocoding failure
    /// it is cleared rather than left stale, and the failure is reported in
    /// the returned [`Committed`]. Nothing is written until the patched
    /// record has passed validation.
    pub async fn update(&mut self, id: &ProfileId, patch: ProfilePatch) -> Result<Committed> {
        let position = self
            .profiles
            .iter()
            .position(|profile| &profile.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

        let mut updated = self.profiles[position].clone();
        patch.apply(&mut updated);
        updated.validate()?;

        let mut geocode_failure = None;
        if patch.address.is_some() {
            match self.geocoder.geocode(&updated.address).await {
                Ok(point) => updated.location = Some(point),
                Err(err) => {
                    log::warn!(
                        "store/{}: could not geocode \"{}\": {}",
                        self.label,
                        updated.address,
                        err
                    );
                    updated.location = None;
                    geocode_failure = Some(err);
                }
            }
        }

        self.profiles[position] = updated.clone();
        self.revision += 1;
        log::info!("store/{}: updated profile {}", self.label, id);

        Ok(Committed {
            profile: updated,
            geocode_failure,
        })
    }

    /// Remove and return the record with the given id, clearing the
    /// selection if it pointed at it. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &ProfileId) -> Option<Profile> {
        let position = self
            .profiles
            .iter()
            .position(|profile| &profile.id == id)?;

        let removed = self.profiles.remove(position);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
            log::debug!("store/{}: cleared selection of removed {}", self.label, id);
        }
        self.revision += 1;
        log::info!("store/{}: removed profile {}", self.label, id);
        Some(removed)
    }

    /// See [`query::search`].
    pub fn search(&self, query: &str) -> Vec<&Profile> {
        query::search(&self.profiles, query)
    }

    /// See [`query::filter`].
    pub fn filter(&self, criteria: &ProfileFilter) -> Vec<&Profile> {
        query::filter(&self.profiles, criteria)
    }

    /// Distinct cities present in the collection, first-seen order.
    pub fn cities(&self) -> Vec<String> {
        self.profiles
            .iter()
            .filter_map(|profile| profile.city.clone())
            .unique()
            .collect()
    }

    /// Distinct professions present in the collection, first-seen order.
    pub fn professions(&self) -> Vec<String> {
        self.profiles
            .iter()
            .filter_map(|profile| profile.profession.clone())
            .unique()
            .collect()
    }

    // Generated ids are UUIDs, so a collision with a live record is already
    // vanishingly unlikely; the loop makes the uniqueness invariant
    // unconditional anyway.
    fn fresh_id(&self) -> ProfileId {
        loop {
            let id = ProfileId::fresh();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
