//! Tutorial use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Service layer remains storage-agnostic.

use crate::model::tutorial::{Tutorial, TutorialId};
use crate::repo::tutorial_repo::{RepoResult, TutorialRepository};

/// Use-case service wrapper for tutorial CRUD operations.
pub struct TutorialService<R: TutorialRepository> {
    repo: R,
}

impl<R: TutorialRepository> TutorialService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new tutorial and returns its store-assigned id.
    pub fn create(&self, tutorial: &Tutorial) -> RepoResult<TutorialId> {
        self.repo.save(tutorial)
    }

    /// Persists an unpublished tutorial from title/description input.
    ///
    /// # Contract
    /// - Sets `published = false`.
    /// - Returns the store-assigned id.
    pub fn create_draft(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> RepoResult<TutorialId> {
        self.repo.save(&Tutorial::new(title, description, false))
    }

    /// Overwrites an existing tutorial's fields by its id.
    ///
    /// Returns the affected-row count unchanged from the repository.
    pub fn update(&self, tutorial: &Tutorial) -> RepoResult<usize> {
        self.repo.update(tutorial)
    }

    /// Toggles the published flag through a full-row update.
    ///
    /// # Contract
    /// - Re-fetches the row first; all three columns are overwritten.
    /// - Returns the updated record, or `None` when the id is unknown.
    pub fn set_published(
        &self,
        id: TutorialId,
        published: bool,
    ) -> RepoResult<Option<Tutorial>> {
        let mut tutorial = match self.repo.find_by_id(id)? {
            Some(tutorial) => tutorial,
            None => return Ok(None),
        };

        tutorial.published = published;
        self.repo.update(&tutorial)?;
        Ok(Some(tutorial))
    }

    /// Gets one tutorial by id.
    pub fn get(&self, id: TutorialId) -> RepoResult<Option<Tutorial>> {
        self.repo.find_by_id(id)
    }

    /// Lists every tutorial.
    pub fn list(&self) -> RepoResult<Vec<Tutorial>> {
        self.repo.find_all()
    }

    /// Lists tutorials filtered by the published flag.
    pub fn list_by_published(&self, published: bool) -> RepoResult<Vec<Tutorial>> {
        self.repo.find_by_published(published)
    }

    /// Lists tutorials whose title contains the fragment (case-insensitive).
    pub fn search_titles(&self, fragment: &str) -> RepoResult<Vec<Tutorial>> {
        self.repo.find_by_title_containing(fragment)
    }

    /// Deletes one tutorial by id and returns the deleted-row count.
    pub fn remove(&self, id: TutorialId) -> RepoResult<usize> {
        self.repo.delete_by_id(id)
    }

    /// Deletes every tutorial and returns the deleted-row count.
    pub fn clear(&self) -> RepoResult<usize> {
        self.repo.delete_all()
    }
}
