//! Session and enrollment management.
//!
//! Tracks the user's display name and the ordered set of enrolled
//! course ids, persisted under fixed keys in the injected local
//! store. Exactly one session exists per store;
//! logging out clears the name, the enrollment set, and all
//! per-course progress markers in one pass.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::store::LocalStore;

/// Storage key for the user's display name.
pub const USER_NAME_KEY: &str = "userName";

/// Storage key for the JSON-encoded enrollment list.
pub const ENROLLMENTS_KEY: &str = "enrollments";

/// Key prefix for per-course progress markers. The payload under these
/// keys is opaque to this core; it is only deleted wholesale when the
/// profile is cleared.
pub const PROGRESS_KEY_PREFIX: &str = "completedLessons_";

/// Outcome of an enroll call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// The course was added to the enrollment set.
    Enrolled,
    /// The course was already present; nothing changed.
    AlreadyEnrolled,
}

impl EnrollOutcome {
    /// Check if this outcome added a new enrollment.
    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Enrolled)
    }
}

/// Session and enrollment manager over an injected local store.
///
/// All operations are synchronous read-modify-write against the store;
/// each one completes before control returns to the caller.
#[derive(Debug)]
pub struct SessionManager<S: LocalStore> {
    store: S,
}

impl<S: LocalStore> SessionManager<S> {
    /// Create a manager over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the manager and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Get the current session's display name, if one has been set.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    pub fn session(&self) -> Result<Option<String>> {
        self.store.get(USER_NAME_KEY)
    }

    /// Set the session's display name.
    ///
    /// The name is trimmed before storage. A name that trims to empty
    /// fails with a validation error and leaves any stored name
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty name, or an error if
    /// the store operation fails.
    pub fn set_session(&mut self, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("name must not be empty"));
        }

        self.store.set(USER_NAME_KEY, trimmed)?;
        info!(name = %trimmed, "Session name set");
        Ok(())
    }

    /// Clear the profile: the name, the enrollment set, and every
    /// per-course progress marker.
    ///
    /// Confirmation is the caller's concern; this method deletes
    /// unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if a store operation fails.
    pub fn clear_session(&mut self) -> Result<()> {
        self.store.remove(USER_NAME_KEY)?;
        self.store.remove(ENROLLMENTS_KEY)?;
        let markers = self.store.remove_prefix(PROGRESS_KEY_PREFIX)?;
        info!(progress_markers = markers, "Profile cleared");
        Ok(())
    }

    /// Get the ordered list of enrolled course ids.
    ///
    /// An absent key reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the stored value is malformed, or
    /// an error if the store operation fails.
    pub fn enrollments(&self) -> Result<Vec<String>> {
        match self.store.get(ENROLLMENTS_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| Error::Parse {
                resource: ENROLLMENTS_KEY.to_string(),
                source,
            }),
        }
    }

    /// Check if the session is enrolled in the given course.
    ///
    /// # Errors
    ///
    /// Returns an error if the enrollment list cannot be read.
    pub fn is_enrolled(&self, course_id: &str) -> Result<bool> {
        Ok(self.enrollments()?.iter().any(|id| id == course_id))
    }

    /// Enroll the session in a course.
    ///
    /// Appends `course_id` to the enrollment set iff not already
    /// present; a repeat call with the same id reports
    /// [`EnrollOutcome::AlreadyEnrolled`] without duplicating.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if no session exists (the caller
    /// must obtain a name first) or the course id is blank, or an
    /// error if a store operation fails.
    pub fn enroll(&mut self, course_id: &str) -> Result<EnrollOutcome> {
        if self.session()?.is_none() {
            return Err(Error::validation(
                "no active session: a display name is required to enroll",
            ));
        }

        let course_id = course_id.trim();
        if course_id.is_empty() {
            return Err(Error::validation("course id must not be empty"));
        }

        let mut enrollments = self.enrollments()?;
        if enrollments.iter().any(|id| id == course_id) {
            debug!(course = %course_id, "Already enrolled");
            return Ok(EnrollOutcome::AlreadyEnrolled);
        }

        enrollments.push(course_id.to_string());
        let encoded = serde_json::to_string(&enrollments).map_err(|source| Error::Parse {
            resource: ENROLLMENTS_KEY.to_string(),
            source,
        })?;
        self.store.set(ENROLLMENTS_KEY, &encoded)?;

        info!(course = %course_id, total = enrollments.len(), "Enrolled in course");
        Ok(EnrollOutcome::Enrolled)
    }
}
