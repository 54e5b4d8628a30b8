//! Catalog and course-detail loading.

use sitekit::DocumentSource;
use tracing::{debug, info};

use super::normalize::RawCourseDetail;
use super::types::{CourseDetail, CourseSummary};
use crate::config::ContentConfig;
use crate::error::{Error, Result};

/// Default location of the catalog index document.
pub const DEFAULT_INDEX_PATH: &str = "courses/index.json";

/// Default directory holding per-course detail documents.
pub const DEFAULT_COURSE_DIR: &str = "courses";

/// Loads the course catalog through an injected document source.
///
/// A failed fetch is a hard failure surfaced to the caller; there is
/// no fallback catalog and no retry. The caller re-triggers the load
/// on the next user action.
#[derive(Debug)]
pub struct CatalogLoader<S: DocumentSource> {
    source: S,
    index_path: String,
    course_dir: String,
}

impl<S: DocumentSource> CatalogLoader<S> {
    /// Create a loader with the default content paths.
    pub fn new(source: S) -> Self {
        Self {
            source,
            index_path: DEFAULT_INDEX_PATH.to_string(),
            course_dir: DEFAULT_COURSE_DIR.to_string(),
        }
    }

    /// Create a loader with paths taken from configuration.
    pub fn with_content_config(source: S, content: &ContentConfig) -> Self {
        Self {
            source,
            index_path: content.catalog_index.clone(),
            course_dir: content.course_dir.clone(),
        }
    }

    /// Load and parse the catalog index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the index document is missing,
    /// [`Error::Parse`] if it holds malformed JSON, or [`Error::Fetch`]
    /// if the fetch mechanism fails.
    pub async fn catalog_index(&self) -> Result<Vec<CourseSummary>> {
        debug!(source = self.source.name(), path = %self.index_path, "Loading catalog index");
        let bytes = self.source.fetch(&self.index_path).await?;
        let catalog: Vec<CourseSummary> =
            serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
                resource: self.index_path.clone(),
                source,
            })?;

        info!(courses = catalog.len(), "Catalog index loaded");
        Ok(catalog)
    }

    /// Load a course detail document and normalize it to the canonical
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the id is blank or would
    /// escape the course directory, [`Error::NotFound`] if no document
    /// exists for the id, or [`Error::Parse`] for malformed JSON.
    pub async fn course_detail(&self, course_id: &str) -> Result<CourseDetail> {
        let course_id = course_id.trim();
        if course_id.is_empty() {
            return Err(Error::validation("course id must not be empty"));
        }
        // Ids are path segments; anything that could change the
        // resolved directory is rejected before the fetch.
        if course_id.contains(['/', '\\']) || course_id.contains("..") {
            return Err(Error::validation(format!(
                "course id contains path separators: {course_id}"
            )));
        }

        let path = format!("{}/{course_id}.json", self.course_dir);
        debug!(source = self.source.name(), %path, "Loading course detail");

        let bytes = self.source.fetch(&path).await?;
        let raw: RawCourseDetail =
            serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
                resource: path.clone(),
                source,
            })?;

        let detail = raw.normalize();
        debug!(course = %detail.id, topics = detail.topics.len(), "Course detail normalized");
        Ok(detail)
    }
}

/// Select the catalog entries the user is enrolled in.
///
/// Set-intersection by id, preserving catalog order; enrollment ids
/// with no catalog entry are silently dropped.
#[must_use]
pub fn enrolled_courses(catalog: &[CourseSummary], enrollments: &[String]) -> Vec<CourseSummary> {
    catalog
        .iter()
        .filter(|course| enrollments.iter().any(|id| *id == course.id))
        .cloned()
        .collect()
}
