//! Shape normalization for course detail documents.
//!
//! Two legacy document shapes exist side by side in the content
//! directory: newer courses nest lessons under `topics`, older ones
//! carry a flat `lessons` array. This module parses the union and
//! produces the canonical [`CourseDetail`] deterministically, with no
//! IO involved.

use serde::Deserialize;

use super::types::{CourseDetail, Lesson, Topic};

/// Title given to the synthetic topic wrapping a flat lesson list.
pub const SYNTHETIC_TOPIC_TITLE: &str = "Course Content";

/// A course detail document as it appears on disk: the union of the
/// two legacy shapes, before normalization. A malformed `topics` or
/// `lessons` array is a parse error, not a fallback to the bare shape.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCourseDetail {
    id: String,
    title: String,
    topics: Option<Vec<Topic>>,
    lessons: Option<Vec<Lesson>>,
}

impl RawCourseDetail {
    /// Convert to the canonical `topics`-based representation.
    ///
    /// `topics` is used unchanged when present; a flat lesson list
    /// becomes a single synthetic topic titled "Course Content"; a
    /// document with neither field gets an empty topic list.
    pub(crate) fn normalize(self) -> CourseDetail {
        let topics = match (self.topics, self.lessons) {
            (Some(topics), _) => topics,
            (None, Some(lessons)) => vec![Topic {
                title: SYNTHETIC_TOPIC_TITLE.to_string(),
                lessons,
            }],
            (None, None) => Vec::new(),
        };

        CourseDetail {
            id: self.id,
            title: self.title,
            topics,
        }
    }
}
