//! Course catalog types.

use serde::{Deserialize, Serialize};

/// An entry in the course catalog index.
///
/// Immutable reference data loaded from `courses/index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Stable course identifier (used in enrollment and detail paths).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description shown on course cards.
    pub description: String,
    /// Path to the card image.
    pub image: String,
    /// Category label, e.g. "Web Development".
    pub category: String,
    /// Difficulty label, e.g. "Beginner".
    pub level: String,
}

/// The delivery format of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    /// A video lesson.
    Video,
    /// A document-based lesson.
    Doc,
}

impl std::fmt::Display for LessonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Doc => write!(f, "doc"),
        }
    }
}

/// A single lesson within a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Display title.
    pub title: String,
    /// Delivery format (`type` on the wire).
    #[serde(rename = "type")]
    pub kind: LessonKind,
    /// Location of the lesson content.
    pub url: String,
}

/// A titled group of lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Display title.
    pub title: String,
    /// Lessons in presentation order.
    pub lessons: Vec<Lesson>,
}

/// A course detail document in canonical form.
///
/// `topics` is always present after normalization, even if empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetail {
    /// Stable course identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Topic groups in presentation order.
    pub topics: Vec<Topic>,
}

impl CourseDetail {
    /// Total number of lessons across all topics.
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.topics.iter().map(|t| t.lessons.len()).sum()
    }
}
