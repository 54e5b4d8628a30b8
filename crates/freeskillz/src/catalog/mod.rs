//! Course catalog loading and normalization.
//!
//! The catalog index and the per-course detail documents are static
//! JSON fetched through a [`sitekit::DocumentSource`]. Detail
//! documents come in two legacy shapes (a flat `lessons` array or a
//! nested `topics` array); both normalize to the single canonical
//! `topics`-based representation before anything downstream sees them.

mod loader;
mod normalize;
mod types;

pub use loader::{enrolled_courses, CatalogLoader, DEFAULT_COURSE_DIR, DEFAULT_INDEX_PATH};
pub use normalize::SYNTHETIC_TOPIC_TITLE;
pub use types::{CourseDetail, CourseSummary, Lesson, LessonKind, Topic};
