//! `freeskillz` - client-side core for the FreeSkillz course site
//!
//! This library provides the state and derivation logic behind the
//! site's pages: a session/enrollment manager persisted in an injected
//! local key-value store, and a course-catalog loader that normalizes
//! the two legacy course-document shapes into one canonical form.
//! Rendering is an external collaborator; nothing here touches a DOM.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use catalog::{enrolled_courses, CatalogLoader, CourseDetail, CourseSummary};
pub use config::Config;
pub use error::{Error, Result};
pub use session::{EnrollOutcome, SessionManager};
pub use store::{LocalStore, MemoryStore, SqliteStore};
