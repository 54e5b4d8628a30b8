//! `sitekit` - shared plumbing for the FreeSkillz site cores
//!
//! This crate provides the pieces both page cores need but neither owns:
//! the asynchronous document-source abstraction over static JSON content
//! (filesystem, HTTP, and in-memory implementations) and logging setup.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod logging;
pub mod source;

pub use logging::init_logging;
pub use source::{DocumentSource, FsSource, HttpSource, MemorySource, SourceError};
