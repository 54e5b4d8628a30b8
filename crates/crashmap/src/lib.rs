//! `crashmap` - client-side core for the flight-crash map dashboard
//!
//! This library provides the data side of the dashboard page: loading
//! the crash dataset, applying the multi-field filter, and deriving
//! the summary statistics and per-decade histogram the page renders.
//! The map and chart widgets are external collaborators; a filter
//! change re-derives everything from the filtered set in one pass.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod record;

pub use analytics::{compute_decade_histogram, compute_summary, DecadeCount, Summary};
pub use config::Config;
pub use dashboard::{Dashboard, DashboardView};
pub use error::{Error, Result};
pub use filter::{apply_filter, FilterCriteria};
pub use loader::RecordLoader;
pub use record::CrashRecord;
