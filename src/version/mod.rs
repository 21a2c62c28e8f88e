//! Version resolution and ordering engine
//!
//! Turns loosely formatted catalog version strings into an unambiguous order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Normalize  │────▶│    Parser   │────▶│   Compare   │────▶│    Sort     │
//! │ (rewrite)   │     │  (records)  │     │ (Ord impl)  │     │  (latest)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                                                                    ▲
//!                                                             ┌─────────────┐
//!                                                             │   Catalog   │
//!                                                             │  (input)    │
//!                                                             └─────────────┘
//! ```
//!
//! Everything here is synchronous and stateless; no results are cached
//! between calls.
//!
//! # Modules
//!
//! - [`normalize`]: Rewrites raw strings into the parser grammar
//! - [`parser`]: Builds [`VersionRecord`]s from raw strings
//! - [`compare`]: Total order over parsed versions
//! - [`sort`]: Sorting, latest selection and raw-string comparison
//! - [`catalog`]: Catalog response decoding and latest-with-fallback
//! - [`error`]: Error types
//! - [`types`]: `Version`, `PreReleaseTag`, `ReleaseTier`, `VersionRecord`

pub mod catalog;
pub mod compare;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod sort;
pub mod types;

pub use catalog::{CatalogResponse, VersionCatalog, latest_or_default};
pub use compare::compare;
pub use error::VersionError;
pub use normalize::normalize;
pub use parser::parse;
pub use sort::{compare_versions, get_latest, is_prerelease, sort};
pub use types::{PreReleaseTag, ReleaseTier, Version, VersionRecord};
