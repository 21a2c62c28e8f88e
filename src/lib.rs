//! Version resolution for deployment script generation
//!
//! - [`version`]: parse, order and select among raw catalog version strings
//! - [`component`]: choose the version string each component installs
//! - [`config`]: operator version configuration
//! - [`logging`]: tracing setup for the command-line tool

pub mod component;
pub mod config;
pub mod logging;
pub mod version;
