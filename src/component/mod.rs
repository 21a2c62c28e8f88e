//! Component version resolution
//!
//! - [`system_type`]: table of known component families and their identifiers
//! - [`resolver`]: chooses the version string for a component from operator config

pub mod resolver;
pub mod system_type;

pub use resolver::{ComponentVersionRequest, resolve};
pub use system_type::ComponentFamily;
