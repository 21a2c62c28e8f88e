//! Parser for normalized version strings
//!
//! Accepted grammar (after [`normalize`]):
//!
//! ```text
//! MAJOR.MINOR.PATCH[(a|b|rc)N][.devN][+BUILD]
//! ```
//!
//! Markers are lowercase only. `N` may be omitted and then counts as 0. `BUILD`
//! is an opaque run of ASCII letters, digits, `.` and `-`, kept as text.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::error::VersionError;
use crate::version::normalize::normalize;
use crate::version::types::{PreReleaseTag, Version, VersionRecord};

static VERSION_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:(a|b|rc)([0-9]*))?(?:\.dev([0-9]*))?(?:\+([0-9A-Za-z.-]+))?$",
    )
    .expect("version grammar pattern is valid")
});

/// Parse a raw version string into a [`VersionRecord`].
///
/// Never fails: an unparseable string yields a record with `parsed: None`.
/// The raw string is kept verbatim in either case.
pub fn parse(raw: &str) -> VersionRecord {
    let parsed = raw
        .parse::<Version>()
        .inspect_err(|e| debug!("{e}"))
        .ok();

    VersionRecord {
        raw: raw.to_string(),
        parsed,
    }
}

impl VersionRecord {
    /// Parse a raw version string, see [`parse`]
    pub fn parse(raw: &str) -> Self {
        parse(raw)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Normalize and parse a version string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        let invalid = || VersionError::InvalidVersionFormat {
            raw: s.to_string(),
            normalized: normalized.clone(),
        };

        let caps = VERSION_GRAMMAR.captures(&normalized).ok_or_else(invalid)?;

        let number = |index: usize| -> Result<u64, VersionError> {
            match caps.get(index).map(|m| m.as_str()) {
                None | Some("") => Ok(0),
                Some(digits) => digits.parse::<u64>().map_err(|_| invalid()),
            }
        };

        let pre_release = match caps.get(4) {
            None => None,
            Some(tag) => {
                let n = number(5)?;
                Some(match tag.as_str() {
                    "a" => PreReleaseTag::Alpha(n),
                    "b" => PreReleaseTag::Beta(n),
                    _ => PreReleaseTag::ReleaseCandidate(n),
                })
            }
        };

        let dev = match caps.get(6) {
            None => None,
            Some(_) => Some(number(6)?),
        };

        let build_metadata = caps.get(7).map(|build| build.as_str().to_string());

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            pre_release,
            dev,
            build_metadata,
        })
    }
}
