//! Common types for parsed versions

use std::fmt;

/// Pre-release marker carried by a version.
///
/// The sequence number defaults to 0 when the tag is bare (`5.0.0b` == `5.0.0b0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreReleaseTag {
    /// `a<N>`
    Alpha(u64),
    /// `b<N>`
    Beta(u64),
    /// `rc<N>`
    ReleaseCandidate(u64),
}

impl PreReleaseTag {
    /// Returns the canonical token for this tag (without the number)
    pub fn as_str(&self) -> &'static str {
        match self {
            PreReleaseTag::Alpha(_) => "a",
            PreReleaseTag::Beta(_) => "b",
            PreReleaseTag::ReleaseCandidate(_) => "rc",
        }
    }

    pub fn number(&self) -> u64 {
        match self {
            PreReleaseTag::Alpha(n)
            | PreReleaseTag::Beta(n)
            | PreReleaseTag::ReleaseCandidate(n) => *n,
        }
    }

    pub fn tier(&self) -> ReleaseTier {
        match self {
            PreReleaseTag::Alpha(_) => ReleaseTier::Alpha,
            PreReleaseTag::Beta(_) => ReleaseTier::Beta,
            PreReleaseTag::ReleaseCandidate(_) => ReleaseTier::ReleaseCandidate,
        }
    }
}

/// Ordering class of versions sharing the same `major.minor.patch`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseTier {
    Dev,
    Alpha,
    Beta,
    ReleaseCandidate,
    Release,
}

/// A parsed version.
///
/// Equality and ordering ignore `build_metadata`; see [`crate::version::compare`].
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<PreReleaseTag>,
    pub dev: Option<u64>,
    /// Text after `+`, kept verbatim
    pub build_metadata: Option<String>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            dev: None,
            build_metadata: None,
        }
    }

    /// Classify the version into its ordering tier.
    ///
    /// A pre-release tag decides the tier when present; a dev marker alone
    /// puts the version in the lowest tier.
    pub fn tier(&self) -> ReleaseTier {
        match (self.pre_release, self.dev) {
            (Some(tag), _) => tag.tier(),
            (None, Some(_)) => ReleaseTier::Dev,
            (None, None) => ReleaseTier::Release,
        }
    }

    /// Returns true for any version carrying a pre-release or dev marker
    pub fn is_prerelease(&self) -> bool {
        self.tier() != ReleaseTier::Release
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(tag) = self.pre_release {
            write!(f, "{}{}", tag.as_str(), tag.number())?;
        }
        if let Some(dev) = self.dev {
            write!(f, ".dev{dev}")?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

/// A raw version string together with its parse outcome.
///
/// `parsed` is `None` when the raw string does not describe a valid version.
/// `raw` is always the caller's string, never the normalized form.
#[derive(Debug, Clone)]
pub struct VersionRecord {
    pub raw: String,
    pub parsed: Option<Version>,
}

impl VersionRecord {
    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }
}
