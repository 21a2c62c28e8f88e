//! Total order over parsed versions
//!
//! 1. `(major, minor, patch)` lexicographically
//! 2. tier: dev < alpha < beta < rc < release
//! 3. sequence number within the tier (tag number, or dev number for the dev tier)
//! 4. for tagged pre-releases, a dev build sorts before the tag itself
//!    (`1.0.0rc1.dev0 < 1.0.0rc1`)
//!
//! Build metadata never takes part in the order.

use std::cmp::Ordering;

use crate::version::types::{ReleaseTier, Version};

/// Compare two parsed versions
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

impl Version {
    /// Sequence number used to order versions within the same tier
    fn sequence(&self) -> u64 {
        match (self.pre_release, self.dev) {
            (Some(tag), _) => tag.number(),
            (None, Some(dev)) => dev,
            (None, None) => 0,
        }
    }

    /// Dev marker rank for tagged pre-releases: a dev build precedes the tag
    fn dev_rank(&self) -> Option<u64> {
        if self.tier() == ReleaseTier::Dev {
            return None;
        }
        self.dev
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| self.tier().cmp(&other.tier()))
            .then_with(|| self.sequence().cmp(&other.sequence()))
            .then_with(|| match (self.dev_rank(), other.dev_rank()) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(&b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
