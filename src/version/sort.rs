//! Ordering and latest-selection over raw version strings
//!
//! All functions take the caller's raw strings and hand back raw strings,
//! never normalized forms. Unparseable entries are never ranked: `sort` moves
//! them behind every valid entry and `get_latest` never returns one.
//!
//! Catalog ordering ranks stable releases ahead of pre-releases, then applies
//! the version order within each group, so "latest" is the newest stable build
//! whenever one exists. `compare_versions` is the plain version order.

use std::cmp::Ordering;

use tracing::debug;

use crate::version::parser::parse;
use crate::version::types::VersionRecord;

/// Sort raw version strings.
///
/// - Valid entries are ordered stable-before-pre-release, then by version;
///   `descending` puts the newest stable release first.
/// - Entries with equal versions keep their input order.
/// - Invalid entries follow all valid ones, in their input order.
pub fn sort<S: AsRef<str>>(raws: &[S], descending: bool) -> Vec<String> {
    let (mut valid, invalid): (Vec<VersionRecord>, Vec<VersionRecord>) = raws
        .iter()
        .map(|raw| parse(raw.as_ref()))
        .partition(VersionRecord::is_valid);

    // `sort_by` is stable, so reversing the comparator keeps ties in input order
    valid.sort_by(|a, b| {
        let ordering = catalog_order(a, b);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    valid
        .into_iter()
        .chain(invalid)
        .map(|record| record.raw)
        .collect()
}

/// Find the latest valid version: the newest stable release, or the newest
/// pre-release when the list has no stable release.
///
/// Returns None for an empty list or when no entry parses.
pub fn get_latest<S: AsRef<str>>(raws: &[S]) -> Option<String> {
    let first = sort(raws, true).into_iter().next()?;

    if parse(&first).is_valid() {
        Some(first)
    } else {
        debug!("No valid version among {} candidates", raws.len());
        None
    }
}

/// Rank two valid records: stable releases above pre-releases, then by version
fn catalog_order(a: &VersionRecord, b: &VersionRecord) -> Ordering {
    let stable = |record: &VersionRecord| {
        record
            .parsed
            .as_ref()
            .is_some_and(|version| !version.is_prerelease())
    };

    stable(a)
        .cmp(&stable(b))
        .then_with(|| a.parsed.cmp(&b.parsed))
}

/// Compare two raw version strings.
///
/// Returns None if either side is invalid. `Ordering as i8` gives -1, 0 or 1.
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let a = parse(a).parsed?;
    let b = parse(b).parsed?;
    Some(a.cmp(&b))
}

/// Returns true if the raw string is a valid version with a pre-release or dev marker
pub fn is_prerelease(raw: &str) -> bool {
    parse(raw).parsed.is_some_and(|version| version.is_prerelease())
}
