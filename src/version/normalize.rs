//! Rewrites raw catalog version strings into the grammar the parser accepts
//!
//! Build pipelines publish versions in several spellings:
//! - `v5.27.0` / `V5.27.0` - tag-style prefix
//! - `5.27` - missing patch segment
//! - `5.27.0-SNAPSHOT`, `5.27.0-RC1`, `5.27.0-beta2` - vendor pre-release suffixes
//!
//! Normalization maps all of these onto `MAJOR.MINOR.PATCH[(a|b|rc)N][.devN][+BUILD]`.
//! It never fails; strings it cannot repair are passed through for the parser to reject.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Vendor pre-release spellings, matched case-insensitively at a `-` separator
static VENDOR_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)-(?:(snapshot)|(rc)([0-9]*)|(beta)([0-9]*)|(alpha)([0-9]*))\b")
        .expect("vendor token pattern is valid")
});

/// Normalize a raw version string.
///
/// Examples:
/// - "v5.27.0" -> "5.27.0"
/// - "5.27" -> "5.27.0"
/// - "5.27.0-RC1" -> "5.27.0rc1"
/// - "5.27-SNAPSHOT" -> "5.27.0.dev0"
/// - "5.27.0-beta+build.7" -> "5.27.0b+build.7"
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let unprefixed = strip_v_prefix(trimmed);

    let split_at = unprefixed.find(['-', '+']).unwrap_or(unprefixed.len());
    let (base, suffix) = unprefixed.split_at(split_at);

    let mut normalized = pad_base(base);

    // Build metadata is preserved verbatim; only the pre-release part is rewritten
    let build_at = suffix.find('+').unwrap_or(suffix.len());
    let (pre_release, build) = suffix.split_at(build_at);
    normalized.push_str(&rewrite_vendor_tokens(pre_release));
    normalized.push_str(build);

    normalized
}

/// Strip a single `v`/`V` prefix when it introduces a numeric version
fn strip_v_prefix(version: &str) -> &str {
    match version.strip_prefix(['v', 'V']) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => version,
    }
}

/// Pad `MAJOR.MINOR` to `MAJOR.MINOR.0`; any other shape is returned unchanged
fn pad_base(base: &str) -> String {
    let segments: Vec<&str> = base.split('.').collect();
    match segments.as_slice() {
        [major, minor] if is_numeric(major) && is_numeric(minor) => format!("{base}.0"),
        _ => base.to_string(),
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Rewrite vendor spellings until none remain.
///
/// A rewrite removes a `-`, which can expose a new match (`--RC1` -> `-rc1`),
/// so replacement repeats until the text is stable.
fn rewrite_vendor_tokens(pre_release: &str) -> String {
    let mut current = pre_release.to_string();
    while VENDOR_TOKEN.is_match(&current) {
        current = VENDOR_TOKEN
            .replace_all(&current, replace_vendor_token)
            .into_owned();
    }
    current
}

fn replace_vendor_token(caps: &Captures<'_>) -> String {
    if caps.get(1).is_some() {
        return ".dev0".to_string();
    }
    if caps.get(2).is_some() {
        let number = caps.get(3).map_or("", |m| m.as_str());
        let number = if number.is_empty() { "0" } else { number };
        return format!("rc{number}");
    }
    if caps.get(4).is_some() {
        return format!("b{}", caps.get(5).map_or("", |m| m.as_str()));
    }
    format!("a{}", caps.get(7).map_or("", |m| m.as_str()))
}
