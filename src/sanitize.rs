// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Link and image hygiene for scraped URLs.
//!
//! Corpus URLs come from third-party APIs. Before anything is rendered as a
//! link, `safe_url` drops every scheme except http(s). Thumbnails are stricter:
//! https only, and only from hosts the scrapers are known to produce.

use url::Url;

/// Returned by `safe_url` when a link must not be followed.
pub const BLOCKED_URL: &str = "#";

/// Image hosts the scrapers are known to produce. Subdomains are accepted too.
pub const TRUSTED_IMAGE_HOSTS: &[&str] = &[
    "ph-files.imgix.net",
    "producthunt-static.s3.amazonaws.com",
    "bookface-images.s3.amazonaws.com",
    "avatars.githubusercontent.com",
    "opengraph.githubassets.com",
    "repository-images.githubusercontent.com",
    "ycombinator.com",
    "s3.amazonaws.com",
];

/// The URL unchanged if it parses with an http or https scheme, else `"#"`.
pub fn safe_url(url: &str) -> &str {
    match Url::parse(url.trim()) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => url,
        _ => BLOCKED_URL,
    }
}

/// The URL unchanged if it is https on a trusted host, else `None`.
pub fn safe_thumbnail_url(url: Option<&str>) -> Option<&str> {
    let url = url?;
    let parsed = Url::parse(url.trim()).ok()?;
    if parsed.scheme() != "https" {
        return None;
    }
    let host = parsed.host_str()?;
    TRUSTED_IMAGE_HOSTS
        .iter()
        .any(|trusted| is_same_or_subdomain(host, trusted))
        .then_some(url)
}

fn is_same_or_subdomain(host: &str, trusted: &str) -> bool {
    host == trusted
        || host
            .strip_suffix(trusted)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
