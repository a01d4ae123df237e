//! URL path assembly for the request dispatcher.
//!
//! This module builds the canonical request URL from its components: the
//! API base root, the literal `api` segment, the version segment, and the
//! percent-encoded endpoint path. The rules are small but exact:
//!
//! - empty components are skipped entirely;
//! - a `/` separator is inserted between two non-empty components unless
//!   the left one already ends with `/`;
//! - endpoint segments are percent-encoded independently, so hierarchy
//!   separators survive while a literal `/` inside an identifier does not;
//! - any accidental run of consecutive `/` collapses to a single `/` in
//!   one pass (the `//` of a URL scheme is not a path run and is kept);
//! - the finished URL carries exactly one trailing `/`.
//!
//! # Example
//!
//! ```rust
//! use webapi_client::clients::path::{encode_segments, url_path_join, with_end_slash};
//!
//! let endpoint = encode_segments(&["things", "a/b"]);
//! assert_eq!(endpoint, "things/a%2Fb");
//!
//! let url = url_path_join(&["http://h/", "/api/", "v1", &endpoint]);
//! assert_eq!(with_end_slash(&url), "http://h/api/v1/things/a%2Fb/");
//! ```

use std::borrow::Cow;

/// Joins URL components with `/` separators.
///
/// Empty components are skipped. A separator is inserted between two
/// non-empty components unless the left component already ends with `/`.
/// Runs of consecutive `/` characters introduced by components that carry
/// their own slashes are collapsed to a single `/`.
///
/// # Example
///
/// ```rust
/// use webapi_client::clients::path::url_path_join;
///
/// assert_eq!(
///     url_path_join(&["http://h/", "/api/", "v1", "/things/"]),
///     "http://h/api/v1/things/"
/// );
/// ```
#[must_use]
pub fn url_path_join(components: &[&str]) -> String {
    let mut url = String::new();
    for component in components {
        if component.is_empty() {
            continue;
        }
        if !url.is_empty() && !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(component);
    }
    collapse_duplicate_slashes(&url)
}

/// Percent-encodes endpoint path segments and joins them with `/`.
///
/// Each segment is encoded independently, so the `/` separators between
/// segments are preserved while any reserved or unsafe character inside a
/// segment — including a literal `/` that is part of an identifier — is
/// escaped.
///
/// # Example
///
/// ```rust
/// use webapi_client::clients::path::encode_segments;
///
/// assert_eq!(encode_segments(&["things", "abc123"]), "things/abc123");
/// assert_eq!(encode_segments(&["things", "a/b"]), "things/a%2Fb");
/// ```
#[must_use]
pub fn encode_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| urlencoding::encode(segment.as_ref()))
        .collect::<Vec<Cow<'_, str>>>()
        .join("/")
}

/// Ensures the URL ends with exactly one trailing `/`.
#[must_use]
pub fn with_end_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Collapses every run of consecutive `/` characters into a single `/`.
///
/// Single pass: a run of three or more slashes becomes exactly one, never
/// zero. The `//` following a scheme (`http://`) belongs to the authority
/// syntax, not the path, and is left untouched.
fn collapse_duplicate_slashes(url: &str) -> String {
    let (head, tail) = url
        .find("://")
        .map_or(("", url), |index| url.split_at(index + "://".len()));

    let mut collapsed = String::with_capacity(url.len());
    collapsed.push_str(head);

    let mut previous_was_slash = false;
    for ch in tail.chars() {
        if ch == '/' {
            if previous_was_slash {
                continue;
            }
            previous_was_slash = true;
        } else {
            previous_was_slash = false;
        }
        collapsed.push(ch);
    }
    collapsed
}
