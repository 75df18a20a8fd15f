//! URL path joining.
//!
//! This module joins URL segments with `/` and then normalizes the result
//! through a fixed sequence of textual passes. It is deliberately a string
//! transform, not a URL parser: malformed input produces malformed output.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of slashes, collapsed to a single `/`.
static SLASH_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/+").expect("valid regex"));

/// A scheme prefix whose `//` was eaten by the slash collapse.
static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+):/").expect("valid regex"));

/// The `file:` scheme, which keeps a single slash.
static FILE_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^file:").expect("valid regex"));

/// A slash directly before a query or fragment separator (`#` only when not
/// followed by `!`, so hash-bang routes keep their slash).
static SLASH_BEFORE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\?|&|#[^!])").expect("valid regex"));

/// Join URL segments with `/` and normalize the result.
///
/// The passes run in order, each over the full string:
///
/// 1. collapse repeated slashes into one
/// 2. restore `://` after the scheme (`scheme:/` → `scheme://`)
/// 3. `file:` collapses back to a single slash
/// 4. drop a slash that directly precedes `?`, `&`, or `#` (unless `#!`)
/// 5. turn every `?` into `&`, then the first `&` back into `?`, so only
///    the first query separator survives as `?`
///
/// # Examples
///
/// ```
/// # use table_export::utils::url_join;
/// assert_eq!(url_join(["http://a.com", "b", "c"]), "http://a.com/b/c");
/// assert_eq!(url_join(["a", "b?x=1", "c?y=2"]), "a/b?x=1/c&y=2");
/// ```
pub fn url_join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = segments
        .into_iter()
        .map(|segment| segment.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("/");

    let collapsed = SLASH_RUNS.replace_all(&joined, "/");
    let with_scheme = SCHEME_PREFIX.replace(&collapsed, "${1}://");
    let with_file = FILE_SCHEME.replace(&with_scheme, "file:/");
    let separated = SLASH_BEFORE_SEPARATOR.replace_all(&with_file, "$1");

    separated.replace('?', "&").replacen('&', "?", 1)
}
