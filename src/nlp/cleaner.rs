//! Markup stripping.
//!
//! Removes HTML/XML-like tags with a naive non-greedy angle-bracket pattern.
//! This is deliberately *not* an HTML parser: it has no nesting awareness,
//! does not cross line boundaries, and makes no attempt to handle malformed
//! markup (`<` without a closing `>` is left alone). Good enough for the
//! occasional pasted snippet; anything fancier is out of scope.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// Strip angle-bracket tags from `raw`.
///
/// Returns a borrowed `Cow` when nothing matched, so tag-free input costs
/// no allocation.
pub fn strip_tags(raw: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(raw, "")
}
