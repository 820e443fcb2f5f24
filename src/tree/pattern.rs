//! Pure path-to-pattern normalization.
//!
//! Both materializers derive route patterns through [`path_pattern`]; the
//! transform has no side effects and is idempotent, so a pattern can be fed
//! back through it unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// A parameter is a whole path component `[name]` with an identifier body.
/// Anything else, doubled brackets included, stays a literal segment.
static PARAM_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(\w+)\]$").expect("parameter regex is valid"));

static MULTI_SLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/+").expect("separator regex is valid"));

/// Parameter name of a path component, if it is one
pub fn parameter_name(segment: &str) -> Option<&str> {
    PARAM_SEGMENT
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Normalize a file-derived path into a route pattern
///
/// - `[name]` components become `:name` parameter tokens
/// - the method suffix and any remaining extension are stripped from the
///   final segment
/// - a trailing or sole segment named `index` collapses to the scope root
/// - repeated separators collapse, trailing separators are stripped
/// - an empty result is the scope root `/`
///
/// ```
/// use ferroute::path_pattern;
///
/// assert_eq!(path_pattern("/users/[id]"), "/users/:id");
/// assert_eq!(path_pattern("/index"), "/");
/// assert_eq!(path_pattern("/users//profile/"), "/users/profile");
/// ```
pub fn path_pattern(raw: &str) -> String {
    let collapsed = MULTI_SLASH.replace_all(raw, "/");
    let mut segments: Vec<String> = collapsed
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    // The final segment carries the method suffix and extension, if any.
    if let Some(last) = segments.last_mut() {
        if let Some(dot) = last.find('.') {
            last.truncate(dot);
        }
    }

    for segment in segments.iter_mut() {
        if let Some(name) = parameter_name(segment) {
            *segment = format!(":{name}");
        }
    }

    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// How two sibling patterns relate for duplicate detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PatternOverlap {
    /// No request path can match both
    Distinct,
    /// A parameter segment on one side overlaps a literal on the other
    Shadowing,
    /// Identical up to parameter names: every request matching one matches
    /// the other
    Identical,
}

/// Compare two normalized sibling patterns
pub(crate) fn compare_patterns(a: &str, b: &str) -> PatternOverlap {
    let left: Vec<&str> = a.split('/').filter(|s| !s.is_empty()).collect();
    let right: Vec<&str> = b.split('/').filter(|s| !s.is_empty()).collect();
    if left.len() != right.len() {
        return PatternOverlap::Distinct;
    }

    let mut identical = true;
    for (x, y) in left.iter().zip(right.iter()) {
        let x_param = x.starts_with(':');
        let y_param = y.starts_with(':');
        if x_param && y_param {
            continue;
        }
        if x_param || y_param {
            identical = false;
            continue;
        }
        if x != y {
            return PatternOverlap::Distinct;
        }
    }

    if identical {
        PatternOverlap::Identical
    } else {
        PatternOverlap::Shadowing
    }
}
