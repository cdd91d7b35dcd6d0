//! Anchored wildcard matching over event names.
//!
//! The scan is iterative with a single backtrack point (the most recent `*`),
//! so runs of wildcards such as `***a***b***` cost at most
//! `O(pattern.len() * name.len())` and never recurse.

/// Matches any run of zero or more characters.
pub const ANY_RUN: char = '*';

/// Matches exactly one character.
pub const ANY_ONE: char = '?';

/// Returns `true` if `s` contains a wildcard character.
pub fn has_wildcard(s: &str) -> bool {
    s.contains([ANY_RUN, ANY_ONE])
}

/// Returns `true` if `name` is matched in full by `pattern`.
///
/// # Examples
///
/// ```
/// use evkit_wildcard::wild_match;
///
/// assert!(wild_match("order.*", "order.created"));
/// assert!(wild_match("*.created", "order.created"));
/// assert!(wild_match("order.?reated", "order.created"));
/// assert!(!wild_match("order", "order.created"));
/// assert!(wild_match("", ""));
/// assert!(!wild_match("", "order"));
/// ```
pub fn wild_match(pattern: &str, name: &str) -> bool {
    if pattern.is_empty() {
        return name.is_empty();
    }
    if pattern == "*" {
        return true;
    }
    if !has_wildcard(pattern) {
        return pattern == name;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();
    match_chars(&pattern, &name)
}

/// Core scan over pre-split characters.
pub(crate) fn match_chars(pattern: &[char], name: &[char]) -> bool {
    let mut pi = 0;
    let mut ni = 0;
    // (pattern index just past the last `*`, name index that `*` resumes from)
    let mut backtrack: Option<(usize, usize)> = None;

    while ni < name.len() {
        match pattern.get(pi) {
            Some(&ANY_RUN) => {
                pi += 1;
                backtrack = Some((pi, ni));
            }
            Some(&c) if c == ANY_ONE || c == name[ni] => {
                pi += 1;
                ni += 1;
            }
            _ => match backtrack {
                // Let the last `*` swallow one more character and retry.
                Some((resume_pi, resume_ni)) => {
                    pi = resume_pi;
                    ni = resume_ni + 1;
                    backtrack = Some((resume_pi, ni));
                }
                None => return false,
            },
        }
    }

    pattern[pi..].iter().all(|&c| c == ANY_RUN)
}
