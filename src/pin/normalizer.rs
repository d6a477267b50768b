//! Input normalizer - bounds raw edits and decides completion.
//!
//! Every text change coming from the input surface is a *candidate* for the
//! new value. The normalizer either accepts it or hands back the current value
//! untouched. It never stores anything: the host owns the value.
//!
//! Lengths are counted in `char`s, so a masked or multi-byte entry still
//! occupies exactly one cell per character.

use tracing::{debug, trace};

/// Result of proposing a candidate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    /// The value the host should store.
    pub value: String,
    /// True iff the accepted value is exactly `max_size` characters long.
    pub completed: bool,
}

impl Proposal {
    fn rejected(current: &str) -> Self {
        Self {
            value: current.to_string(),
            completed: false,
        }
    }
}

/// Which characters an edit may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharPolicy {
    /// ASCII digits only. Terminals have no numeric keypad hint, so this is
    /// enforced on content.
    #[default]
    Digits,
    /// Anything the host input surface delivers.
    Any,
}

impl CharPolicy {
    /// Check whether every character of `candidate` is allowed.
    pub fn allows(&self, candidate: &str) -> bool {
        match self {
            CharPolicy::Digits => candidate.chars().all(|c| c.is_ascii_digit()),
            CharPolicy::Any => true,
        }
    }
}

/// Propose `candidate` as the new value.
///
/// Candidates longer than `max_size` are rejected and `current` comes back
/// unchanged. Anything else is accepted as is; `completed` is set only on
/// the exact boundary.
pub fn propose(current: &str, candidate: &str, max_size: usize) -> Proposal {
    let len = candidate.chars().count();

    if len > max_size {
        debug!(len, max_size, "pin edit rejected: too long");
        return Proposal::rejected(current);
    }

    let completed = len == max_size;
    trace!(len, max_size, completed, "pin edit accepted");

    Proposal {
        value: candidate.to_string(),
        completed,
    }
}

/// Propose `candidate` after filtering it through `policy`.
///
/// Only the characters that differ from `current` are checked, so deleting
/// never fails even when the stored value holds characters the policy would
/// not let through. A policy rejection looks exactly like a length rejection.
pub fn propose_with(current: &str, candidate: &str, max_size: usize, policy: CharPolicy) -> Proposal {
    if !policy.allows(changed_suffix(current, candidate)) {
        debug!(?policy, "pin edit rejected: disallowed character");
        return Proposal::rejected(current);
    }
    propose(current, candidate, max_size)
}

/// The part of `candidate` after the prefix it shares with `current`.
fn changed_suffix<'a>(current: &str, candidate: &'a str) -> &'a str {
    let shared = current
        .char_indices()
        .zip(candidate.chars())
        .find(|((_, a), b)| a != b)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| current.len().min(candidate.len()));
    &candidate[shared..]
}

/// Candidate produced by typing `ch` at the end of `current`.
pub fn append(current: &str, ch: char) -> String {
    let mut next = String::with_capacity(current.len() + ch.len_utf8());
    next.push_str(current);
    next.push(ch);
    next
}

/// Candidate produced by deleting the last character of `current`.
pub fn drop_last(current: &str) -> String {
    let mut chars = current.chars();
    chars.next_back();
    chars.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_propose_rejects_over_max() {
        let p = propose("123", "12345", 4);
        assert_eq!(p.value, "123");
        assert!(!p.completed);
    }

    #[test]
    fn test_propose_completes_on_exact_boundary() {
        let p = propose("123", "1234", 4);
        assert_eq!(p.value, "1234");
        assert!(p.completed);
    }

    #[test]
    fn test_propose_accepts_below_max() {
        let p = propose("", "12", 4);
        assert_eq!(p.value, "12");
        assert!(!p.completed);

        // Shrinking is an edit like any other
        let p = propose("1234", "", 4);
        assert_eq!(p.value, "");
        assert!(!p.completed);
    }

    #[test]
    fn test_propose_counts_chars_not_bytes() {
        // Four chars, twelve bytes
        let p = propose("", "日本語字", 4);
        assert!(p.completed);
        assert_eq!(p.value, "日本語字");
    }

    #[test]
    fn test_propose_does_not_filter_content() {
        let p = propose("", "ab", 4);
        assert_eq!(p.value, "ab");
    }

    #[test]
    fn test_propose_with_digits_policy() {
        let p = propose_with("12", "12a", 4, CharPolicy::Digits);
        assert_eq!(p.value, "12");
        assert!(!p.completed);

        let p = propose_with("12", "123", 4, CharPolicy::Digits);
        assert_eq!(p.value, "123");

        // Non-ASCII digits are rejected too
        let p = propose_with("", "١", 4, CharPolicy::Digits);
        assert_eq!(p.value, "");
    }

    #[test]
    fn test_propose_with_deletes_past_disallowed_chars() {
        // Host wrote a value the policy would not accept from typing
        let p = propose_with("1a2", "1a", 4, CharPolicy::Digits);
        assert_eq!(p.value, "1a");
        let p = propose_with("12a", "12", 4, CharPolicy::Digits);
        assert_eq!(p.value, "12");

        // Typing after a disallowed char is judged on the new char only
        let p = propose_with("1a", "1a3", 4, CharPolicy::Digits);
        assert_eq!(p.value, "1a3");
        let p = propose_with("1a", "1ab", 4, CharPolicy::Digits);
        assert_eq!(p.value, "1a");

        // A replaced character is checked
        let p = propose_with("12", "1x", 4, CharPolicy::Digits);
        assert_eq!(p.value, "12");
    }

    #[test]
    fn test_changed_suffix() {
        assert_eq!(changed_suffix("12", "123"), "3");
        assert_eq!(changed_suffix("123", "12"), "");
        assert_eq!(changed_suffix("1é2", "1é9"), "9");
        assert_eq!(changed_suffix("", "45"), "45");
    }

    #[test]
    fn test_propose_with_any_policy() {
        let p = propose_with("", "a-b!", 4, CharPolicy::Any);
        assert_eq!(p.value, "a-b!");
        assert!(p.completed);
    }

    #[test]
    fn test_policy_length_check_still_applies() {
        let p = propose_with("1234", "12345", 4, CharPolicy::Any);
        assert_eq!(p.value, "1234");
        assert!(!p.completed);
    }

    #[test]
    fn test_append_and_drop_last() {
        assert_eq!(append("12", '3'), "123");
        assert_eq!(append("", '9'), "9");
        assert_eq!(drop_last("123"), "12");
        assert_eq!(drop_last("é1é"), "é1");
        assert_eq!(drop_last(""), "");
    }

    #[test]
    fn test_default_policy_is_digits() {
        assert_eq!(CharPolicy::default(), CharPolicy::Digits);
        assert!(CharPolicy::Digits.allows(""));
        assert!(!CharPolicy::Digits.allows(" 1"));
    }
}
