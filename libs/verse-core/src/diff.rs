//! Token-level alignment between a target passage and an attempt.
//!
//! Alignment runs in two phases. A prefix pass walks both sequences while
//! they agree, which covers the usual drill where an attempt starts out
//! right and drifts later. The remaining suffixes are aligned with a
//! longest-common-subsequence table.

use crate::normalize::normalize_for_compare;
use crate::types::{DiffStatus, DiffTokenItem, Token};

/// Align `attempt` against `target`.
///
/// Items come out in display order. Target-side punctuation is reported as
/// `Punct`; attempt punctuation the target does not have is `Extra`.
pub fn diff_tokens(target: &[Token], attempt: &[Token]) -> Vec<DiffTokenItem> {
    let target_keys = comparison_keys(target);
    let attempt_keys = comparison_keys(attempt);

    let (mut result, i, j) = diff_prefix(target, attempt, &target_keys, &attempt_keys);
    result.extend(lcs_align(
        &target[i..],
        &attempt[j..],
        &target_keys[i..],
        &attempt_keys[j..],
    ));
    result
}

/// Align two sequences with the LCS table only, skipping the prefix pass.
pub fn diff_tokens_lcs(target: &[Token], attempt: &[Token]) -> Vec<DiffTokenItem> {
    lcs_align(
        target,
        attempt,
        &comparison_keys(target),
        &comparison_keys(attempt),
    )
}

fn comparison_keys(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| normalize_for_compare(&t.text)).collect()
}

/// Walk both sequences from the start until the first real divergence.
///
/// Returns the emitted items and the cursors where the walk stopped.
fn diff_prefix(
    target: &[Token],
    attempt: &[Token],
    target_keys: &[String],
    attempt_keys: &[String],
) -> (Vec<DiffTokenItem>, usize, usize) {
    let mut result = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < target.len() && j < attempt.len() {
        let t = &target[i];
        let a = &attempt[j];

        match (t.is_punct(), a.is_punct()) {
            (true, true) => {
                result.push(DiffTokenItem::from_token(t, DiffStatus::Punct));
                i += 1;
                // Differing attempt punctuation waits for the next round.
                if t.text == a.text {
                    j += 1;
                }
            }
            (true, false) => {
                result.push(DiffTokenItem::from_token(t, DiffStatus::Punct));
                i += 1;
            }
            (false, true) => {
                result.push(DiffTokenItem::from_token(a, DiffStatus::Extra));
                j += 1;
            }
            (false, false) if target_keys[i] == attempt_keys[j] => {
                result.push(DiffTokenItem::from_token(t, DiffStatus::Match));
                i += 1;
                j += 1;
            }
            (false, false) => break,
        }
    }

    (result, i, j)
}

fn lcs_align(
    target: &[Token],
    attempt: &[Token],
    target_keys: &[String],
    attempt_keys: &[String],
) -> Vec<DiffTokenItem> {
    let m = target.len();
    let n = attempt.len();

    if m == 0 && n == 0 {
        return Vec::new();
    }

    // dp[i][j] = LCS length of target[..i] and attempt[..j]
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if target_keys[i - 1] == attempt_keys[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut trail = Vec::with_capacity(m + n);
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && target_keys[i - 1] == attempt_keys[j - 1] {
            let token = &target[i - 1];
            let status = if token.is_punct() {
                DiffStatus::Punct
            } else {
                DiffStatus::Match
            };
            trail.push(DiffTokenItem::from_token(token, status));
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || dp[i - 1][j] >= dp[i][j - 1]) {
            // Ties go to the target side.
            trail.push(DiffTokenItem::from_token(&target[i - 1], DiffStatus::Missing));
            i -= 1;
        } else {
            trail.push(DiffTokenItem::from_token(&attempt[j - 1], DiffStatus::Extra));
            j -= 1;
        }
    }

    trail.reverse();
    trail
}
