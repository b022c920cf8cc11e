//! Grading of recall attempts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diff::diff_tokens;
use crate::error::{PracticeError, Result};
use crate::normalize::is_punct;
use crate::tokenizer::tokenize;
use crate::types::{DiffStatus, GradeResult};

/// Most tokens either side of a grade may have. The alignment table grows
/// with the product of both lengths.
pub const MAX_PASSAGE_TOKENS: usize = 3_000;

/// Grade an attempt against the target passage.
///
/// Punctuation is shown in the diff but never scored. Fails with
/// [`PracticeError::EmptyInput`] when either text is blank and with
/// [`PracticeError::InputTooLong`] past [`MAX_PASSAGE_TOKENS`].
pub fn grade(target_text: &str, attempt_text: &str) -> Result<GradeResult> {
    if target_text.trim().is_empty() || attempt_text.trim().is_empty() {
        return Err(PracticeError::EmptyInput);
    }

    let target = tokenize(target_text);
    let attempt = tokenize(attempt_text);
    for tokens in [&target, &attempt] {
        if tokens.len() > MAX_PASSAGE_TOKENS {
            return Err(PracticeError::InputTooLong {
                tokens: tokens.len(),
                limit: MAX_PASSAGE_TOKENS,
            });
        }
    }
    let diff = diff_tokens(&target, &attempt);

    let mut match_count = 0usize;
    let mut missed_words = Vec::new();
    let mut extra_words = Vec::new();

    for item in diff.iter().filter(|d| d.status != DiffStatus::Punct) {
        if is_punct(&item.token) {
            continue;
        }
        match item.status {
            DiffStatus::Match => match_count += 1,
            DiffStatus::Missing => missed_words.push(item.token.clone()),
            DiffStatus::Extra => extra_words.push(item.token.clone()),
            DiffStatus::Punct => {}
        }
    }

    let scorable = target.iter().filter(|t| !t.is_punct()).count();
    let accuracy = accuracy_percent(match_count, scorable, extra_words.is_empty());

    debug!(
        accuracy,
        matched = match_count,
        scorable,
        missed = missed_words.len(),
        extra = extra_words.len(),
        "graded attempt"
    );

    Ok(GradeResult {
        accuracy,
        missed_words,
        extra_words,
        diff,
    })
}

/// Rounded percentage of `matched` over `scorable`, clamped to 0..=100.
///
/// A target with nothing scorable is perfect only when nothing was added.
pub fn accuracy_percent(matched: usize, scorable: usize, no_extras: bool) -> u8 {
    if scorable == 0 {
        return if no_extras { 100 } else { 0 };
    }
    let percent = (100.0 * matched as f64 / scorable as f64).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Feedback tier for a graded attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Every word reproduced.
    Perfect,
    /// At or above the pass threshold.
    Passed,
    /// Below the pass threshold.
    Retry,
}

impl Feedback {
    pub fn from_accuracy(accuracy: u8, pass_threshold: u8) -> Self {
        if accuracy >= 100 {
            Self::Perfect
        } else if accuracy >= pass_threshold {
            Self::Passed
        } else {
            Self::Retry
        }
    }

    pub fn is_pass(self) -> bool {
        !matches!(self, Self::Retry)
    }
}
