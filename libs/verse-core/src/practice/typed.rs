//! Typed recall: the whole passage typed from memory, then graded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PracticeSession;
use crate::error::{PracticeError, Result};
use crate::grading::{grade, Feedback};
use crate::types::{EffectiveSettings, GradeResult, PracticeMode};

/// One graded submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedAttempt {
    pub result: GradeResult,
    pub feedback: Feedback,
}

/// Typed recall session for one passage.
#[derive(Debug, Clone)]
pub struct TypedRecall {
    target: String,
    pass_threshold: u8,
    attempts: u32,
    best_accuracy: u8,
    passed: bool,
}

impl TypedRecall {
    pub fn new(target: impl Into<String>, settings: &EffectiveSettings) -> Result<Self> {
        let target = target.into();
        if target.trim().is_empty() {
            return Err(PracticeError::EmptyInput);
        }
        Ok(Self {
            target,
            pass_threshold: settings.pass_threshold,
            attempts: 0,
            best_accuracy: 0,
            passed: false,
        })
    }

    /// Grade an attempt. Retries are allowed after a pass.
    pub fn submit(&mut self, attempt: &str) -> Result<TypedAttempt> {
        let result = grade(&self.target, attempt)?;
        let feedback = Feedback::from_accuracy(result.accuracy, self.pass_threshold);

        self.attempts += 1;
        self.best_accuracy = self.best_accuracy.max(result.accuracy);
        self.passed |= feedback.is_pass();

        debug!(attempt = self.attempts, accuracy = result.accuracy, ?feedback, "typed recall");
        Ok(TypedAttempt { result, feedback })
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl PracticeSession for TypedRecall {
    fn mode(&self) -> PracticeMode {
        PracticeMode::Typed
    }

    fn is_complete(&self) -> bool {
        self.passed
    }

    fn accuracy(&self) -> u8 {
        self.best_accuracy
    }
}
