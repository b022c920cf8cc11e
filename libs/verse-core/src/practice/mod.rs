//! Practice sessions built on the grading engine.

pub mod citation;
pub mod sequence;
pub mod stealth;
pub mod typed;

use crate::grading::accuracy_percent;
use crate::types::PracticeMode;

pub use citation::CitationChallenge;
pub use sequence::{Placement, SequenceGame};
pub use stealth::{StealthOutcome, StealthSession, StealthSummary};
pub use typed::{TypedAttempt, TypedRecall};

/// Common view over a running practice session.
pub trait PracticeSession: Send + Sync {
    /// Mode this session drives.
    fn mode(&self) -> PracticeMode;

    /// Whether the exercise has been finished.
    fn is_complete(&self) -> bool;

    /// Score so far, 0 to 100.
    fn accuracy(&self) -> u8;
}

/// Share of correct moves when `total` pieces were placed with `mistakes`
/// wrong tries along the way.
pub(crate) fn placement_accuracy(total: usize, mistakes: u32) -> u8 {
    accuracy_percent(total, total + mistakes as usize, true)
}
