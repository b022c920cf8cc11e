//! Citation challenge: after a verse is recited, the player rebuilds its
//! reference by tapping the segments in order.

use tracing::debug;

use super::{placement_accuracy, PracticeSession};
use crate::citation::{extract_citation_segments, join_labels};
use crate::error::{PracticeError, Result};
use crate::types::{CitationSegment, PracticeMode};

#[derive(Debug, Clone)]
pub struct CitationChallenge {
    segments: Vec<CitationSegment>,
    /// Indices of appended segments, in the order they were tapped.
    appended: Vec<usize>,
    mistakes: u32,
}

impl CitationChallenge {
    pub fn new(reference: &str) -> Result<Self> {
        let segments = extract_citation_segments(reference);
        if segments.is_empty() {
            return Err(PracticeError::EmptyInput);
        }
        Ok(Self {
            segments,
            appended: Vec::new(),
            mistakes: 0,
        })
    }

    pub fn segments(&self) -> &[CitationSegment] {
        &self.segments
    }

    /// Tap the segment with `id`.
    ///
    /// Returns `true` when it was the next piece of the reference. A segment
    /// with the same label as the expected one is accepted too, so the two
    /// "3"s of "Juan 3:3" can be tapped in either order.
    pub fn append(&mut self, id: &str) -> Result<bool> {
        if self.is_complete() {
            return Err(PracticeError::SessionComplete);
        }
        let index = self
            .segments
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| PracticeError::UnknownSegment { id: id.to_string() })?;

        let expected = &self.segments[self.appended.len()].label;
        let tapped = &self.segments[index];
        if tapped.appended || tapped.label != *expected {
            self.mistakes += 1;
            return Ok(false);
        }

        self.segments[index].appended = true;
        self.appended.push(index);

        if self.is_complete() {
            debug!(mistakes = self.mistakes, "citation challenge complete");
        }
        Ok(true)
    }

    /// The reference as tapped so far.
    pub fn assembled(&self) -> String {
        join_labels(self.appended.iter().map(|&i| &self.segments[i]))
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }
}

impl PracticeSession for CitationChallenge {
    fn mode(&self) -> PracticeMode {
        PracticeMode::Citation
    }

    fn is_complete(&self) -> bool {
        self.appended.len() >= self.segments.len()
    }

    fn accuracy(&self) -> u8 {
        placement_accuracy(self.appended.len(), self.mistakes)
    }
}
