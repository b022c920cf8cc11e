//! Core verse practice library shared by the practice apps and the backend.
//!
//! Provides:
//! - Verse markup cleanup and tokenizing (with verse-number metadata)
//! - Token alignment between a target passage and a recall attempt
//! - Grading (accuracy, missed and extra words)
//! - Chunking for the sequence game, citation segments
//! - Practice sessions (typed, stealth, sequence, citation)

pub mod chunking;
pub mod citation;
pub mod diff;
pub mod error;
pub mod grading;
pub mod normalize;
pub mod practice;
pub mod sanitize;
pub mod tokenizer;
pub mod types;

pub use chunking::{chunk_verse, DEFAULT_WORDS_PER_CHUNK};
pub use citation::extract_citation_segments;
pub use diff::{diff_tokens, diff_tokens_lcs};
pub use error::{PracticeError, Result};
pub use grading::{grade, Feedback, MAX_PASSAGE_TOKENS};
pub use normalize::{is_punct, normalize_for_compare};
pub use practice::{
    CitationChallenge, PracticeSession, SequenceGame, StealthSession, TypedRecall,
};
pub use sanitize::{sanitize_verse, SupTags};
pub use tokenizer::tokenize;
pub use types::{
    CitationSegment, DiffStatus, DiffTokenItem, EffectiveSettings, GradeResult, PracticeMode,
    PracticeSettings, SequenceChunk, Token, VerseSettings,
};
