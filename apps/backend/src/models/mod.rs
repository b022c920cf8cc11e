//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from verse-core
pub use verse_core::practice::{Placement, StealthOutcome, StealthSummary};
pub use verse_core::{
    CitationSegment, EffectiveSettings, Feedback, GradeResult, PracticeMode,
    SequenceChunk, Token, VerseSettings,
};

// === Settings ===

/// Response for GET /api/settings
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    #[serde(flatten)]
    pub settings: EffectiveSettings,
    pub modes: Vec<PracticeMode>,
}

// === Tokenize ===

#[derive(Debug, Deserialize, Serialize)]
pub struct TokenizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResponse {
    pub tokens: Vec<Token>,
}

// === Grade ===

#[derive(Debug, Deserialize, Serialize)]
pub struct GradeRequest {
    pub target: String,
    pub attempt: String,
    #[serde(default)]
    pub pass_threshold: Option<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GradeResponse {
    #[serde(flatten)]
    pub result: GradeResult,
    pub feedback: Feedback,
    pub passed: bool,
}

// === Sequence ===

#[derive(Debug, Deserialize, Serialize)]
pub struct ChunksRequest {
    pub text: String,
    #[serde(default)]
    pub words_per_chunk: Option<usize>,
    /// Seed for a reproducible shuffle
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChunksResponse {
    /// Chunks in verse order
    pub chunks: Vec<SequenceChunk>,
    /// Indices into `chunks` in the order they are shown
    pub shuffled_order: Vec<usize>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SequenceReplayRequest {
    pub text: String,
    #[serde(default)]
    pub words_per_chunk: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Pool indices tapped, in order
    pub picks: Vec<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SequenceReplayResponse {
    pub placements: Vec<Placement>,
    pub complete: bool,
    pub mistakes: u32,
    pub accuracy: u8,
}

// === Stealth ===

#[derive(Debug, Deserialize, Serialize)]
pub struct StealthReplayRequest {
    pub target: String,
    pub words: Vec<String>,
    #[serde(default)]
    pub max_attempts_per_word: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StealthReplayResponse {
    pub outcomes: Vec<StealthOutcome>,
    pub complete: bool,
    pub summary: StealthSummary,
}

// === Citation ===

#[derive(Debug, Deserialize, Serialize)]
pub struct SegmentsRequest {
    pub reference: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentsResponse {
    pub segments: Vec<CitationSegment>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CitationReplayRequest {
    pub reference: String,
    /// Segment ids tapped, in order
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CitationReplayResponse {
    pub accepted: Vec<bool>,
    pub assembled: String,
    pub complete: bool,
    pub mistakes: u32,
    pub accuracy: u8,
}
