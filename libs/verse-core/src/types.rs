//! Core types for verse practice.

use serde::{Deserialize, Serialize};

/// A word, or a punctuation run, taken from verse text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Verse number from the nearest preceding `<sup>N</sup>` marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse: Option<u32>,
}

impl Token {
    pub fn new(text: impl Into<String>, verse: Option<u32>) -> Self {
        Self {
            text: text.into(),
            verse,
        }
    }

    /// True when the token carries no letters or digits.
    pub fn is_punct(&self) -> bool {
        crate::normalize::is_punct(&self.text)
    }
}

/// Classification of a token in a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStatus {
    /// Present in both target and attempt.
    Match,
    /// In the target but not reproduced by the attempt.
    Missing,
    /// In the attempt but not part of the target.
    Extra,
    /// Punctuation, rendered but never scored.
    Punct,
}

/// One entry of a token-level diff, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffTokenItem {
    pub token: String,
    pub status: DiffStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse: Option<u32>,
}

impl DiffTokenItem {
    pub(crate) fn from_token(token: &Token, status: DiffStatus) -> Self {
        Self {
            token: token.text.clone(),
            status,
            verse: token.verse,
        }
    }
}

/// Outcome of grading an attempt against a target passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Percentage of scorable target words reproduced, 0 to 100.
    pub accuracy: u8,
    pub missed_words: Vec<String>,
    pub extra_words: Vec<String>,
    pub diff: Vec<DiffTokenItem>,
}

impl GradeResult {
    pub fn is_perfect(&self) -> bool {
        self.accuracy == 100
    }
}

/// A multi-word span of verse text used by the sequence game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceChunk {
    pub text: String,
    /// Number of words, punctuation excluded.
    pub word_count: usize,
}

/// One clickable piece of a citation such as "Juan 3:16-18".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationSegment {
    pub id: String,
    pub label: String,
    pub order: usize,
    pub appended: bool,
}

/// Practice mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    Typed,
    Stealth,
    Sequence,
    Citation,
}

impl Default for PracticeMode {
    fn default() -> Self {
        Self::Typed
    }
}

impl PracticeMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Stealth => "stealth",
            Self::Sequence => "sequence",
            Self::Citation => "citation",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "typed" => Some(Self::Typed),
            "stealth" => Some(Self::Stealth),
            "sequence" => Some(Self::Sequence),
            "citation" => Some(Self::Citation),
            _ => None,
        }
    }
}

/// Global practice settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSettings {
    pub words_per_chunk: usize,
    /// Minimum typed-recall accuracy that counts as a pass.
    pub pass_threshold: u8,
    /// Wrong tries allowed per word in stealth mode before it is revealed.
    pub max_attempts_per_word: u32,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            words_per_chunk: crate::chunking::DEFAULT_WORDS_PER_CHUNK,
            pass_threshold: 90,
            max_attempts_per_word: 3,
        }
    }
}

/// Per-verse settings (all fields optional for overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerseSettings {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_per_chunk: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_threshold: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts_per_word: Option<u32>,
}

impl VerseSettings {
    /// Create new verse settings with only the reference set.
    pub fn new(reference: String) -> Self {
        Self {
            reference,
            ..Default::default()
        }
    }
}

/// Effective settings (global merged with verse overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub words_per_chunk: usize,
    pub pass_threshold: u8,
    pub max_attempts_per_word: u32,
}

impl EffectiveSettings {
    /// Merge global settings with optional verse settings.
    pub fn merge(global: &PracticeSettings, verse: Option<&VerseSettings>) -> Self {
        match verse {
            Some(v) => Self {
                words_per_chunk: v.words_per_chunk.unwrap_or(global.words_per_chunk),
                pass_threshold: v
                    .pass_threshold
                    .unwrap_or(global.pass_threshold)
                    .min(100),
                max_attempts_per_word: v
                    .max_attempts_per_word
                    .unwrap_or(global.max_attempts_per_word),
            },
            None => Self {
                words_per_chunk: global.words_per_chunk,
                pass_threshold: global.pass_threshold.min(100),
                max_attempts_per_word: global.max_attempts_per_word,
            },
        }
    }
}

impl From<&PracticeSettings> for EffectiveSettings {
    fn from(global: &PracticeSettings) -> Self {
        Self::merge(global, None)
    }
}
