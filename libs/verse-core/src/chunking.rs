//! Chunking of verse text for the sequence game.
//!
//! A verse is cut into short runs of words (three by default) that the
//! player puts back in order. Punctuation rides along with the words it
//! belongs to, opening marks (`¿`, `¡`, and quotes or brackets after a
//! space) stick to the word after them, and known multi-word names are
//! never split across chunks. Chunks break only where the verse has
//! whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize_for_compare;
use crate::sanitize::{sanitize_verse, SupTags};
use crate::tokenizer::tokenize_with_gaps;
use crate::types::SequenceChunk;

pub const DEFAULT_WORDS_PER_CHUNK: usize = 3;

/// Multi-word names and phrases kept inside one chunk, in normalized form.
///
/// Checked in order and the first hit wins, so an entry must come before
/// any shorter entry it starts with.
pub const COMPOUND_NAMES: &[&[&str]] = &[
    &["reino", "de", "los", "cielos"],
    &["reino", "de", "dios"],
    &["hijo", "del", "hombre"],
    &["hijo", "de", "dios"],
    &["espiritu", "santo"],
    &["jesus", "cristo"],
    &["cristo", "jesus"],
    &["senor", "jesucristo"],
    &["senor", "jesus"],
    &["juan", "bautista"],
    &["maria", "magdalena"],
    &["simon", "pedro"],
    &["monte", "de", "los", "olivos"],
    &["mar", "de", "galilea"],
    &["poncio", "pilato"],
    &["dios", "padre"],
    &["nuevo", "pacto"],
    &["tierra", "prometida"],
];

/// Marks that open a chunk whenever they appear.
const INVERTED_MARKS: &[char] = &['¿', '¡'];
/// Marks that open a chunk when whitespace comes before them.
const OPENING_MARKS: &[char] = &['¿', '¡', '«', '“', '‘', '"', '(', '['];
const CLOSING_MARKS: &[char] = &['.', ',', ';', ':', '!', '?', '…'];

static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.;:!?…])").unwrap());

/// Cut verse text into chunks of about `words_per_chunk` words.
///
/// A `words_per_chunk` of 0 is treated as 1. The chunks come back in verse
/// order; shuffling is up to the caller. Chunks only break where the verse
/// has whitespace, so joining them with single spaces gives the verse back.
pub fn chunk_verse(text: &str, words_per_chunk: usize) -> Vec<SequenceChunk> {
    let tokens = tokenize_with_gaps(&sanitize_verse(text, SupTags::Keep));
    if tokens.is_empty() {
        return Vec::new();
    }

    let keys: Vec<String> = tokens
        .iter()
        .filter(|(t, _)| !t.is_punct())
        .map(|(t, _)| normalize_for_compare(&t.text))
        .collect();

    let mut builder = ChunkBuilder::new(words_per_chunk.max(1));
    let mut word_index = 0;

    for (token, gap) in &tokens {
        if token.is_punct() {
            builder.push_punct(&token.text, *gap);
            continue;
        }
        if !builder.in_compound() {
            if let Some(len) = compound_at(&keys, word_index) {
                builder.start_compound(len);
            }
        }
        builder.push_word(&token.text, *gap);
        word_index += 1;
    }

    builder.finish()
}

/// Length of the compound name starting at `index`, if any.
pub fn compound_at(keys: &[String], index: usize) -> Option<usize> {
    let rest = keys.get(index..)?;
    COMPOUND_NAMES
        .iter()
        .find(|entry| {
            entry.len() <= rest.len()
                && entry
                    .iter()
                    .zip(rest)
                    .all(|(name, key)| *name == key.as_str())
        })
        .map(|entry| entry.len())
}

/// Remove spaces before closing punctuation and collapse whitespace.
pub fn squash_punctuation(text: &str) -> String {
    SPACE_BEFORE_PUNCT
        .replace_all(text, "$1")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_opening(mark: &str, gap: bool) -> bool {
    let only = |set: &[char]| !mark.is_empty() && mark.chars().all(|c| set.contains(&c));
    only(INVERTED_MARKS) || (gap && only(OPENING_MARKS))
}

fn is_closing(mark: &str) -> bool {
    mark.chars().any(|c| CLOSING_MARKS.contains(&c))
}

/// Append `piece` to `text`, with a space first if there was a gap.
fn join(text: &mut String, piece: &str, gap: bool) {
    if gap && !text.is_empty() {
        text.push(' ');
    }
    text.push_str(piece);
}

struct ChunkBuilder {
    words_per_chunk: usize,
    chunks: Vec<SequenceChunk>,
    buffer: String,
    words: usize,
    /// Opening marks waiting for the next word.
    pending_prefix: String,
    /// Whether a gap came before the pending marks.
    pending_gap: bool,
    /// Words of the current compound name still to come.
    compound_left: usize,
}

impl ChunkBuilder {
    fn new(words_per_chunk: usize) -> Self {
        Self {
            words_per_chunk,
            chunks: Vec::new(),
            buffer: String::new(),
            words: 0,
            pending_prefix: String::new(),
            pending_gap: false,
            compound_left: 0,
        }
    }

    fn in_compound(&self) -> bool {
        self.compound_left > 0
    }

    fn start_compound(&mut self, len: usize) {
        self.compound_left = len;
    }

    fn push_word(&mut self, word: &str, gap: bool) {
        if self.pending_prefix.is_empty() {
            if !gap && self.buffer.is_empty() {
                self.reopen_last();
            }
            join(&mut self.buffer, word, gap);
        } else {
            let mut piece = std::mem::take(&mut self.pending_prefix);
            join(&mut piece, word, gap);
            join(&mut self.buffer, &piece, self.pending_gap);
        }
        self.words += 1;
        self.compound_left = self.compound_left.saturating_sub(1);

        if self.words >= self.words_per_chunk && !self.in_compound() {
            self.flush();
        }
    }

    fn push_punct(&mut self, mark: &str, gap: bool) {
        // Keep marks in source order behind an opening mark.
        if !self.pending_prefix.is_empty() {
            join(&mut self.pending_prefix, mark, gap);
            return;
        }

        if is_opening(mark, gap) {
            if !gap && self.buffer.is_empty() {
                self.reopen_last();
            } else if gap && self.words > 0 && !self.in_compound() {
                self.flush();
            }
            self.pending_prefix.push_str(mark);
            self.pending_gap = gap;
            return;
        }

        self.attach(mark, gap);
        if is_closing(mark) && self.words > 0 && !self.in_compound() {
            self.flush();
        }
    }

    /// Append a mark to the open chunk. Closing marks, and marks with no gap
    /// before them, go on the last finished chunk when nothing is open.
    fn attach(&mut self, mark: &str, gap: bool) {
        if self.buffer.is_empty() && (!gap || is_closing(mark)) {
            if let Some(last) = self.chunks.last_mut() {
                join(&mut last.text, mark, gap);
                last.text = squash_punctuation(&last.text);
                return;
            }
        }
        join(&mut self.buffer, mark, gap);
    }

    /// Move the last finished chunk back into the buffer.
    fn reopen_last(&mut self) {
        if let Some(last) = self.chunks.pop() {
            self.buffer = last.text;
            self.words = last.word_count;
        }
    }

    fn flush(&mut self) {
        let text = squash_punctuation(&self.buffer);
        if !text.is_empty() {
            self.chunks.push(SequenceChunk {
                text,
                word_count: self.words,
            });
        }
        self.buffer.clear();
        self.words = 0;
    }

    fn finish(mut self) -> Vec<SequenceChunk> {
        let pending = std::mem::take(&mut self.pending_prefix);
        if !pending.is_empty() {
            let gap = self.pending_gap;
            self.attach(&pending, gap);
        }

        // Marks with no word after them close out the last chunk.
        match self.chunks.last_mut() {
            Some(last) if self.words == 0 && !self.buffer.is_empty() => {
                join(&mut last.text, &self.buffer, true);
                last.text = squash_punctuation(&last.text);
                self.buffer.clear();
            }
            _ => self.flush(),
        }

        if self.chunks.len() >= 2 && self.chunks.last().map(|c| c.word_count) == Some(1) {
            if let Some(last) = self.chunks.pop() {
                if let Some(prev) = self.chunks.last_mut() {
                    prev.text = squash_punctuation(&format!("{} {}", prev.text, last.text));
                    prev.word_count += last.word_count;
                }
            }
        }

        self.chunks
    }
}
