//! Sequence game: shuffled chunks of a verse are tapped back into order.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{placement_accuracy, PracticeSession};
use crate::chunking::chunk_verse;
use crate::error::{PracticeError, Result};
use crate::types::{EffectiveSettings, PracticeMode, SequenceChunk};

/// Shuffles tried before falling back to a rotation.
const MAX_SHUFFLES: usize = 8;

/// Result of placing one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Correct,
    Incorrect,
    /// Correct, and it was the last chunk.
    Complete,
}

/// A running sequence game.
#[derive(Debug, Clone)]
pub struct SequenceGame {
    chunks: Vec<SequenceChunk>,
    /// Indices into `chunks` of the unplaced pieces, in presentation order.
    pool: Vec<usize>,
    placed: usize,
    mistakes: u32,
}

impl SequenceGame {
    /// Start a game over `chunks`, given in verse order.
    pub fn new<R: Rng + ?Sized>(chunks: Vec<SequenceChunk>, rng: &mut R) -> Result<Self> {
        if chunks.is_empty() {
            return Err(PracticeError::EmptyInput);
        }
        let pool = presentation_order(&chunks, rng);
        Ok(Self {
            chunks,
            pool,
            placed: 0,
            mistakes: 0,
        })
    }

    /// Chunk the verse text and start a game over it.
    pub fn from_text<R: Rng + ?Sized>(
        text: &str,
        settings: &EffectiveSettings,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(chunk_verse(text, settings.words_per_chunk), rng)
    }

    /// Chunks in verse order.
    pub fn answer_key(&self) -> &[SequenceChunk] {
        &self.chunks
    }

    /// Unplaced chunks, in the order they are shown.
    pub fn pool(&self) -> Vec<&SequenceChunk> {
        self.pool.iter().map(|&i| &self.chunks[i]).collect()
    }

    /// Chunks placed so far.
    pub fn placed(&self) -> &[SequenceChunk] {
        &self.chunks[..self.placed]
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Place the chunk at `pool_index` of [`SequenceGame::pool`] next.
    ///
    /// Chunks with the same text are interchangeable.
    pub fn place(&mut self, pool_index: usize) -> Result<Placement> {
        if self.is_complete() {
            return Err(PracticeError::SessionComplete);
        }
        let chosen = *self
            .pool
            .get(pool_index)
            .ok_or(PracticeError::UnknownChunk { index: pool_index })?;

        if self.chunks[chosen].text != self.chunks[self.placed].text {
            self.mistakes += 1;
            return Ok(Placement::Incorrect);
        }

        self.pool.remove(pool_index);
        self.placed += 1;

        if self.is_complete() {
            debug!(
                chunks = self.chunks.len(),
                mistakes = self.mistakes,
                "sequence game complete"
            );
            Ok(Placement::Complete)
        } else {
            Ok(Placement::Correct)
        }
    }
}

impl PracticeSession for SequenceGame {
    fn mode(&self) -> PracticeMode {
        PracticeMode::Sequence
    }

    fn is_complete(&self) -> bool {
        self.placed >= self.chunks.len()
    }

    fn accuracy(&self) -> u8 {
        placement_accuracy(self.placed, self.mistakes)
    }
}

/// Shuffled indices into `chunks` that do not already spell out the answer,
/// unless every chunk reads the same.
pub fn presentation_order<R: Rng + ?Sized>(
    chunks: &[SequenceChunk],
    rng: &mut R,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..chunks.len()).collect();
    if order.len() < 2 {
        return order;
    }
    let solved = |order: &[usize]| {
        order
            .iter()
            .enumerate()
            .all(|(pos, &i)| chunks[i].text == chunks[pos].text)
    };

    for _ in 0..MAX_SHUFFLES {
        order.shuffle(rng);
        if !solved(&order) {
            return order;
        }
    }

    // Rotating changes the reading unless all chunks are identical.
    order.rotate_left(1);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use pretty_assertions::assert_eq;

    fn chunk(text: &str) -> SequenceChunk {
        SequenceChunk {
            text: text.to_string(),
            word_count: text.split_whitespace().count(),
        }
    }

    fn game(texts: &[&str], seed: u64) -> SequenceGame {
        let mut rng = StdRng::seed_from_u64(seed);
        SequenceGame::new(texts.iter().map(|t| chunk(t)).collect(), &mut rng).unwrap()
    }

    fn pool_index_of(game: &SequenceGame, text: &str) -> usize {
        game.pool().iter().position(|c| c.text == text).unwrap()
    }

    #[test]
    fn presentation_never_starts_solved() {
        let chunks: Vec<_> = ["a b", "c d", "e f"].iter().map(|t| chunk(t)).collect();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let order = presentation_order(&chunks, &mut rng);
            assert_ne!(order, vec![0, 1, 2]);
            let mut sorted = order.clone();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2]);
        }
    }

    #[test]
    fn identical_chunks_are_left_alone() {
        let chunks: Vec<_> = ["amén", "amén"].iter().map(|t| chunk(t)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(presentation_order(&chunks, &mut rng).len(), 2);
    }

    #[test]
    fn short_lists_keep_their_order() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(presentation_order(&[], &mut rng).is_empty());
        assert_eq!(presentation_order(&[chunk("amén")], &mut rng), vec![0]);
    }

    #[test]
    fn placing_in_order_completes() {
        let mut g = game(&["En el principio", "creó Dios", "los cielos"], 1);
        assert_eq!(g.place(pool_index_of(&g, "En el principio")).unwrap(), Placement::Correct);
        assert_eq!(g.place(pool_index_of(&g, "creó Dios")).unwrap(), Placement::Correct);
        assert_eq!(g.place(pool_index_of(&g, "los cielos")).unwrap(), Placement::Complete);
        assert!(g.is_complete());
        assert_eq!(g.accuracy(), 100);
        assert_eq!(g.place(0), Err(PracticeError::SessionComplete));
    }

    #[test]
    fn wrong_chunk_counts_a_mistake() {
        let mut g = game(&["uno dos", "tres cuatro"], 3);
        assert_eq!(g.place(pool_index_of(&g, "tres cuatro")).unwrap(), Placement::Incorrect);
        assert_eq!(g.pool().len(), 2);
        assert_eq!(g.mistakes(), 1);

        g.place(pool_index_of(&g, "uno dos")).unwrap();
        g.place(0).unwrap();
        assert_eq!(g.accuracy(), 67);
        assert_eq!(g.placed().len(), 2);
    }

    #[test]
    fn duplicate_texts_are_interchangeable() {
        let mut g = game(&["santo", "santo", "santo es"], 11);
        let first_santo = pool_index_of(&g, "santo");
        assert_eq!(g.place(first_santo).unwrap(), Placement::Correct);
        let other_santo = pool_index_of(&g, "santo");
        assert_eq!(g.place(other_santo).unwrap(), Placement::Correct);
    }

    #[test]
    fn unknown_pool_index() {
        let mut g = game(&["uno dos", "tres cuatro"], 5);
        assert_eq!(g.place(9), Err(PracticeError::UnknownChunk { index: 9 }));
    }

    #[test]
    fn from_text_uses_chunk_size() {
        let mut rng = StdRng::seed_from_u64(2);
        let settings = EffectiveSettings {
            words_per_chunk: 2,
            pass_threshold: 90,
            max_attempts_per_word: 3,
        };
        let g = SequenceGame::from_text("gracia y paz a vosotros", &settings, &mut rng).unwrap();
        let key: Vec<_> = g.answer_key().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(key, vec!["gracia y", "paz a vosotros"]);
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            SequenceGame::new(Vec::new(), &mut rng).unwrap_err(),
            PracticeError::EmptyInput
        );
    }
}
