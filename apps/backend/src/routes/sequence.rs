//! Sequence game endpoints

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use verse_core::practice::sequence::presentation_order;
use verse_core::{chunk_verse, PracticeSession, SequenceGame};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn settings_for(state: &AppState, words_per_chunk: Option<usize>) -> EffectiveSettings {
    state.settings(Some(&VerseSettings {
        words_per_chunk,
        ..Default::default()
    }))
}

/// POST /api/sequence/chunks
pub async fn chunks(
    State(state): State<AppState>,
    Json(payload): Json<ChunksRequest>,
) -> Result<Json<ChunksResponse>> {
    state.check_input(&[&payload.text])?;
    let settings = settings_for(&state, payload.words_per_chunk);
    let chunks = chunk_verse(&payload.text, settings.words_per_chunk);
    let shuffled_order = presentation_order(&chunks, &mut rng_for(payload.seed));

    Ok(Json(ChunksResponse {
        chunks,
        shuffled_order,
    }))
}

/// POST /api/sequence/replay
///
/// Plays `picks` against a fresh game and reports each placement.
pub async fn replay(
    State(state): State<AppState>,
    Json(payload): Json<SequenceReplayRequest>,
) -> Result<Json<SequenceReplayResponse>> {
    state.check_input(&[&payload.text])?;
    let settings = settings_for(&state, payload.words_per_chunk);
    let mut game = SequenceGame::from_text(&payload.text, &settings, &mut rng_for(payload.seed))?;

    let placements = payload
        .picks
        .iter()
        .map(|&pick| game.place(pick))
        .collect::<verse_core::Result<Vec<_>>>()?;

    Ok(Json(SequenceReplayResponse {
        placements,
        complete: game.is_complete(),
        mistakes: game.mistakes(),
        accuracy: game.accuracy(),
    }))
}
