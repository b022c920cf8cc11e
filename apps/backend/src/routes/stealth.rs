//! Stealth recall endpoints

use axum::{extract::State, Json};
use verse_core::{PracticeSession, StealthSession};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/stealth/replay
pub async fn replay(
    State(state): State<AppState>,
    Json(payload): Json<StealthReplayRequest>,
) -> Result<Json<StealthReplayResponse>> {
    let mut texts = vec![payload.target.as_str()];
    texts.extend(payload.words.iter().map(String::as_str));
    state.check_input(&texts)?;

    let settings = state.settings(Some(&VerseSettings {
        max_attempts_per_word: payload.max_attempts_per_word,
        ..Default::default()
    }));

    let mut session = StealthSession::new(&payload.target, &settings)?;
    let mut outcomes = Vec::with_capacity(payload.words.len());
    for word in &payload.words {
        outcomes.push(session.submit_word(word)?);
    }

    Ok(Json(StealthReplayResponse {
        outcomes,
        complete: session.is_complete(),
        summary: session.summary(),
    }))
}
