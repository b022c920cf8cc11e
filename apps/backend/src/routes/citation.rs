//! Citation endpoints

use axum::{extract::State, Json};
use verse_core::{extract_citation_segments, CitationChallenge, PracticeSession};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/citation/segments
pub async fn segments(
    State(state): State<AppState>,
    Json(payload): Json<SegmentsRequest>,
) -> Result<Json<SegmentsResponse>> {
    state.check_input(&[&payload.reference])?;

    Ok(Json(SegmentsResponse {
        segments: extract_citation_segments(&payload.reference),
    }))
}

/// POST /api/citation/replay
pub async fn replay(
    State(state): State<AppState>,
    Json(payload): Json<CitationReplayRequest>,
) -> Result<Json<CitationReplayResponse>> {
    state.check_input(&[&payload.reference])?;
    let mut challenge = CitationChallenge::new(&payload.reference)?;
    let accepted = payload
        .ids
        .iter()
        .map(|id| challenge.append(id))
        .collect::<verse_core::Result<Vec<_>>>()?;

    Ok(Json(CitationReplayResponse {
        accepted,
        assembled: challenge.assembled(),
        complete: challenge.is_complete(),
        mistakes: challenge.mistakes(),
        accuracy: challenge.accuracy(),
    }))
}
