//! Tokenizing and typed-recall grading endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/tokenize
pub async fn tokenize(
    State(state): State<AppState>,
    Json(payload): Json<TokenizeRequest>,
) -> Result<Json<TokenizeResponse>> {
    state.check_input(&[&payload.text])?;

    Ok(Json(TokenizeResponse {
        tokens: verse_core::tokenize(&payload.text),
    }))
}

/// POST /api/grade
pub async fn grade(
    State(state): State<AppState>,
    Json(payload): Json<GradeRequest>,
) -> Result<Json<GradeResponse>> {
    state.check_input(&[&payload.target, &payload.attempt])?;
    let settings = state.settings(Some(&VerseSettings {
        pass_threshold: payload.pass_threshold,
        ..Default::default()
    }));

    let result = verse_core::grade(&payload.target, &payload.attempt)?;
    let feedback = Feedback::from_accuracy(result.accuracy, settings.pass_threshold);

    Ok(Json(GradeResponse {
        result,
        feedback,
        passed: feedback.is_pass(),
    }))
}
