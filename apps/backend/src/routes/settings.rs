//! Settings endpoints

use axum::{extract::State, Json};

use crate::models::*;
use crate::AppState;

/// GET /api/settings
pub async fn get_all(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(SettingsResponse {
        settings: state.settings(None),
        modes: vec![
            PracticeMode::Typed,
            PracticeMode::Stealth,
            PracticeMode::Sequence,
            PracticeMode::Citation,
        ],
    })
}
