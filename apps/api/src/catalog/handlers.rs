//! Axum route handler for the opportunities listing.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::programs::{filter_programs, format_programs_for_display};
use crate::catalog::{Category, ProgramRecord};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OpportunitiesQuery {
    pub session_id: Uuid,
    /// `tech` or `non-tech`; anything else is rejected by the extractor.
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct OpportunitiesResponse {
    pub category: Option<Category>,
    pub programs: Vec<ProgramRecord>,
    /// Markdown rendering of `programs`, or the empty-state message.
    pub display: String,
}

/// GET /api/v1/opportunities
///
/// Ranks programs against the session profile's interests and education level.
pub async fn handle_opportunities(
    State(state): State<AppState>,
    Query(params): Query<OpportunitiesQuery>,
) -> Result<Json<OpportunitiesResponse>, AppError> {
    let session = state.sessions.get_logged_in(params.session_id).await?;
    let profile = &session.profile;

    let ranked = filter_programs(
        &state.catalogs.programs,
        &profile.interests,
        profile.education_label(),
        params.category,
    );
    let display = format_programs_for_display(&ranked);

    Ok(Json(OpportunitiesResponse {
        category: params.category,
        programs: ranked.into_iter().cloned().collect(),
        display,
    }))
}
