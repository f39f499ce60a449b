//! Axum route handlers for the chat flows.
//!
//! Each handler snapshots the session, makes its model calls without holding
//! the session lock, then writes the new turns back.

use axum::{extract::{Query, State}, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::colleges::{format_colleges_for_context, match_colleges};
use crate::catalog::CollegeRecord;
use crate::errors::AppError;
use crate::guidance::enrichment::{add_emergency_footer, enrich_question, mentions_crisis};
use crate::guidance::prompts::{
    build_guidance_user_prompt, build_help_user_prompt, build_support_user_prompt,
    GUIDANCE_SYSTEM, HELP_SYSTEM, SUPPORT_SYSTEM,
};
use crate::llm_client::{Message, ResponseFormat};
use crate::models::chat::{ChatTurn, Role};
use crate::roadmap::{generate_roadmap, StageCard, StructuredRoadmap};
use crate::session::handlers::{SessionQuery, SessionRequest};
use crate::session::Session;
use crate::state::AppState;

pub const ROADMAP_UNAVAILABLE_NOTICE: &str = "Roadmap blocks could not be created this time, \
    but you can still follow the written guidance above.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub session_id: Uuid,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub roadmap: Option<StructuredRoadmap>,
    pub colleges: Vec<CollegeRecord>,
}

#[derive(Debug, Serialize)]
pub struct GuidanceResponse {
    pub history: Vec<ChatTurn>,
    pub last_question: Option<String>,
    pub roadmap: Option<StructuredRoadmap>,
    pub stages: Vec<StageCard>,
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub session_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub history: Vec<ChatTurn>,
}

fn require_text(text: &str, field: &str) -> Result<String, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Career guidance
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/guidance/ask
///
/// Pipeline: roadmap (JSON mode) → college match → kb context → guidance answer.
/// A missing roadmap only means no college context; the answer is still produced.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = require_text(&req.question, "question")?;
    let session = state.sessions.get_logged_in(req.session_id).await?;
    let model = state.llm.as_ref();

    let roadmap = generate_roadmap(model, &session.profile, &question).await;

    let matched = match_colleges(&state.catalogs.colleges, roadmap.as_ref());
    let kb_context = format_colleges_for_context(&matched);
    let colleges: Vec<CollegeRecord> = matched.into_iter().cloned().collect();
    info!(
        "Guidance for session {}: roadmap={}, colleges={}",
        req.session_id,
        roadmap.is_some(),
        colleges.len()
    );

    let messages = vec![
        Message::system(GUIDANCE_SYSTEM),
        Message::user(build_guidance_user_prompt(
            &session.profile,
            &enrich_question(&question),
            &kb_context,
        )),
    ];
    let answer = model
        .complete_or_sentinel(&messages, ResponseFormat::Text)
        .await;

    state
        .sessions
        .update(req.session_id, |s| {
            // each question starts a fresh conversation
            s.guidance_history = vec![ChatTurn::user(question.clone()), ChatTurn::assistant(answer.clone())];
            s.last_guidance_question = Some(question);
            s.last_roadmap = roadmap.clone();
            Ok(())
        })
        .await?;

    Ok(Json(AskResponse {
        answer,
        roadmap,
        colleges,
    }))
}

/// GET /api/v1/guidance
///
/// The current conversation plus stage cards for the last roadmap.
pub async fn handle_get_guidance(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<GuidanceResponse>, AppError> {
    let session = state.sessions.get_logged_in(params.session_id).await?;

    let stages = session
        .last_roadmap
        .as_ref()
        .map(StructuredRoadmap::stage_cards)
        .unwrap_or_default();

    let notice = (session.last_guidance_question.is_some() && stages.is_empty())
        .then(|| ROADMAP_UNAVAILABLE_NOTICE.to_string());

    Ok(Json(GuidanceResponse {
        history: session.guidance_history,
        last_question: session.last_guidance_question,
        roadmap: session.last_roadmap,
        stages,
        notice,
    }))
}

/// POST /api/v1/guidance/clear
pub async fn handle_clear_guidance(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<Vec<ChatTurn>>, AppError> {
    clear_history(&state, req.session_id, |s| {
        s.last_guidance_question = None;
        s.last_roadmap = None;
        &mut s.guidance_history
    })
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Emotional support
// ────────────────────────────────────────────────────────────────────────────

/// Full conversation for the support model: system prompt, every past turn
/// (user turns re-wrapped with profile context), then the new message.
pub fn build_support_messages(session: &Session, message: &str) -> Vec<Message> {
    let mut messages = vec![Message::system(SUPPORT_SYSTEM)];

    for turn in &session.support_history {
        match turn.role {
            Role::User => messages.push(Message::user(build_support_user_prompt(
                &session.profile,
                &turn.content,
            ))),
            _ => messages.push(Message::from(turn)),
        }
    }

    messages.push(Message::user(build_support_user_prompt(
        &session.profile,
        message,
    )));
    messages
}

/// POST /api/v1/support/message
pub async fn handle_support_message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = require_text(&req.message, "message")?;
    let session = state.sessions.get_logged_in(req.session_id).await?;

    let messages = build_support_messages(&session, &message);
    let mut reply = state
        .llm
        .complete_or_sentinel(&messages, ResponseFormat::Text)
        .await;

    if mentions_crisis(&message) {
        reply = add_emergency_footer(&reply);
    }

    let history = state
        .sessions
        .update(req.session_id, |s| {
            s.support_history.push(ChatTurn::user(message));
            s.support_history.push(ChatTurn::assistant(reply.clone()));
            Ok(s.support_history.clone())
        })
        .await?;

    Ok(Json(ChatResponse { reply, history }))
}

/// POST /api/v1/support/clear
pub async fn handle_clear_support(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<Vec<ChatTurn>>, AppError> {
    clear_history(&state, req.session_id, |s| &mut s.support_history).await
}

// ────────────────────────────────────────────────────────────────────────────
// In-app help
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/help/message
pub async fn handle_help_message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = require_text(&req.message, "message")?;
    state.sessions.get_logged_in(req.session_id).await?;

    let messages = vec![
        Message::system(HELP_SYSTEM),
        Message::user(build_help_user_prompt(&message)),
    ];
    let reply = state
        .llm
        .complete_or_sentinel(&messages, ResponseFormat::Text)
        .await;

    let history = state
        .sessions
        .update(req.session_id, |s| {
            s.help_history.push(ChatTurn::user(message));
            s.help_history.push(ChatTurn::assistant(reply.clone()));
            Ok(s.help_history.clone())
        })
        .await?;

    Ok(Json(ChatResponse { reply, history }))
}

/// POST /api/v1/help/clear
pub async fn handle_clear_help(
    State(state): State<AppState>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<Vec<ChatTurn>>, AppError> {
    clear_history(&state, req.session_id, |s| &mut s.help_history).await
}

async fn clear_history(
    state: &AppState,
    session_id: Uuid,
    history: fn(&mut Session) -> &mut Vec<ChatTurn>,
) -> Result<Json<Vec<ChatTurn>>, AppError> {
    state
        .sessions
        .update(session_id, |s| {
            if !s.logged_in {
                return Err(AppError::Unauthorized("Please log in first.".to_string()));
            }
            history(s).clear();
            Ok(Json(Vec::new()))
        })
        .await
}
