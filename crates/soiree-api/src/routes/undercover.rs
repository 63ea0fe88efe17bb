//! Routes for the Undercover bounded context.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use soiree_core::command::Command;
use soiree_core::player::Player;
use soiree_words::Category;
use tracing::{info, instrument};
use uuid::Uuid;

use soiree_undercover::application::command_handlers;
use soiree_undercover::application::query_handlers::{self, RoundView};
use soiree_undercover::domain::commands;

use crate::error::ApiError;
use crate::routes::CommandResponse;
use crate::state::AppState;

fn one() -> u32 {
    1
}

/// Request body for POST /start-round.
#[derive(Debug, Deserialize)]
pub struct StartRoundRequest {
    /// Seated players; the deal shuffles them into a turn order.
    pub players: Vec<Player>,
    #[serde(default)]
    pub category: Category,
    /// Requested impostors; clamped to what the table allows.
    #[serde(default = "one")]
    pub undercover_count: u32,
}

/// Request body for the commands that only name a round.
#[derive(Debug, Deserialize)]
pub struct RoundRequest {
    /// The round to act on.
    pub round_id: Uuid,
}

/// POST /start-round
#[instrument(
    skip(state, request),
    fields(players = request.players.len(), category = %request.category)
)]
async fn start_round(
    State(state): State<AppState>,
    Json(request): Json<StartRoundRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::StartRound {
        correlation_id: Uuid::new_v4(),
        players: request.players,
        category: request.category,
        undercover_count: request.undercover_count,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        "handling command"
    );

    let result = command_handlers::handle_start_round(
        &command,
        state.clock.as_ref(),
        &*state.rng,
        state.words.as_ref(),
        &*state.event_repository,
    )
    .await?;

    Ok(Json(CommandResponse::new(
        result.aggregate_id,
        &result.stored_events,
    )))
}

/// POST /reveal-next
#[instrument(skip(state, request), fields(round_id = %request.round_id))]
async fn reveal_next(
    State(state): State<AppState>,
    Json(request): Json<RoundRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::RevealNextCard {
        correlation_id: Uuid::new_v4(),
        round_id: request.round_id,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        "handling command"
    );

    let result = command_handlers::handle_reveal_next_card(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
    )
    .await?;

    Ok(Json(CommandResponse::new(
        result.aggregate_id,
        &result.stored_events,
    )))
}

/// POST /show-results
#[instrument(skip(state, request), fields(round_id = %request.round_id))]
async fn show_results(
    State(state): State<AppState>,
    Json(request): Json<RoundRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::ShowResults {
        correlation_id: Uuid::new_v4(),
        round_id: request.round_id,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        "handling command"
    );

    let result = command_handlers::handle_show_results(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
    )
    .await?;

    Ok(Json(CommandResponse::new(
        result.aggregate_id,
        &result.stored_events,
    )))
}

/// GET /{round_id}
#[instrument(skip(state))]
async fn get_round(
    State(state): State<AppState>,
    Path(round_id): Path<Uuid>,
) -> Result<Json<RoundView>, ApiError> {
    let view = query_handlers::get_round_by_id(round_id, &*state.event_repository).await?;
    Ok(Json(view))
}

/// Returns the router for the undercover context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start-round", post(start_round))
        .route("/reveal-next", post(reveal_next))
        .route("/show-results", post(show_results))
        .route("/{round_id}", get(get_round))
}
