//! Routes for the Werewolf moderator bounded context.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use soiree_core::command::Command;
use soiree_core::error::DomainError;
use soiree_core::player::Player;
use tracing::{info, instrument};
use uuid::Uuid;

use soiree_werewolf::application::command_handlers;
use soiree_werewolf::application::query_handlers::{self, GameView};
use soiree_werewolf::domain::commands;
use soiree_werewolf::domain::roles::{Role, RoleCounts, default_role_counts};
use soiree_werewolf::domain::workflow::ModeratorAction;

use crate::error::ApiError;
use crate::routes::CommandResponse;
use crate::state::AppState;

/// Query string for GET /default-roles.
#[derive(Debug, Deserialize)]
pub struct DefaultRolesQuery {
    /// Table size to build a deck for.
    pub player_count: u32,
}

/// Response body for GET /default-roles.
#[derive(Debug, Serialize)]
pub struct DefaultRolesResponse {
    /// Suggested copies per role.
    pub role_counts: RoleCounts,
    /// Cards in the suggested deck.
    pub total: u64,
}

/// One entry of the role catalogue.
#[derive(Debug, Serialize)]
pub struct RoleEntry {
    pub role: Role,
    pub name: &'static str,
    pub description: &'static str,
    pub night_action: &'static str,
    pub wolf_aligned: bool,
}

/// Request body for POST /distribute-roles.
#[derive(Debug, Deserialize)]
pub struct DistributeRolesRequest {
    /// Re-deal an existing game; a new game is created when absent.
    #[serde(default)]
    pub game_id: Option<Uuid>,
    /// The seated roster, in reveal order.
    pub players: Vec<Player>,
    /// Deck composition; defaults to the suggested deck for the table.
    #[serde(default)]
    pub role_counts: Option<RoleCounts>,
}

/// Request body for the commands that only name a game.
#[derive(Debug, Deserialize)]
pub struct GameRequest {
    /// The game to act on.
    pub game_id: Uuid,
}

/// Request body for POST /act.
#[derive(Debug, Deserialize)]
pub struct ActRequest {
    /// The game being moderated.
    pub game_id: Uuid,
    /// The moderator's answer to the open prompt.
    pub action: ModeratorAction,
}

/// GET /default-roles
async fn default_roles(Query(query): Query<DefaultRolesQuery>) -> Json<DefaultRolesResponse> {
    let role_counts = default_role_counts(query.player_count);
    let total = role_counts.total();
    Json(DefaultRolesResponse { role_counts, total })
}

/// GET /roles
async fn role_catalogue() -> Json<Vec<RoleEntry>> {
    Json(
        Role::ALL
            .into_iter()
            .map(|role| RoleEntry {
                role,
                name: role.name(),
                description: role.description(),
                night_action: role.night_action(),
                wolf_aligned: role.is_wolf_aligned(),
            })
            .collect(),
    )
}

/// POST /distribute-roles
#[instrument(skip(state, request), fields(players = request.players.len()))]
async fn distribute_roles(
    State(state): State<AppState>,
    Json(request): Json<DistributeRolesRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let role_counts = match request.role_counts {
        Some(counts) => counts,
        None => {
            let seated = u32::try_from(request.players.len())
                .map_err(|_| DomainError::validation("too many players"))?;
            default_role_counts(seated)
        }
    };
    let command = commands::DistributeRoles {
        correlation_id: Uuid::new_v4(),
        game_id: request.game_id,
        players: request.players,
        role_counts,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        "handling command"
    );

    let result = command_handlers::handle_distribute_roles(
        &command,
        state.clock.as_ref(),
        &*state.rng,
        &*state.event_repository,
    )
    .await?;

    Ok(Json(CommandResponse::new(
        result.aggregate_id,
        &result.stored_events,
    )))
}

/// POST /reveal-next
#[instrument(skip(state, request), fields(game_id = %request.game_id))]
async fn reveal_next(
    State(state): State<AppState>,
    Json(request): Json<GameRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::RevealNextRole {
        correlation_id: Uuid::new_v4(),
        game_id: request.game_id,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        "handling command"
    );

    let result = command_handlers::handle_reveal_next_role(
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

/// POST /start-moderation
#[instrument(skip(state, request), fields(game_id = %request.game_id))]
async fn start_moderation(
    State(state): State<AppState>,
    Json(request): Json<GameRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::StartModeration {
        correlation_id: Uuid::new_v4(),
        game_id: request.game_id,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        "handling command"
    );

    let result = command_handlers::handle_start_moderation(
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

/// POST /act
#[instrument(skip(state, request), fields(game_id = %request.game_id))]
async fn act(
    State(state): State<AppState>,
    Json(request): Json<ActRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::Moderate {
        correlation_id: Uuid::new_v4(),
        game_id: request.game_id,
        action: request.action,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        action = ?command.action,
        "handling command"
    );

    let result = command_handlers::handle_moderate(
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

/// POST /final-reveal
#[instrument(skip(state, request), fields(game_id = %request.game_id))]
async fn final_reveal(
    State(state): State<AppState>,
    Json(request): Json<GameRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::ShowFinalReveal {
        correlation_id: Uuid::new_v4(),
        game_id: request.game_id,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        "handling command"
    );

    let result = command_handlers::handle_show_final_reveal(
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

/// POST /restart
#[instrument(skip(state, request), fields(game_id = %request.game_id))]
async fn restart(
    State(state): State<AppState>,
    Json(request): Json<GameRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::RestartGame {
        correlation_id: Uuid::new_v4(),
        game_id: request.game_id,
    };

    info!(
        correlation_id = %command.correlation_id,
        command = command.command_type(),
        "handling command"
    );

    let result = command_handlers::handle_restart_game(
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

/// GET /{game_id}
#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    let view = query_handlers::get_game_by_id(game_id, &*state.event_repository).await?;
    Ok(Json(view))
}

/// Returns the router for the werewolf context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/default-roles", get(default_roles))
        .route("/roles", get(role_catalogue))
        .route("/distribute-roles", post(distribute_roles))
        .route("/reveal-next", post(reveal_next))
        .route("/start-moderation", post(start_moderation))
        .route("/act", post(act))
        .route("/final-reveal", post(final_reveal))
        .route("/restart", post(restart))
        .route("/{game_id}", get(get_game))
}
