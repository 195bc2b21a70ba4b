use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use resto_domain::rating::StarRating;

use crate::error::DirectoryError;
use crate::extract::{IdPath, JsonBody};
use crate::handlers::{IdRef, MessageResponse, RestaurantRefResponse};
use crate::state::AppState;
use crate::usecase::avis::{
    AvisInput, AvisView, CreateAvisUseCase, DeleteAvisUseCase, GetAvisUseCase, ListAvisUseCase,
    UpdateAvisUseCase,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvisRequest {
    pub content: String,
    /// Range-checked by the use case so an out-of-range value maps to `InvalidStarNb`.
    #[serde(alias = "star_nb")]
    pub star_nb: i64,
    pub user: IdRef,
    pub restaurant: IdRef,
}

impl From<AvisRequest> for AvisInput {
    fn from(body: AvisRequest) -> Self {
        Self {
            content: body.content,
            star_nb: body.star_nb,
            user_id: body.user.id,
            restaurant_id: body.restaurant.id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvisAuthorResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvisResponse {
    pub id: i32,
    pub content: String,
    pub star_nb: StarRating,
    #[serde(serialize_with = "resto_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "resto_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
    pub user: AvisAuthorResponse,
    pub restaurant: RestaurantRefResponse,
}

impl From<AvisView> for AvisResponse {
    fn from(view: AvisView) -> Self {
        Self {
            id: view.avis.id,
            content: view.avis.content,
            star_nb: view.avis.star_nb,
            created_at: view.avis.created_at,
            updated_at: view.avis.updated_at,
            user: AvisAuthorResponse {
                id: view.user.id,
                first_name: view.user.first_name,
                last_name: view.user.last_name,
            },
            restaurant: view.restaurant.into(),
        }
    }
}

// ── GET /api/avis ────────────────────────────────────────────────────────────

pub async fn list_avis(
    State(state): State<AppState>,
) -> Result<Json<Vec<AvisResponse>>, DirectoryError> {
    let usecase = ListAvisUseCase {
        avis: state.avis_repo(),
        users: state.user_repo(),
        restaurants: state.restaurant_repo(),
    };
    let views = usecase.execute().await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

// ── GET /api/avis/{id} ───────────────────────────────────────────────────────

pub async fn get_avis(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<AvisResponse>, DirectoryError> {
    let usecase = GetAvisUseCase {
        avis: state.avis_repo(),
        users: state.user_repo(),
        restaurants: state.restaurant_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/avis/create ────────────────────────────────────────────────────

pub async fn create_avis(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AvisRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), DirectoryError> {
    let usecase = CreateAvisUseCase {
        avis: state.avis_repo(),
        users: state.user_repo(),
        restaurants: state.restaurant_repo(),
    };
    let id = usecase.execute(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Avis created", id)),
    ))
}

// ── PUT /api/avis/update/{id} ────────────────────────────────────────────────

pub async fn update_avis(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<AvisRequest>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    let usecase = UpdateAvisUseCase {
        avis: state.avis_repo(),
        users: state.user_repo(),
        restaurants: state.restaurant_repo(),
    };
    usecase.execute(id, body.into()).await?;
    Ok(Json(MessageResponse::new("Avis updated")))
}

// ── DELETE /api/avis/delete/{id} ─────────────────────────────────────────────

pub async fn delete_avis(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    let usecase = DeleteAvisUseCase {
        avis: state.avis_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Avis deleted")))
}
