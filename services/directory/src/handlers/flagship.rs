use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::FlagshipDishFields;
use crate::error::DirectoryError;
use crate::extract::{IdPath, JsonBody};
use crate::handlers::{MessageResponse, RestaurantRefResponse};
use crate::state::AppState;
use crate::usecase::flagship::{
    CreateFlagshipDishUseCase, DeleteFlagshipDishUseCase, FlagshipDishView,
    GetFlagshipDishUseCase, ListFlagshipDishesUseCase, UpdateFlagshipDishUseCase,
};

#[derive(Deserialize)]
pub struct FlagshipDishRequest {
    pub label: String,
    pub description: String,
    pub photo: String,
    /// Id of the owning restaurant.
    pub restaurant: i32,
}

impl From<FlagshipDishRequest> for FlagshipDishFields {
    fn from(body: FlagshipDishRequest) -> Self {
        Self {
            label: body.label,
            description: body.description,
            photo: body.photo,
            restaurant_id: body.restaurant,
        }
    }
}

#[derive(Serialize)]
pub struct FlagshipDishResponse {
    pub id: i32,
    pub label: String,
    pub description: String,
    pub photo: String,
    pub restaurant: RestaurantRefResponse,
}

impl From<FlagshipDishView> for FlagshipDishResponse {
    fn from(view: FlagshipDishView) -> Self {
        Self {
            id: view.dish.id,
            label: view.dish.label,
            description: view.dish.description,
            photo: view.dish.photo,
            restaurant: view.restaurant.into(),
        }
    }
}

// ── GET /api/flagship ────────────────────────────────────────────────────────

pub async fn list_flagship_dishes(
    State(state): State<AppState>,
) -> Result<Json<Vec<FlagshipDishResponse>>, DirectoryError> {
    let usecase = ListFlagshipDishesUseCase {
        dishes: state.flagship_dish_repo(),
        restaurants: state.restaurant_repo(),
    };
    let views = usecase.execute().await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

// ── GET /api/flagship/{id} ───────────────────────────────────────────────────

pub async fn get_flagship_dish(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<FlagshipDishResponse>, DirectoryError> {
    let usecase = GetFlagshipDishUseCase {
        dishes: state.flagship_dish_repo(),
        restaurants: state.restaurant_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/flagship/create ────────────────────────────────────────────────

pub async fn create_flagship_dish(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FlagshipDishRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), DirectoryError> {
    let usecase = CreateFlagshipDishUseCase {
        dishes: state.flagship_dish_repo(),
        restaurants: state.restaurant_repo(),
    };
    let id = usecase.execute(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Flagship created", id)),
    ))
}

// ── PUT /api/flagship/update/{id} ────────────────────────────────────────────

pub async fn update_flagship_dish(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<FlagshipDishRequest>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    let usecase = UpdateFlagshipDishUseCase {
        dishes: state.flagship_dish_repo(),
        restaurants: state.restaurant_repo(),
    };
    usecase.execute(id, body.into()).await?;
    Ok(Json(MessageResponse::new("Flagship updated")))
}

// ── DELETE /api/flagship/delete/{id} ─────────────────────────────────────────

pub async fn delete_flagship_dish(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    let usecase = DeleteFlagshipDishUseCase {
        dishes: state.flagship_dish_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Flagship deleted")))
}
