use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;
use crate::extract::{IdPath, JsonBody};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    LoginInput, LoginUseCase, UpdateUserInput, UpdateUserUseCase, UserView,
};

#[derive(Serialize)]
pub struct TypeUserResponse {
    pub id: i32,
    pub label: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub type_user: TypeUserResponse,
}

impl From<UserView> for UserResponse {
    fn from(view: UserView) -> Self {
        Self {
            id: view.user.id,
            first_name: view.user.first_name,
            last_name: view.user.last_name,
            email: view.user.email,
            username: view.user.username,
            type_user: TypeUserResponse {
                id: view.type_user.id,
                label: view.type_user.label,
            },
        }
    }
}

// ── GET /api/user ────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, DirectoryError> {
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
        type_users: state.type_user_repo(),
    };
    let views = usecase.execute().await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

// ── GET /api/user/{id} ───────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<UserResponse>, DirectoryError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        type_users: state.type_user_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/user/create ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(alias = "eMail")]
    pub email: String,
    #[serde(alias = "userName")]
    pub username: String,
    pub password: String,
    pub type_user_id: Option<i32>,
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), DirectoryError> {
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
        type_users: state.type_user_repo(),
        hasher: state.hasher,
    };
    let id = usecase
        .execute(CreateUserInput {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            username: body.username,
            password: body.password,
            type_user_id: body.type_user_id,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("User created", id)),
    ))
}

// ── PUT /api/user/update/{id} ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(alias = "eMail")]
    pub email: String,
    #[serde(alias = "userName")]
    pub username: String,
    pub password: Option<String>,
    pub type_user_id: Option<i32>,
}

pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
        type_users: state.type_user_repo(),
        hasher: state.hasher,
    };
    usecase
        .execute(
            id,
            UpdateUserInput {
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                username: body.username,
                password: body.password,
                type_user_id: body.type_user_id,
            },
        )
        .await?;
    Ok(Json(MessageResponse::new("User updated")))
}

// ── DELETE /api/user/delete/{id} ─────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("User deleted")))
}

// ── POST /api/user/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "eMail")]
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Json<UserResponse>, DirectoryError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        type_users: state.type_user_repo(),
        hasher: state.hasher,
    };
    let view = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(view.into()))
}
