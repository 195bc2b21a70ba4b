use std::collections::HashMap;

use anyhow::anyhow;

use resto_domain::user_type::UserType;

use crate::domain::repository::{PasswordHasher, TypeUserRepository, UserRepository};
use crate::domain::types::{TypeUser, User, UserFields};
use crate::error::DirectoryError;

/// A user together with its resolved account type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub user: User,
    pub type_user: TypeUser,
}

async fn resolve_type_user<T: TypeUserRepository>(
    type_users: &T,
    user: User,
) -> Result<UserView, DirectoryError> {
    let type_user = type_users
        .find_by_id(user.type_user_id)
        .await?
        .ok_or_else(|| {
            anyhow!(
                "user {} references missing type user {}",
                user.id,
                user.type_user_id
            )
        })?;
    Ok(UserView { user, type_user })
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U, T> {
    pub users: U,
    pub type_users: T,
}

impl<U, T> ListUsersUseCase<U, T>
where
    U: UserRepository,
    T: TypeUserRepository,
{
    pub async fn execute(&self) -> Result<Vec<UserView>, DirectoryError> {
        let type_users: HashMap<i32, TypeUser> = self
            .type_users
            .list()
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        let users = self.users.list().await?;
        Ok(users
            .into_iter()
            .filter_map(|user| {
                let type_user = type_users.get(&user.type_user_id)?.clone();
                Some(UserView { user, type_user })
            })
            .collect())
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U, T> {
    pub users: U,
    pub type_users: T,
}

impl<U, T> GetUserUseCase<U, T>
where
    U: UserRepository,
    T: TypeUserRepository,
{
    pub async fn execute(&self, id: i32) -> Result<UserView, DirectoryError> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::UserNotFound)?;
        resolve_type_user(&self.type_users, user).await
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    /// Defaults to the plain "user" type.
    pub type_user_id: Option<i32>,
}

pub struct CreateUserUseCase<U, T, H> {
    pub users: U,
    pub type_users: T,
    pub hasher: H,
}

impl<U, T, H> CreateUserUseCase<U, T, H>
where
    U: UserRepository,
    T: TypeUserRepository,
    H: PasswordHasher,
{
    pub async fn execute(&self, input: CreateUserInput) -> Result<i32, DirectoryError> {
        let type_user_id = input
            .type_user_id
            .unwrap_or_else(|| UserType::default().id());
        if self.type_users.find_by_id(type_user_id).await?.is_none() {
            return Err(DirectoryError::TypeUserNotFound);
        }
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(DirectoryError::UserAlreadyExists);
        }
        let password_hash = self.hasher.hash(&input.password).await?;
        let id = self
            .users
            .create(&UserFields {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                username: input.username,
                password_hash,
                type_user_id,
            })
            .await?;
        tracing::info!(user_id = id, type_user_id, "user created");
        Ok(id)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    /// Re-hashed when present; the stored hash is kept otherwise.
    pub password: Option<String>,
    /// Kept unchanged when absent.
    pub type_user_id: Option<i32>,
}

pub struct UpdateUserUseCase<U, T, H> {
    pub users: U,
    pub type_users: T,
    pub hasher: H,
}

impl<U, T, H> UpdateUserUseCase<U, T, H>
where
    U: UserRepository,
    T: TypeUserRepository,
    H: PasswordHasher,
{
    pub async fn execute(&self, id: i32, input: UpdateUserInput) -> Result<(), DirectoryError> {
        let current = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::UserNotFound)?;

        let type_user_id = input.type_user_id.unwrap_or(current.type_user_id);
        if self.type_users.find_by_id(type_user_id).await?.is_none() {
            return Err(DirectoryError::TypeUserNotFound);
        }
        if input.email != current.email {
            if let Some(other) = self.users.find_by_email(&input.email).await? {
                if other.id != id {
                    return Err(DirectoryError::UserAlreadyExists);
                }
            }
        }
        let password_hash = match input.password {
            Some(ref password) => self.hasher.hash(password).await?,
            None => current.password_hash,
        };

        self.users
            .update(
                id,
                &UserFields {
                    first_name: input.first_name,
                    last_name: input.last_name,
                    email: input.email,
                    username: input.username,
                    password_hash,
                    type_user_id,
                },
            )
            .await
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeleteUserUseCase<U> {
    pub async fn execute(&self, id: i32) -> Result<(), DirectoryError> {
        if !self.users.delete(id).await? {
            return Err(DirectoryError::UserNotFound);
        }
        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U, T, H> {
    pub users: U,
    pub type_users: T,
    pub hasher: H,
}

impl<U, T, H> LoginUseCase<U, T, H>
where
    U: UserRepository,
    T: TypeUserRepository,
    H: PasswordHasher,
{
    /// Check credentials. No session or token is issued; callers get the user back.
    pub async fn execute(&self, input: LoginInput) -> Result<UserView, DirectoryError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(DirectoryError::UserNotFound)?;
        if !self
            .hasher
            .verify(&input.password, &user.password_hash)
            .await?
        {
            tracing::debug!(user_id = user.id, "login rejected");
            return Err(DirectoryError::InvalidCredentials);
        }
        resolve_type_user(&self.type_users, user).await
    }
}
