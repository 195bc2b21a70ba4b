use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAvisRepository, DbFlagshipDishRepository, DbRestaurantRepository, DbTagRepository,
    DbTypeUserRepository, DbUserRepository,
};
use crate::infra::password::Argon2PasswordHasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub hasher: Argon2PasswordHasher,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            hasher: Argon2PasswordHasher,
        }
    }

    pub fn restaurant_repo(&self) -> DbRestaurantRepository {
        DbRestaurantRepository {
            db: self.db.clone(),
        }
    }

    pub fn tag_repo(&self) -> DbTagRepository {
        DbTagRepository {
            db: self.db.clone(),
        }
    }

    pub fn flagship_dish_repo(&self) -> DbFlagshipDishRepository {
        DbFlagshipDishRepository {
            db: self.db.clone(),
        }
    }

    pub fn avis_repo(&self) -> DbAvisRepository {
        DbAvisRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn type_user_repo(&self) -> DbTypeUserRepository {
        DbTypeUserRepository {
            db: self.db.clone(),
        }
    }
}
