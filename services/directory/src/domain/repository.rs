#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Avis, AvisFields, FlagshipDish, FlagshipDishFields, Restaurant, RestaurantFields,
    RestaurantTag, Tag, TypeUser, User, UserFields,
};
use crate::error::DirectoryError;

/// Repository for restaurants.
pub trait RestaurantRepository: Send + Sync {
    /// All restaurants, ordered by id.
    async fn list(&self) -> Result<Vec<Restaurant>, DirectoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DirectoryError>;
    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<Restaurant>, DirectoryError>;
    /// Insert a restaurant and return the id assigned by the store.
    async fn create(&self, fields: &RestaurantFields) -> Result<i32, DirectoryError>;
    async fn update(&self, id: i32, fields: &RestaurantFields) -> Result<(), DirectoryError>;
    /// Delete a restaurant. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, DirectoryError>;
}

/// Repository for tags and their restaurant links.
pub trait TagRepository: Send + Sync {
    /// All tags, ordered by id.
    async fn list(&self) -> Result<Vec<Tag>, DirectoryError>;
    /// Tag links of the given restaurants, in link insertion order.
    async fn list_for_restaurants(
        &self,
        restaurant_ids: &[i32],
    ) -> Result<Vec<RestaurantTag>, DirectoryError>;
}

/// Repository for flagship dishes.
pub trait FlagshipDishRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<FlagshipDish>, DirectoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<FlagshipDish>, DirectoryError>;
    async fn list_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<FlagshipDish>, DirectoryError>;
    async fn create(&self, fields: &FlagshipDishFields) -> Result<i32, DirectoryError>;
    async fn update(&self, id: i32, fields: &FlagshipDishFields) -> Result<(), DirectoryError>;
    /// Delete a dish. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, DirectoryError>;
}

/// Repository for reviews.
pub trait AvisRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Avis>, DirectoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Avis>, DirectoryError>;
    async fn list_for_restaurants(
        &self,
        restaurant_ids: &[i32],
    ) -> Result<Vec<Avis>, DirectoryError>;
    async fn create(&self, fields: &AvisFields) -> Result<i32, DirectoryError>;
    /// Overwrite every field and bump `updated_at`.
    async fn update(&self, id: i32, fields: &AvisFields) -> Result<(), DirectoryError>;
    /// Delete a review. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, DirectoryError>;
}

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DirectoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DirectoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError>;
    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DirectoryError>;
    async fn create(&self, fields: &UserFields) -> Result<i32, DirectoryError>;
    async fn update(&self, id: i32, fields: &UserFields) -> Result<(), DirectoryError>;
    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, DirectoryError>;
}

/// Read-only access to the `type_users` reference rows.
pub trait TypeUserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<TypeUser>, DirectoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<TypeUser>, DirectoryError>;
}

/// Port for one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` into a self-describing string safe to store.
    async fn hash(&self, password: &str) -> Result<String, DirectoryError>;
    /// Check `password` against a string previously returned by [`PasswordHasher::hash`].
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DirectoryError>;
}
