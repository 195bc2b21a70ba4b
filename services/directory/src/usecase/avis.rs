use std::collections::{HashMap, HashSet};

use anyhow::anyhow;

use resto_domain::rating::StarRating;

use crate::domain::repository::{AvisRepository, RestaurantRepository, UserRepository};
use crate::domain::types::{Avis, AvisFields, User};
use crate::error::DirectoryError;
use crate::usecase::RestaurantRef;

/// Author as shown on a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvisAuthor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for AvisAuthor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvisView {
    pub avis: Avis,
    pub user: AvisAuthor,
    pub restaurant: RestaurantRef,
}

fn unique(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<HashSet<_>>().into_iter().collect()
}

// ── ListAvis ─────────────────────────────────────────────────────────────────

pub struct ListAvisUseCase<A, U, R> {
    pub avis: A,
    pub users: U,
    pub restaurants: R,
}

impl<A, U, R> ListAvisUseCase<A, U, R>
where
    A: AvisRepository,
    U: UserRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self) -> Result<Vec<AvisView>, DirectoryError> {
        let reviews = self.avis.list().await?;
        let users: HashMap<i32, AvisAuthor> = self
            .users
            .list_by_ids(&unique(reviews.iter().map(|a| a.user_id)))
            .await?
            .iter()
            .map(|u| (u.id, AvisAuthor::from(u)))
            .collect();
        let restaurants: HashMap<i32, RestaurantRef> = self
            .restaurants
            .list_by_ids(&unique(reviews.iter().map(|a| a.restaurant_id)))
            .await?
            .iter()
            .map(|r| (r.id, RestaurantRef::from(r)))
            .collect();

        Ok(reviews
            .into_iter()
            .filter_map(|avis| {
                let user = users.get(&avis.user_id)?.clone();
                let restaurant = restaurants.get(&avis.restaurant_id)?.clone();
                Some(AvisView {
                    avis,
                    user,
                    restaurant,
                })
            })
            .collect())
    }
}

// ── GetAvis ──────────────────────────────────────────────────────────────────

pub struct GetAvisUseCase<A, U, R> {
    pub avis: A,
    pub users: U,
    pub restaurants: R,
}

impl<A, U, R> GetAvisUseCase<A, U, R>
where
    A: AvisRepository,
    U: UserRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self, id: i32) -> Result<AvisView, DirectoryError> {
        let avis = self
            .avis
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::AvisNotFound)?;
        let user = self
            .users
            .find_by_id(avis.user_id)
            .await?
            .ok_or_else(|| anyhow!("avis {id} references missing user {}", avis.user_id))?;
        let restaurant = self
            .restaurants
            .find_by_id(avis.restaurant_id)
            .await?
            .ok_or_else(|| {
                anyhow!(
                    "avis {id} references missing restaurant {}",
                    avis.restaurant_id
                )
            })?;
        Ok(AvisView {
            user: AvisAuthor::from(&user),
            restaurant: RestaurantRef::from(&restaurant),
            avis,
        })
    }
}

// ── CreateAvis / UpdateAvis ──────────────────────────────────────────────────

pub struct AvisInput {
    pub content: String,
    pub star_nb: i64,
    pub user_id: i32,
    pub restaurant_id: i32,
}

/// Validate the rating and both references, in that order.
async fn resolve_input<U, R>(
    users: &U,
    restaurants: &R,
    input: AvisInput,
) -> Result<AvisFields, DirectoryError>
where
    U: UserRepository,
    R: RestaurantRepository,
{
    let star_nb = StarRating::new(input.star_nb).map_err(|_| DirectoryError::InvalidStarNb)?;
    if users.find_by_id(input.user_id).await?.is_none() {
        return Err(DirectoryError::UserNotFound);
    }
    if restaurants.find_by_id(input.restaurant_id).await?.is_none() {
        return Err(DirectoryError::RestaurantNotFound);
    }
    Ok(AvisFields {
        content: input.content,
        star_nb,
        user_id: input.user_id,
        restaurant_id: input.restaurant_id,
    })
}

pub struct CreateAvisUseCase<A, U, R> {
    pub avis: A,
    pub users: U,
    pub restaurants: R,
}

impl<A, U, R> CreateAvisUseCase<A, U, R>
where
    A: AvisRepository,
    U: UserRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self, input: AvisInput) -> Result<i32, DirectoryError> {
        let fields = resolve_input(&self.users, &self.restaurants, input).await?;
        let id = self.avis.create(&fields).await?;
        tracing::info!(
            avis_id = id,
            restaurant_id = fields.restaurant_id,
            "avis created"
        );
        Ok(id)
    }
}

pub struct UpdateAvisUseCase<A, U, R> {
    pub avis: A,
    pub users: U,
    pub restaurants: R,
}

impl<A, U, R> UpdateAvisUseCase<A, U, R>
where
    A: AvisRepository,
    U: UserRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self, id: i32, input: AvisInput) -> Result<(), DirectoryError> {
        if self.avis.find_by_id(id).await?.is_none() {
            return Err(DirectoryError::AvisNotFound);
        }
        let fields = resolve_input(&self.users, &self.restaurants, input).await?;
        self.avis.update(id, &fields).await
    }
}

// ── DeleteAvis ───────────────────────────────────────────────────────────────

pub struct DeleteAvisUseCase<A: AvisRepository> {
    pub avis: A,
}

impl<A: AvisRepository> DeleteAvisUseCase<A> {
    pub async fn execute(&self, id: i32) -> Result<(), DirectoryError> {
        if !self.avis.delete(id).await? {
            return Err(DirectoryError::AvisNotFound);
        }
        Ok(())
    }
}
