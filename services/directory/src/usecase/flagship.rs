use std::collections::{HashMap, HashSet};

use anyhow::anyhow;

use crate::domain::repository::{FlagshipDishRepository, RestaurantRepository};
use crate::domain::types::{FlagshipDish, FlagshipDishFields};
use crate::error::DirectoryError;
use crate::usecase::RestaurantRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagshipDishView {
    pub dish: FlagshipDish,
    pub restaurant: RestaurantRef,
}

// ── ListFlagshipDishes ───────────────────────────────────────────────────────

pub struct ListFlagshipDishesUseCase<D, R> {
    pub dishes: D,
    pub restaurants: R,
}

impl<D, R> ListFlagshipDishesUseCase<D, R>
where
    D: FlagshipDishRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self) -> Result<Vec<FlagshipDishView>, DirectoryError> {
        let dishes = self.dishes.list().await?;
        let restaurant_ids: Vec<i32> = dishes
            .iter()
            .map(|d| d.restaurant_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let restaurants: HashMap<i32, RestaurantRef> = self
            .restaurants
            .list_by_ids(&restaurant_ids)
            .await?
            .iter()
            .map(|r| (r.id, RestaurantRef::from(r)))
            .collect();

        Ok(dishes
            .into_iter()
            .filter_map(|dish| {
                let restaurant = restaurants.get(&dish.restaurant_id)?.clone();
                Some(FlagshipDishView { dish, restaurant })
            })
            .collect())
    }
}

// ── GetFlagshipDish ──────────────────────────────────────────────────────────

pub struct GetFlagshipDishUseCase<D, R> {
    pub dishes: D,
    pub restaurants: R,
}

impl<D, R> GetFlagshipDishUseCase<D, R>
where
    D: FlagshipDishRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self, id: i32) -> Result<FlagshipDishView, DirectoryError> {
        let dish = self
            .dishes
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::FlagshipDishNotFound)?;
        let restaurant = self
            .restaurants
            .find_by_id(dish.restaurant_id)
            .await?
            .ok_or_else(|| {
                anyhow!(
                    "flagship dish {id} references missing restaurant {}",
                    dish.restaurant_id
                )
            })?;
        Ok(FlagshipDishView {
            restaurant: RestaurantRef::from(&restaurant),
            dish,
        })
    }
}

// ── CreateFlagshipDish ───────────────────────────────────────────────────────

pub struct CreateFlagshipDishUseCase<D, R> {
    pub dishes: D,
    pub restaurants: R,
}

impl<D, R> CreateFlagshipDishUseCase<D, R>
where
    D: FlagshipDishRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self, fields: FlagshipDishFields) -> Result<i32, DirectoryError> {
        if self
            .restaurants
            .find_by_id(fields.restaurant_id)
            .await?
            .is_none()
        {
            return Err(DirectoryError::RestaurantNotFound);
        }
        let id = self.dishes.create(&fields).await?;
        tracing::info!(
            flagship_dish_id = id,
            restaurant_id = fields.restaurant_id,
            "flagship dish created"
        );
        Ok(id)
    }
}

// ── UpdateFlagshipDish ───────────────────────────────────────────────────────

pub struct UpdateFlagshipDishUseCase<D, R> {
    pub dishes: D,
    pub restaurants: R,
}

impl<D, R> UpdateFlagshipDishUseCase<D, R>
where
    D: FlagshipDishRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self, id: i32, fields: FlagshipDishFields) -> Result<(), DirectoryError> {
        if self.dishes.find_by_id(id).await?.is_none() {
            return Err(DirectoryError::FlagshipDishNotFound);
        }
        if self
            .restaurants
            .find_by_id(fields.restaurant_id)
            .await?
            .is_none()
        {
            return Err(DirectoryError::RestaurantNotFound);
        }
        self.dishes.update(id, &fields).await
    }
}

// ── DeleteFlagshipDish ───────────────────────────────────────────────────────

pub struct DeleteFlagshipDishUseCase<D: FlagshipDishRepository> {
    pub dishes: D,
}

impl<D: FlagshipDishRepository> DeleteFlagshipDishUseCase<D> {
    pub async fn execute(&self, id: i32) -> Result<(), DirectoryError> {
        if !self.dishes.delete(id).await? {
            return Err(DirectoryError::FlagshipDishNotFound);
        }
        Ok(())
    }
}
