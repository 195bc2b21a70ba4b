use std::collections::{HashMap, HashSet};

use resto_domain::rating::StarRating;

use crate::domain::repository::{
    AvisRepository, FlagshipDishRepository, RestaurantRepository, TagRepository, UserRepository,
};
use crate::domain::types::{FlagshipDish, Restaurant, RestaurantFields, Tag, matches_any_tag};
use crate::error::DirectoryError;

// ── Projections ──────────────────────────────────────────────────────────────

/// Review as shown under a restaurant: the author is reduced to a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvisSummary {
    pub id: i32,
    pub content: String,
    pub star_nb: StarRating,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantOverview {
    pub restaurant: Restaurant,
    pub tags: Vec<String>,
    pub avis: Vec<AvisSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    pub flagship_dishes: Vec<FlagshipDish>,
    pub tags: Vec<String>,
    pub avis: Vec<AvisSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedRestaurant {
    pub restaurant: Restaurant,
    pub tags: Vec<String>,
}

async fn tags_by_restaurant<T: TagRepository>(
    tags: &T,
    restaurant_ids: &[i32],
) -> Result<HashMap<i32, Vec<Tag>>, DirectoryError> {
    let mut grouped: HashMap<i32, Vec<Tag>> = HashMap::new();
    for link in tags.list_for_restaurants(restaurant_ids).await? {
        grouped.entry(link.restaurant_id).or_default().push(link.tag);
    }
    Ok(grouped)
}

fn labels(tags: Option<Vec<Tag>>) -> Vec<String> {
    tags.unwrap_or_default()
        .into_iter()
        .map(|tag| tag.label)
        .collect()
}

async fn avis_by_restaurant<A: AvisRepository, U: UserRepository>(
    avis: &A,
    users: &U,
    restaurant_ids: &[i32],
) -> Result<HashMap<i32, Vec<AvisSummary>>, DirectoryError> {
    let reviews = avis.list_for_restaurants(restaurant_ids).await?;
    let author_ids: Vec<i32> = reviews
        .iter()
        .map(|a| a.user_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let usernames: HashMap<i32, String> = users
        .list_by_ids(&author_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u.username))
        .collect();

    let mut grouped: HashMap<i32, Vec<AvisSummary>> = HashMap::new();
    for review in reviews {
        let Some(username) = usernames.get(&review.user_id) else {
            tracing::warn!(avis_id = review.id, user_id = review.user_id, "avis author missing");
            continue;
        };
        grouped
            .entry(review.restaurant_id)
            .or_default()
            .push(AvisSummary {
                id: review.id,
                content: review.content,
                star_nb: review.star_nb,
                username: username.clone(),
            });
    }
    Ok(grouped)
}

// ── ListRestaurants ──────────────────────────────────────────────────────────

pub struct ListRestaurantsUseCase<R, T, A, U> {
    pub restaurants: R,
    pub tags: T,
    pub avis: A,
    pub users: U,
}

impl<R, T, A, U> ListRestaurantsUseCase<R, T, A, U>
where
    R: RestaurantRepository,
    T: TagRepository,
    A: AvisRepository,
    U: UserRepository,
{
    pub async fn execute(&self) -> Result<Vec<RestaurantOverview>, DirectoryError> {
        let restaurants = self.restaurants.list().await?;
        let ids: Vec<i32> = restaurants.iter().map(|r| r.id).collect();
        let mut tags = tags_by_restaurant(&self.tags, &ids).await?;
        let mut avis = avis_by_restaurant(&self.avis, &self.users, &ids).await?;

        Ok(restaurants
            .into_iter()
            .map(|restaurant| RestaurantOverview {
                tags: labels(tags.remove(&restaurant.id)),
                avis: avis.remove(&restaurant.id).unwrap_or_default(),
                restaurant,
            })
            .collect())
    }
}

// ── GetRestaurant ────────────────────────────────────────────────────────────

pub struct GetRestaurantUseCase<R, T, A, U, D> {
    pub restaurants: R,
    pub tags: T,
    pub avis: A,
    pub users: U,
    pub dishes: D,
}

impl<R, T, A, U, D> GetRestaurantUseCase<R, T, A, U, D>
where
    R: RestaurantRepository,
    T: TagRepository,
    A: AvisRepository,
    U: UserRepository,
    D: FlagshipDishRepository,
{
    pub async fn execute(&self, id: i32) -> Result<RestaurantDetail, DirectoryError> {
        let restaurant = self
            .restaurants
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::RestaurantNotFound)?;
        let flagship_dishes = self.dishes.list_by_restaurant(id).await?;
        let mut tags = tags_by_restaurant(&self.tags, &[id]).await?;
        let mut avis = avis_by_restaurant(&self.avis, &self.users, &[id]).await?;

        Ok(RestaurantDetail {
            restaurant,
            flagship_dishes,
            tags: labels(tags.remove(&id)),
            avis: avis.remove(&id).unwrap_or_default(),
        })
    }
}

// ── CreateRestaurant ─────────────────────────────────────────────────────────

pub struct CreateRestaurantInput {
    /// Caller-supplied id. Only used to reject duplicates; the store assigns the real id.
    pub id: Option<i32>,
    pub fields: RestaurantFields,
}

pub struct CreateRestaurantUseCase<R: RestaurantRepository> {
    pub restaurants: R,
}

impl<R: RestaurantRepository> CreateRestaurantUseCase<R> {
    pub async fn execute(&self, input: CreateRestaurantInput) -> Result<i32, DirectoryError> {
        if let Some(id) = input.id {
            if self.restaurants.find_by_id(id).await?.is_some() {
                return Err(DirectoryError::RestaurantAlreadyExists);
            }
        }
        let id = self.restaurants.create(&input.fields).await?;
        tracing::info!(restaurant_id = id, "restaurant created");
        Ok(id)
    }
}

// ── UpdateRestaurant ─────────────────────────────────────────────────────────

pub struct UpdateRestaurantUseCase<R: RestaurantRepository> {
    pub restaurants: R,
}

impl<R: RestaurantRepository> UpdateRestaurantUseCase<R> {
    pub async fn execute(&self, id: i32, fields: RestaurantFields) -> Result<(), DirectoryError> {
        if self.restaurants.find_by_id(id).await?.is_none() {
            return Err(DirectoryError::RestaurantNotFound);
        }
        self.restaurants.update(id, &fields).await
    }
}

// ── DeleteRestaurant ─────────────────────────────────────────────────────────

pub struct DeleteRestaurantUseCase<R: RestaurantRepository> {
    pub restaurants: R,
}

impl<R: RestaurantRepository> DeleteRestaurantUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), DirectoryError> {
        if !self.restaurants.delete(id).await? {
            return Err(DirectoryError::RestaurantNotFound);
        }
        tracing::info!(restaurant_id = id, "restaurant deleted");
        Ok(())
    }
}

// ── FilterRestaurantsByTags ──────────────────────────────────────────────────

pub struct FilterRestaurantsByTagsUseCase<R, T> {
    pub restaurants: R,
    pub tags: T,
}

impl<R, T> FilterRestaurantsByTagsUseCase<R, T>
where
    R: RestaurantRepository,
    T: TagRepository,
{
    /// Restaurants carrying at least one of `tag_ids`, in id order.
    pub async fn execute(&self, tag_ids: &[i32]) -> Result<Vec<TaggedRestaurant>, DirectoryError> {
        let wanted: HashSet<i32> = tag_ids.iter().copied().collect();
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let restaurants = self.restaurants.list().await?;
        let ids: Vec<i32> = restaurants.iter().map(|r| r.id).collect();
        let mut tags = tags_by_restaurant(&self.tags, &ids).await?;

        Ok(restaurants
            .into_iter()
            .filter_map(|restaurant| {
                let restaurant_tags = tags.remove(&restaurant.id).unwrap_or_default();
                matches_any_tag(&wanted, &restaurant_tags).then(|| TaggedRestaurant {
                    tags: labels(Some(restaurant_tags)),
                    restaurant,
                })
            })
            .collect())
    }
}
