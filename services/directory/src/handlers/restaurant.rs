use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use resto_domain::rating::StarRating;

use crate::domain::types::{FlagshipDish, Restaurant, RestaurantFields};
use crate::error::DirectoryError;
use crate::extract::{IdPath, JsonBody};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::restaurant::{
    AvisSummary, CreateRestaurantInput, CreateRestaurantUseCase, DeleteRestaurantUseCase,
    FilterRestaurantsByTagsUseCase, GetRestaurantUseCase, ListRestaurantsUseCase,
    UpdateRestaurantUseCase,
};

// ── Request / response bodies ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRequest {
    /// Only consulted on create, to reject an id that is already taken.
    pub id: Option<i32>,
    pub name: String,
    pub city: String,
    pub postal_code: String,
    #[serde(alias = "adress")]
    pub address: String,
    pub phone: String,
    #[serde(alias = "lat")]
    pub latitude: f64,
    pub longitude: f64,
}

impl RestaurantRequest {
    fn into_parts(self) -> (Option<i32>, RestaurantFields) {
        (
            self.id,
            RestaurantFields {
                name: self.name,
                city: self.city,
                postal_code: self.postal_code,
                address: self.address,
                phone: self.phone,
                latitude: self.latitude,
                longitude: self.longitude,
            },
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantBody {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub postal_code: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Restaurant> for RestaurantBody {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            city: r.city,
            postal_code: r.postal_code,
            address: r.address,
            phone: r.phone,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvisSummaryResponse {
    pub id: i32,
    pub content: String,
    pub star_nb: StarRating,
    /// Author's username.
    pub user: String,
}

impl From<AvisSummary> for AvisSummaryResponse {
    fn from(a: AvisSummary) -> Self {
        Self {
            id: a.id,
            content: a.content,
            star_nb: a.star_nb,
            user: a.username,
        }
    }
}

#[derive(Serialize)]
pub struct DishSummaryResponse {
    pub id: i32,
    pub label: String,
    pub description: String,
    pub photo: String,
}

impl From<FlagshipDish> for DishSummaryResponse {
    fn from(d: FlagshipDish) -> Self {
        Self {
            id: d.id,
            label: d.label,
            description: d.description,
            photo: d.photo,
        }
    }
}

#[derive(Serialize)]
pub struct RestaurantOverviewResponse {
    #[serde(flatten)]
    pub restaurant: RestaurantBody,
    pub tags: Vec<String>,
    pub avis: Vec<AvisSummaryResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetailResponse {
    #[serde(flatten)]
    pub restaurant: RestaurantBody,
    pub flagship_dishes: Vec<DishSummaryResponse>,
    pub tags: Vec<String>,
    pub avis: Vec<AvisSummaryResponse>,
}

#[derive(Serialize)]
pub struct TaggedRestaurantResponse {
    #[serde(flatten)]
    pub restaurant: RestaurantBody,
    pub tags: Vec<String>,
}

// ── GET /api/restaurant ──────────────────────────────────────────────────────

pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantOverviewResponse>>, DirectoryError> {
    let usecase = ListRestaurantsUseCase {
        restaurants: state.restaurant_repo(),
        tags: state.tag_repo(),
        avis: state.avis_repo(),
        users: state.user_repo(),
    };
    let overviews = usecase.execute().await?;
    Ok(Json(
        overviews
            .into_iter()
            .map(|o| RestaurantOverviewResponse {
                restaurant: o.restaurant.into(),
                tags: o.tags,
                avis: o.avis.into_iter().map(Into::into).collect(),
            })
            .collect(),
    ))
}

// ── GET /api/restaurant/{id} ─────────────────────────────────────────────────

pub async fn get_restaurant(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<RestaurantDetailResponse>, DirectoryError> {
    let usecase = GetRestaurantUseCase {
        restaurants: state.restaurant_repo(),
        tags: state.tag_repo(),
        avis: state.avis_repo(),
        users: state.user_repo(),
        dishes: state.flagship_dish_repo(),
    };
    let detail = usecase.execute(id).await?;
    Ok(Json(RestaurantDetailResponse {
        restaurant: detail.restaurant.into(),
        flagship_dishes: detail.flagship_dishes.into_iter().map(Into::into).collect(),
        tags: detail.tags,
        avis: detail.avis.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /api/restaurant/create ──────────────────────────────────────────────

pub async fn create_restaurant(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RestaurantRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), DirectoryError> {
    let (id, fields) = body.into_parts();
    let usecase = CreateRestaurantUseCase {
        restaurants: state.restaurant_repo(),
    };
    let id = usecase.execute(CreateRestaurantInput { id, fields }).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Restaurant created", id)),
    ))
}

// ── PUT /api/restaurant/{id}/update ──────────────────────────────────────────

pub async fn update_restaurant(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<RestaurantRequest>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    let (_, fields) = body.into_parts();
    let usecase = UpdateRestaurantUseCase {
        restaurants: state.restaurant_repo(),
    };
    usecase.execute(id, fields).await?;
    Ok(Json(MessageResponse::new("Restaurant updated")))
}

// ── DELETE /api/restaurant/{id}/delete ───────────────────────────────────────

pub async fn delete_restaurant(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<MessageResponse>, DirectoryError> {
    let usecase = DeleteRestaurantUseCase {
        restaurants: state.restaurant_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Restaurant deleted")))
}

// ── POST /api/restaurant/tags ────────────────────────────────────────────────

pub async fn filter_restaurants_by_tags(
    State(state): State<AppState>,
    JsonBody(tag_ids): JsonBody<Vec<i32>>,
) -> Result<Json<Vec<TaggedRestaurantResponse>>, DirectoryError> {
    let usecase = FilterRestaurantsByTagsUseCase {
        restaurants: state.restaurant_repo(),
        tags: state.tag_repo(),
    };
    let matches = usecase.execute(&tag_ids).await?;
    Ok(Json(
        matches
            .into_iter()
            .map(|m| TaggedRestaurantResponse {
                restaurant: m.restaurant.into(),
                tags: m.tags,
            })
            .collect(),
    ))
}
