use std::collections::HashSet;

use chrono::{DateTime, Utc};

use resto_domain::rating::StarRating;

/// A restaurant listed in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub postal_code: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Every writable restaurant column. Create and update both take the full set.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantFields {
    pub name: String,
    pub city: String,
    pub postal_code: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Restaurant {
    pub fn from_fields(id: i32, fields: RestaurantFields) -> Self {
        Self {
            id,
            name: fields.name,
            city: fields.city,
            postal_code: fields.postal_code,
            address: fields.address,
            phone: fields.phone,
            latitude: fields.latitude,
            longitude: fields.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i32,
    pub label: String,
}

/// One `tag_restos` row resolved to its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantTag {
    pub restaurant_id: i32,
    pub tag: Tag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagshipDish {
    pub id: i32,
    pub label: String,
    pub description: String,
    pub photo: String,
    pub restaurant_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagshipDishFields {
    pub label: String,
    pub description: String,
    pub photo: String,
    pub restaurant_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUser {
    pub id: i32,
    pub label: String,
}

/// A user account. `password_hash` is a PHC string produced by the password hasher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub type_user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub type_user_id: i32,
}

/// A review ("avis") of a restaurant by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avis {
    pub id: i32,
    pub content: String,
    pub star_nb: StarRating,
    pub user_id: i32,
    pub restaurant_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvisFields {
    pub content: String,
    pub star_nb: StarRating,
    pub user_id: i32,
    pub restaurant_id: i32,
}

/// True when at least one of `tags` is in `wanted`.
///
/// Matching is a logical OR over the requested ids; an empty `wanted` set never matches.
pub fn matches_any_tag<'a>(
    wanted: &HashSet<i32>,
    tags: impl IntoIterator<Item = &'a Tag>,
) -> bool {
    tags.into_iter().any(|tag| wanted.contains(&tag.id))
}
