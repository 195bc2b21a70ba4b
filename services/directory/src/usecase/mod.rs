pub mod avis;
pub mod flagship;
pub mod restaurant;
pub mod tag;
pub mod user;

use crate::domain::types::Restaurant;

/// Minimal restaurant reference embedded in dish and review projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantRef {
    pub id: i32,
    pub name: String,
}

impl From<&Restaurant> for RestaurantRef {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
        }
    }
}
