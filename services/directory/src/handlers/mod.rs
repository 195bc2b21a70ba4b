pub mod api;
pub mod avis;
pub mod flagship;
pub mod restaurant;
pub mod tag;
pub mod user;

use serde::{Deserialize, Serialize};

/// Body returned by every write endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }

    pub fn created(message: &'static str, id: i32) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }
}

/// `{"id": N}` reference used in nested request and response bodies.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdRef {
    pub id: i32,
}

/// `{"id": N, "name": "..."}` restaurant reference in dish and review responses.
#[derive(Debug, Serialize)]
pub struct RestaurantRefResponse {
    pub id: i32,
    pub name: String,
}

impl From<crate::usecase::RestaurantRef> for RestaurantRefResponse {
    fn from(r: crate::usecase::RestaurantRef) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}
