use axum::{
    Router,
    routing::{delete, get, post, put},
};

use resto_core::health::healthz;
use resto_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    api::{api_status, readyz},
    avis::{create_avis, delete_avis, get_avis, list_avis, update_avis},
    flagship::{
        create_flagship_dish, delete_flagship_dish, get_flagship_dish, list_flagship_dishes,
        update_flagship_dish,
    },
    restaurant::{
        create_restaurant, delete_restaurant, filter_restaurants_by_tags, get_restaurant,
        list_restaurants, update_restaurant,
    },
    tag::list_tags,
    user::{create_user, delete_user, get_user, list_users, login, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/api", get(api_status))
        // Restaurants
        .route("/api/restaurant", get(list_restaurants))
        .route("/api/restaurant/list", get(list_restaurants))
        .route("/api/restaurant/create", post(create_restaurant))
        .route("/api/restaurant/tags", post(filter_restaurants_by_tags))
        .route("/api/restaurant/{id}", get(get_restaurant))
        .route("/api/restaurant/{id}/update", put(update_restaurant))
        .route("/api/restaurant/{id}/delete", delete(delete_restaurant))
        // Avis
        .route("/api/avis", get(list_avis))
        .route("/api/avis/create", post(create_avis))
        .route("/api/avis/{id}", get(get_avis))
        .route("/api/avis/update/{id}", put(update_avis))
        .route("/api/avis/delete/{id}", delete(delete_avis))
        // Flagship dishes
        .route("/api/flagship", get(list_flagship_dishes))
        .route("/api/flagship/create", post(create_flagship_dish))
        .route("/api/flagship/{id}", get(get_flagship_dish))
        .route("/api/flagship/update/{id}", put(update_flagship_dish))
        .route("/api/flagship/delete/{id}", delete(delete_flagship_dish))
        // Users
        .route("/api/user", get(list_users))
        .route("/api/user/create", post(create_user))
        .route("/api/user/login", post(login))
        .route("/api/user/{id}", get(get_user))
        .route("/api/user/update/{id}", put(update_user))
        .route("/api/user/delete/{id}", delete(delete_user))
        // Tags
        .route("/api/tag", get(list_tags))
        .with_state(state)
        // Last layer added runs first: the id is set before the span reads it.
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
