//! SeaORM entities for the restaurant directory tables.

pub mod avis;
pub mod flagship_dishes;
pub mod restaurants;
pub mod tag_restos;
pub mod tags;
pub mod type_users;
pub mod users;
