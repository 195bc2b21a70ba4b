//! Domain types shared by the directory service and its migrations.
//!
//! Pure types with no framework dependencies.

pub mod rating;
pub mod user_type;
