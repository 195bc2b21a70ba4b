//! Cross-cutting HTTP plumbing shared by the directory services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
