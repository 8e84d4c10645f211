//! Server routes.

mod health;

pub use health::{health_routes, HealthState};
