//! User administration API for labstore.
//!
//! Admin-only REST endpoints for creating, listing, updating and deleting
//! user accounts. Passwords are hashed with Argon2id on every write and never
//! leave the database layer.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiUsersError;
pub use router::{users_router, UsersState};
