//! User administration endpoint handlers.

mod create;
mod delete;
mod list;
mod update;

pub use create::register_user_handler;
pub use delete::delete_user_handler;
pub use list::list_users_handler;
pub use update::update_user_handler;
