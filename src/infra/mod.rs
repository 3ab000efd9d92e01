//! Infrastructure concerns (database access, repositories).

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};
