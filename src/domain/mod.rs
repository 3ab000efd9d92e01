//! Core business entities and logic.

pub mod age;
pub mod user;

pub use age::{age_on, ensure_not_future};
pub use user::{CreateUserRequest, UpdateUserRequest, User, UserResponse};
