//! Request handlers.
//!
//! Handlers delegate to the repositories in `birthday_db` and map errors
//! via [`crate::error::AppError`].

pub mod birthday;
