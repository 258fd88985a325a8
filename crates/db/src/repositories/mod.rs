//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod birthday_repo;

pub use birthday_repo::BirthdayRepo;
