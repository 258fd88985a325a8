//! Domain layer for the birthday registry.
//!
//! Pure logic only: identifier types, the error taxonomy shared by the
//! storage and HTTP layers, the `DD.MM.YYYY` wire date format, and payload
//! validation. Nothing in this crate touches the database or the network.

pub mod birthday;
pub mod error;
pub mod types;
pub mod wire_date;
