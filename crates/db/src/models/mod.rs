//! Row structs for the storage layer.
//!
//! Validated create/update inputs live in `birthday_core::birthday` and are
//! re-exported next to the row type they produce.

pub mod birthday;
