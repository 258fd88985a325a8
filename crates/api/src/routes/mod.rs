pub mod birthday;
pub mod health;
