//! Birthday entity model.

use birthday_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub use birthday_core::birthday::{BirthdayFields, NewBirthday};

/// A row from the `birthday` table.
///
/// Serializes with the public wire names (`fio`, `wish`) and the
/// `DD.MM.YYYY` date format.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Birthday {
    pub friend_id: DbId,
    #[serde(rename = "fio")]
    pub full_name: String,
    #[serde(with = "birthday_core::wire_date::serde_format")]
    pub date: NaiveDate,
    #[serde(rename = "wish")]
    pub gift_note: String,
}
