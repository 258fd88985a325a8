//! Birthday payload validation.
//!
//! Create and update bodies arrive as a [`BirthdayPayload`] whose fields are
//! all optional, so a missing field is reported by validation instead of by
//! the JSON extractor. Validation runs in a fixed order:
//!
//! 1. every required field is present ([`CoreError::Validation`])
//! 2. the id, when required, is positive ([`CoreError::Validation`])
//! 3. text fields fit their column limits ([`CoreError::Validation`])
//! 4. the date parses as `DD.MM.YYYY` ([`CoreError::InvalidDate`])
//!
//! Only a fully validated [`NewBirthday`] or [`BirthdayFields`] ever reaches
//! the storage layer.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;
use crate::wire_date::parse_wire_date;

/// Entity name used in not-found and conflict messages.
pub const ENTITY_BIRTHDAY: &str = "Birthday";

/// Maximum length of a full name in characters.
pub const MAX_FULL_NAME_LENGTH: usize = 300;

/// Maximum length of a gift note in characters.
pub const MAX_GIFT_NOTE_LENGTH: usize = 255;

// ---------------------------------------------------------------------------
// Wire payload
// ---------------------------------------------------------------------------

/// Raw JSON body of `POST /birthday` and `PUT /birthday/{id}`.
///
/// Field names follow the public wire format: `fio` is the full name and
/// `wish` the gift note.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BirthdayPayload {
    pub friend_id: Option<DbId>,
    pub fio: Option<String>,
    pub date: Option<String>,
    pub wish: Option<String>,
}

// ---------------------------------------------------------------------------
// Validated inputs
// ---------------------------------------------------------------------------

/// A fully validated record ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBirthday {
    pub friend_id: DbId,
    pub full_name: String,
    pub date: NaiveDate,
    pub gift_note: String,
}

/// The three mutable fields of a record. Updates always replace all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayFields {
    pub full_name: String,
    pub date: NaiveDate,
    pub gift_note: String,
}

impl BirthdayPayload {
    /// Validate a create body. `friend_id` is required and must be positive.
    pub fn into_new_birthday(self) -> Result<NewBirthday, CoreError> {
        let friend_id = require(self.friend_id, "friend_id")?;
        let full_name = require(self.fio, "fio")?;
        let date = require(self.date, "date")?;
        let gift_note = require(self.wish, "wish")?;

        validate_friend_id(friend_id)?;
        validate_text_lengths(&full_name, &gift_note)?;
        let date = parse_wire_date(&date)?;

        Ok(NewBirthday {
            friend_id,
            full_name,
            date,
            gift_note,
        })
    }

    /// Validate an update body.
    ///
    /// The id comes from the request path; a `friend_id` in the body is
    /// ignored because ids never change after creation.
    pub fn into_fields(self) -> Result<BirthdayFields, CoreError> {
        let full_name = require(self.fio, "fio")?;
        let date = require(self.date, "date")?;
        let gift_note = require(self.wish, "wish")?;

        validate_text_lengths(&full_name, &gift_note)?;
        let date = parse_wire_date(&date)?;

        Ok(BirthdayFields {
            full_name,
            date,
            gift_note,
        })
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a friend id is a positive integer.
pub fn validate_friend_id(id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "friend_id must be a positive integer, got {id}"
        )));
    }
    Ok(())
}

/// Validate `fio` and `wish` against [`MAX_FULL_NAME_LENGTH`] and
/// [`MAX_GIFT_NOTE_LENGTH`].
pub fn validate_text_lengths(full_name: &str, gift_note: &str) -> Result<(), CoreError> {
    let name_len = full_name.chars().count();
    if name_len > MAX_FULL_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "fio has {name_len} characters, maximum is {MAX_FULL_NAME_LENGTH}"
        )));
    }
    let note_len = gift_note.chars().count();
    if note_len > MAX_GIFT_NOTE_LENGTH {
        return Err(CoreError::Validation(format!(
            "wish has {note_len} characters, maximum is {MAX_GIFT_NOTE_LENGTH}"
        )));
    }
    Ok(())
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Missing required field '{field}'")))
}
