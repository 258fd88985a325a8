/// Birthday records are keyed by a caller-assigned SQLite `INTEGER` id.
pub type DbId = i64;
