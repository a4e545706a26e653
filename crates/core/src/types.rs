/// Invoice and customer primary keys are opaque strings (UUIDv4 text).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
