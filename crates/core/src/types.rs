/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Name of the collection every dog document lives in.
pub const DOG_COLLECTION: &str = "dogs";

/// Document path for a dog, as `dogs/{id}`. Only used for logging and
/// error context.
pub fn dog_path(id: &str) -> String {
    format!("{DOG_COLLECTION}/{id}")
}
