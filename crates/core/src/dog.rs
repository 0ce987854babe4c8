//! Dog record model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A persisted dog record.
///
/// `id` is assigned once by the store's key generator and `created_timestamp`
/// is stamped by the store at write time. Records are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub age: i64,
    #[serde(rename = "type")]
    pub dog_type: String,
    pub id: String,
    pub created_timestamp: Timestamp,
}

/// Input for creating a dog.
///
/// The service does not validate this; the request layer rejects an empty
/// `name` or `dog_type` before calling it. Any `age` is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDogRequest {
    pub name: String,
    pub age: i64,
    #[serde(rename = "type")]
    pub dog_type: String,
}

/// A dog document about to be written: the request fields plus the
/// generated id. The store fills in the creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDog {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub dog_type: String,
}

impl NewDog {
    pub fn from_request(id: String, request: &CreateDogRequest) -> Self {
        Self {
            id,
            name: request.name.clone(),
            age: request.age,
            dog_type: request.dog_type.clone(),
        }
    }

    /// The persisted form of this document, stamped with `created_timestamp`.
    pub fn into_dog(self, created_timestamp: Timestamp) -> Dog {
        Dog {
            name: self.name,
            age: self.age,
            dog_type: self.dog_type,
            id: self.id,
            created_timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn dog_serializes_with_wire_field_names() {
        let dog = Dog {
            name: "Oscar".into(),
            age: 1,
            dog_type: "Golden Doodle".into(),
            id: "abc".into(),
            created_timestamp: Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap(),
        };

        let json = serde_json::to_string(&dog).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"name":"Oscar","age":1,"type":"Golden Doodle","id":"abc","#,
                r#""created_timestamp":"2021-03-04T05:06:07Z"}"#
            )
        );
    }

    #[test]
    fn new_dog_keeps_request_fields() {
        let request = CreateDogRequest {
            name: "Rex".into(),
            age: -3,
            dog_type: "Beagle".into(),
        };
        let new_dog = NewDog::from_request("id-1".into(), &request);
        assert_eq!(new_dog.age, -3);

        let stamped = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dog = new_dog.into_dog(stamped);
        assert_eq!(dog.id, "id-1");
        assert_eq!(dog.name, "Rex");
        assert_eq!(dog.dog_type, "Beagle");
        assert_eq!(dog.created_timestamp, stamped);
    }
}
