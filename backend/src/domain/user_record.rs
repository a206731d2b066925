//! User record wire types.
//!
//! Field names follow the established wire format (`User_Id`, `Name`, ...).
//! Keys match case-insensitively and also accept the camelCase spellings.
//! Missing fields, explicit `null`s and a `null` record all decode to zero
//! values, so the validators report them with the same "not set or set to
//! invalid value" message as an explicitly invalid value.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::domain::RecordField;

/// One input user entry to be validated and enriched.
///
/// # Examples
/// ```
/// use upload_transform::domain::UserRecord;
///
/// let record: UserRecord = serde_json::from_str(
///     r#"{"User_Id":1,"Name":"Joe Smith","Date_Of_Birth":"2022-01-19","Created_On":1642608434}"#,
/// )
/// .expect("valid record");
/// assert_eq!(record.user_id, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    /// Positive user identifier.
    pub user_id: i64,
    /// Display name; must be non-empty.
    pub name: String,
    /// Calendar date in strict `YYYY-MM-DD` form.
    pub date_of_birth: String,
    /// Creation instant in seconds since the Unix epoch.
    pub created_on: i64,
}

/// Map a wire key onto the record field it populates.
fn field_for_key(key: &str) -> Option<RecordField> {
    let matches = |names: [&str; 2]| names.iter().any(|name| key.eq_ignore_ascii_case(name));
    if matches(["User_Id", "userId"]) {
        Some(RecordField::UserId)
    } else if matches(["Name", "name"]) {
        Some(RecordField::Name)
    } else if matches(["Date_Of_Birth", "dateOfBirth"]) {
        Some(RecordField::DateOfBirth)
    } else if matches(["Created_On", "createdOn"]) {
        Some(RecordField::CreatedOn)
    } else {
        None
    }
}

struct UserRecordVisitor;

impl<'de> Visitor<'de> for UserRecordVisitor {
    type Value = UserRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a user record object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<UserRecord, E> {
        Ok(UserRecord::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<UserRecord, A::Error> {
        let mut record = UserRecord::default();
        while let Some(key) = map.next_key::<String>()? {
            // Later duplicates overwrite earlier ones.
            match field_for_key(&key) {
                Some(RecordField::UserId) => {
                    record.user_id = map.next_value::<Option<i64>>()?.unwrap_or_default();
                }
                Some(RecordField::Name) => {
                    record.name = map.next_value::<Option<String>>()?.unwrap_or_default();
                }
                Some(RecordField::DateOfBirth) => {
                    record.date_of_birth = map.next_value::<Option<String>>()?.unwrap_or_default();
                }
                Some(RecordField::CreatedOn) => {
                    record.created_on = map.next_value::<Option<i64>>()?.unwrap_or_default();
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for UserRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UserRecordVisitor)
    }
}

/// Enriched output for one valid [`UserRecord`].
///
/// `birth_day_of_week` holds the day of the month of the birth date. The name
/// is kept for wire compatibility with existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Copied from the input record.
    #[serde(rename = "User_Id")]
    pub user_id: i64,
    /// Copied from the input record.
    #[serde(rename = "Name")]
    pub name: String,
    /// Day of month (1-31) of the birth date.
    #[serde(rename = "Birth_Day_Of_Week")]
    pub birth_day_of_week: u32,
    /// Creation instant localised to the configured zone, RFC 3339 with offset.
    #[serde(rename = "Rfc_Created_On")]
    pub rfc_created_on: String,
}
