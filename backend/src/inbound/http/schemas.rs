//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::UserRecord`].
///
/// One input record. Missing keys take their zero value and are then rejected
/// by validation.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserRecordSchema {
    /// Positive user identifier.
    #[schema(rename = "User_Id", example = 1, minimum = 1)]
    user_id: i64,
    /// Non-empty display name.
    #[schema(rename = "Name", example = "Joe Smith", min_length = 1)]
    name: String,
    /// Calendar date written as `YYYY-MM-DD`.
    #[schema(rename = "Date_Of_Birth", example = "2022-01-19", format = Date)]
    date_of_birth: String,
    /// Seconds since the Unix epoch; must be positive.
    #[schema(rename = "Created_On", example = 1_642_608_434, minimum = 1)]
    created_on: i64,
}

/// OpenAPI schema for [`crate::domain::UserInfo`].
///
/// One enriched output record.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserInfo)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserInfoSchema {
    /// Copied from the input record.
    #[schema(rename = "User_Id", example = 1)]
    user_id: i64,
    /// Copied from the input record.
    #[schema(rename = "Name", example = "Joe Smith")]
    name: String,
    /// Day of the month of `Date_Of_Birth`, 1 to 31.
    #[schema(rename = "Birth_Day_Of_Week", example = 19, minimum = 1, maximum = 31)]
    birth_day_of_week: u32,
    /// `Created_On` rendered in the configured zone as RFC 3339.
    #[schema(rename = "Rfc_Created_On", example = "2022-01-19T11:07:14-05:00")]
    rfc_created_on: String,
}
