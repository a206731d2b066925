//! Ordered, pure validators for a single [`crate::domain::UserRecord`].
//!
//! Each validator checks one field and returns the parsed value or an
//! [`Error`] tagged with the offending [`RecordField`]. The enrichment
//! pipeline runs them in declaration order and stops at the first failure.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{Error, RecordField};

/// Client message for a missing or non-positive `User_Id`.
pub const USER_ID_MESSAGE: &str = "Expected JSON key user_id not set or set to invalid value; \
                                   user_id must be set to a value greater than 0";

/// Client message for a missing or empty `Name`.
pub const NAME_MESSAGE: &str = "Expected JSON key name not set or set to invalid value; \
                                name must be set to a valid string";

/// Client message for a missing or non-positive `Created_On`.
pub const CREATED_ON_MESSAGE: &str = "Expected JSON key created_on not set or set to invalid \
                                      value; created_on must be set to a valid greater than 0";

/// Layout accepted for `Date_Of_Birth`.
pub const DATE_LAYOUT: &str = "YYYY-MM-DD";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `User_Id` must be strictly positive.
///
/// # Errors
/// [`RecordField::UserId`] when `user_id <= 0`.
pub fn validate_user_id(user_id: i64) -> Result<i64, Error> {
    if user_id <= 0 {
        return Err(Error::invalid_field(RecordField::UserId, USER_ID_MESSAGE));
    }
    Ok(user_id)
}

/// `Name` must be non-empty.
///
/// # Errors
/// [`RecordField::Name`] when `name` is empty.
pub fn validate_name(name: &str) -> Result<&str, Error> {
    if name.is_empty() {
        return Err(Error::invalid_field(RecordField::Name, NAME_MESSAGE));
    }
    Ok(name)
}

/// `Date_Of_Birth` must be a real calendar date written exactly as
/// `YYYY-MM-DD`: four-digit year, two-digit month and day, no time part.
///
/// # Errors
/// [`RecordField::DateOfBirth`] carrying the parser diagnostic and the
/// attempted value.
///
/// # Examples
/// ```
/// use chrono::Datelike;
/// use upload_transform::domain::record_validation::parse_date_of_birth;
///
/// let date = parse_date_of_birth("2022-01-19").expect("valid date");
/// assert_eq!(date.day(), 19);
/// assert!(parse_date_of_birth("2022-1-19").is_err());
/// ```
pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, Error> {
    if !has_date_shape(raw) {
        return Err(date_error(raw, "value does not match the layout"));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|err| date_error(raw, &err.to_string()))
}

/// `Created_On` must be an instant strictly after the Unix epoch.
///
/// # Errors
/// [`RecordField::CreatedOn`] when `seconds <= 0` or the instant is out of
/// the representable range.
pub fn parse_created_on(seconds: i64) -> Result<DateTime<Utc>, Error> {
    if seconds <= 0 {
        return Err(Error::invalid_field(
            RecordField::CreatedOn,
            CREATED_ON_MESSAGE,
        ));
    }
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| Error::invalid_field(RecordField::CreatedOn, CREATED_ON_MESSAGE))
}

fn has_date_shape(raw: &str) -> bool {
    raw.len() == DATE_LAYOUT.len()
        && raw.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

fn date_error(raw: &str, diagnostic: &str) -> Error {
    Error::invalid_field(
        RecordField::DateOfBirth,
        format!("parsing date {raw:?} as \"{DATE_LAYOUT}\": {diagnostic}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn rejects_non_positive_user_ids(#[case] user_id: i64) {
        let err = validate_user_id(user_id).expect_err("must fail");
        assert_eq!(err.field(), Some(RecordField::UserId));
        assert_eq!(err.message(), USER_ID_MESSAGE);
    }

    #[test]
    fn accepts_positive_user_id() {
        assert_eq!(validate_user_id(42).expect("valid"), 42);
    }

    #[test]
    fn rejects_empty_name_but_not_whitespace() {
        let err = validate_name("").expect_err("must fail");
        assert_eq!(err.field(), Some(RecordField::Name));
        assert_eq!(err.message(), NAME_MESSAGE);
        assert!(validate_name(" ").is_ok());
    }

    #[rstest]
    #[case("2022-01-19", 2022, 1, 19)]
    #[case("2000-02-29", 2000, 2, 29)]
    #[case("0001-12-31", 1, 12, 31)]
    fn parses_strict_dates(
        #[case] raw: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let date = parse_date_of_birth(raw).expect("valid date");
        assert_eq!((date.year(), date.month(), date.day()), (year, month, day));
    }

    #[rstest]
    #[case("", "value does not match the layout")]
    #[case("2022-1-19", "value does not match the layout")]
    #[case("19-01-2022", "value does not match the layout")]
    #[case("2022-01-19T00:00:00", "value does not match the layout")]
    #[case("2022/01/19", "value does not match the layout")]
    #[case("2022-02-30", "input is out of range")]
    #[case("2022-13-01", "input is out of range")]
    fn rejects_malformed_dates(#[case] raw: &str, #[case] diagnostic: &str) {
        let err = parse_date_of_birth(raw).expect_err("must fail");
        assert_eq!(err.field(), Some(RecordField::DateOfBirth));
        assert_eq!(
            err.message(),
            format!("parsing date {raw:?} as \"YYYY-MM-DD\": {diagnostic}")
        );
    }

    #[rstest]
    #[case(0)]
    #[case(-86_400)]
    #[case(i64::MAX)]
    fn rejects_epoch_and_earlier_or_unrepresentable(#[case] seconds: i64) {
        let err = parse_created_on(seconds).expect_err("must fail");
        assert_eq!(err.field(), Some(RecordField::CreatedOn));
        assert_eq!(err.message(), CREATED_ON_MESSAGE);
    }

    #[test]
    fn accepts_first_second_after_epoch() {
        let instant = parse_created_on(1).expect("valid instant");
        assert_eq!(instant.timestamp(), 1);
    }
}
