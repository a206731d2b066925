//! Record enrichment pipeline.
//!
//! Parses a JSON array of [`UserRecord`]s, validates every record in order,
//! derives the birth day and the localised creation timestamp, and
//! serialises the resulting [`UserInfo`] array. The first failing record
//! aborts the whole batch; partial results are never returned.

use std::sync::Arc;

use chrono::{Datelike, SecondsFormat};

use crate::domain::ports::ZoneCatalogue;
use crate::domain::record_validation::{
    parse_created_on, parse_date_of_birth, validate_name, validate_user_id,
};
use crate::domain::{Deadline, Error, UserInfo, UserRecord};

const PIPELINE: &str = "record_enrichment";

/// Validates and enriches user record batches.
///
/// Holds only read-only collaborators, so one instance is shared by every
/// request.
#[derive(Clone)]
pub struct RecordEnrichmentService {
    zones: Arc<dyn ZoneCatalogue>,
    zone_name: String,
}

impl RecordEnrichmentService {
    /// Create a service that localises timestamps to `zone_name`.
    #[must_use]
    pub fn new(zones: Arc<dyn ZoneCatalogue>, zone_name: impl Into<String>) -> Self {
        Self {
            zones,
            zone_name: zone_name.into(),
        }
    }

    /// Run the full pipeline and return the serialised JSON array.
    ///
    /// # Errors
    /// - [`crate::domain::ErrorCode::MalformedInput`] when `body` is not a
    ///   JSON array of records.
    /// - [`crate::domain::ErrorCode::InvalidField`] for the first record
    ///   failing validation.
    /// - [`crate::domain::ErrorCode::Environment`] when the zone cannot be
    ///   resolved, serialisation fails or `deadline` expires.
    pub fn process(&self, body: &[u8], deadline: &Deadline) -> Result<String, Error> {
        let infos = self.enrich(body, deadline)?;
        serde_json::to_string(&infos)
            .map_err(|err| Error::environment(format!("serialising user info failed: {err}")))
            .inspect_err(|err| err.log(PIPELINE))
    }

    /// Parse and enrich `body`, preserving input order and cardinality.
    ///
    /// # Errors
    /// As [`RecordEnrichmentService::process`], minus serialisation.
    pub fn enrich(&self, body: &[u8], deadline: &Deadline) -> Result<Vec<UserInfo>, Error> {
        self.enrich_records(body, deadline)
            .inspect_err(|err| err.log(PIPELINE))
    }

    fn enrich_records(&self, body: &[u8], deadline: &Deadline) -> Result<Vec<UserInfo>, Error> {
        let records: Vec<UserRecord> =
            serde_json::from_slice(body).map_err(|err| Error::malformed_input(err.to_string()))?;

        records
            .iter()
            .map(|record| {
                deadline.check("record validation")?;
                self.enrich_record(record)
            })
            .collect()
    }

    fn enrich_record(&self, record: &UserRecord) -> Result<UserInfo, Error> {
        let user_id = validate_user_id(record.user_id)?;
        let name = validate_name(&record.name)?;
        let date_of_birth = parse_date_of_birth(&record.date_of_birth)?;
        let created_on = parse_created_on(record.created_on)?;
        let zone = self
            .zones
            .load(&self.zone_name)
            .map_err(|err| Error::environment(err.to_string()))?;

        Ok(UserInfo {
            user_id,
            name: name.to_owned(),
            birth_day_of_week: date_of_birth.day(),
            rfc_created_on: created_on
                .with_timezone(&zone)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}
