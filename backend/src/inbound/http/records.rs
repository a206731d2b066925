//! Record enrichment endpoint.
//!
//! ```text
//! POST /json [{"User_Id":1,"Name":"Joe Smith","Date_Of_Birth":"2022-01-19","Created_On":1642608434}]
//! ```

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

use crate::inbound::http::ApiResult;
use crate::inbound::http::body::read_body;
use crate::inbound::http::response::render_json;
use crate::inbound::http::schemas::{UserInfoSchema, UserRecordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_post;

/// Route serving the record enrichment pipeline.
pub const JSON_PATH: &str = "/json";

/// Validate a batch of user records and return them enriched.
///
/// The first invalid record rejects the whole batch.
#[utoipa::path(
    post,
    path = "/json",
    request_body(content = Vec<UserRecordSchema>, content_type = "application/json"),
    responses(
        (status = 200, description = "Enriched records in input order", body = [UserInfoSchema]),
        (status = 400, description = "Wrong method, malformed JSON or an invalid record", content_type = "text/plain", body = String),
        (status = 500, description = "Internal server error", content_type = "text/plain", body = String)
    ),
    tags = ["records"],
    operation_id = "enrichRecords"
)]
pub async fn post_json(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    info!(route = JSON_PATH, "received request");
    require_post(&req).inspect_err(|err| err.log("http"))?;
    let body = read_body(payload, state.limits.max_body_bytes)
        .await
        .inspect_err(|err| err.log("http"))?;

    let deadline = state.limits.start_deadline();
    let json = state.records.process(&body, &deadline)?;
    Ok(render_json(json))
}
