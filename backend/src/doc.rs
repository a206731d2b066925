//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers both transformation endpoints and the schema wrappers
//! from [`crate::inbound::http::schemas`], which describe the wire shape
//! without coupling domain types to utoipa.
//!
//! The generated document is served by Swagger UI (debug builds) and exported
//! via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{UserInfoSchema, UserRecordSchema};
use utoipa::OpenApi;

/// OpenAPI document for the HTTP interface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Upload transformation API",
        description = "Record enrichment and JPEG to PNG conversion over HTTP."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::records::post_json,
        crate::inbound::http::images::post_jpeg_to_png,
    ),
    components(schemas(UserRecordSchema, UserInfoSchema)),
    tags(
        (name = "records", description = "User record validation and enrichment"),
        (name = "images", description = "Image format conversion")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    // utoipa replaces :: with . in schema names
    const USER_RECORD_SCHEMA_NAME: &str = "crate.domain.UserRecord";
    const USER_INFO_SCHEMA_NAME: &str = "crate.domain.UserInfo";

    #[test]
    fn registers_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/json"));
        assert!(doc.paths.paths.contains_key("/jpeg-to-png"));
    }

    #[test]
    fn registers_record_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key(USER_RECORD_SCHEMA_NAME));
        assert!(schemas.contains_key(USER_INFO_SCHEMA_NAME));
    }

    #[test]
    fn json_endpoint_references_the_record_schemas() {
        let json = ApiDoc::openapi().to_json().expect("valid JSON");
        assert!(json.contains(&format!("#/components/schemas/{USER_RECORD_SCHEMA_NAME}")));
        assert!(json.contains(&format!("#/components/schemas/{USER_INFO_SCHEMA_NAME}")));
    }
}
