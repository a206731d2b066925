//! Print the OpenAPI document as JSON.

use std::io::Write;

use upload_transform::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> std::io::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(std::io::Error::other)?;
    writeln!(std::io::stdout().lock(), "{json}")
}
