//! Request runner for behaviour tests.
//!
//! Step functions are synchronous, so each exchange drives the Actix service
//! on its own single-threaded Tokio runtime inside a `LocalSet`.

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test::{self, TestRequest};
use actix_web::web::Bytes;
use tokio::task::LocalSet;
use upload_transform::inbound::http::state::HttpState;

use crate::support::app;

/// Status, content type and body of one response.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Response status.
    pub status: StatusCode,
    /// `Content-Type` header, empty when absent.
    pub content_type: String,
    /// Full response body.
    pub body: Bytes,
}

impl Exchange {
    /// Body as UTF-8 text.
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("utf8 body")
    }
}

/// Send `request` to an application built from `state`.
pub fn send(state: HttpState, request: TestRequest) -> Exchange {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();
    local.block_on(&runtime, async move {
        let service = test::init_service(app(state)).await;
        let res = test::call_service(&service, request.to_request()).await;
        let status = res.status();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let body = test::read_body(res).await;
        Exchange {
            status,
            content_type,
            body,
        }
    })
}
