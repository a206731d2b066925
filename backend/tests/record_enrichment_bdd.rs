//! Behavioural tests for the record enrichment endpoint.
#[expect(
    dead_code,
    reason = "Shared helpers include fixtures used only by other integration suites."
)]
mod support;
#[path = "support/bdd.rs"]
mod bdd;

use std::sync::{Arc, Mutex};

use actix_web::test::TestRequest;
use bdd::{Exchange, send};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::{MissingZones, http_state};
use upload_transform::domain::record_validation::USER_ID_MESSAGE;
use upload_transform::inbound::http::state::HttpState;

const WINTER_RECORD: &str =
    r#"{"User_Id":1,"Name":"Joe Smith","Date_Of_Birth":"2022-01-19","Created_On":1642608434}"#;

#[derive(Default)]
struct RecordWorld {
    state: Option<HttpState>,
    exchange: Option<Exchange>,
}

impl std::fmt::Debug for RecordWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordWorld")
            .field("state", &self.state.as_ref().map(|_| "<HttpState>"))
            .field("exchange", &self.exchange)
            .finish()
    }
}

#[fixture]
fn world() -> Mutex<RecordWorld> {
    Mutex::new(RecordWorld::default())
}

fn post_batch(world: &Mutex<RecordWorld>, batch: String) {
    let mut guard = world.lock().expect("world lock");
    let state = guard.state.clone().expect("service configured");
    let request = TestRequest::post().uri("/json").set_payload(batch);
    guard.exchange = Some(send(state, request));
}

fn exchange(world: &Mutex<RecordWorld>) -> Exchange {
    let guard = world.lock().expect("world lock");
    guard.exchange.clone().expect("request sent")
}

#[given("the record service renders times in US Eastern time")]
fn eastern_service(world: &Mutex<RecordWorld>) {
    world.lock().expect("world lock").state = Some(http_state(None));
}

#[given("the zone rule database is unavailable")]
fn unavailable_zone_database(world: &Mutex<RecordWorld>) {
    world.lock().expect("world lock").state = Some(http_state(Some(Arc::new(MissingZones))));
}

#[when("a batch with a valid winter record is posted to /json")]
fn post_winter_record(world: &Mutex<RecordWorld>) {
    post_batch(world, format!("[{WINTER_RECORD}]"));
}

#[when("an empty batch is posted to /json")]
fn post_empty_batch(world: &Mutex<RecordWorld>) {
    post_batch(world, "[]".to_owned());
}

#[when("a batch whose second record has user id 0 is posted to /json")]
fn post_zero_user_id(world: &Mutex<RecordWorld>) {
    let zero = r#"{"User_Id":0,"Name":"Nobody","Date_Of_Birth":"2000-01-01","Created_On":1}"#;
    post_batch(world, format!("[{WINTER_RECORD},{zero}]"));
}

#[when("a record born on {date} is posted to /json")]
fn post_record_born_on(world: &Mutex<RecordWorld>, date: String) {
    post_batch(
        world,
        format!(r#"[{{"User_Id":7,"Name":"Ann","Date_Of_Birth":"{date}","Created_On":1}}]"#),
    );
}

#[then("the response status is {status}")]
fn response_status_is(world: &Mutex<RecordWorld>, status: u16) {
    assert_eq!(exchange(world).status.as_u16(), status);
}

#[then("the response carries the enriched winter record")]
fn response_carries_winter_record(world: &Mutex<RecordWorld>) {
    let exchange = exchange(world);
    assert_eq!(exchange.content_type, "application/json");
    assert_eq!(
        exchange.text(),
        r#"[{"User_Id":1,"Name":"Joe Smith","Birth_Day_Of_Week":19,"Rfc_Created_On":"2022-01-19T11:07:14-05:00"}]"#
    );
}

#[then("the response body is an empty JSON array")]
fn response_is_empty_array(world: &Mutex<RecordWorld>) {
    assert_eq!(exchange(world).text(), "[]");
}

#[then("the response body explains the user id constraint")]
fn response_explains_user_id(world: &Mutex<RecordWorld>) {
    assert_eq!(
        exchange(world).text(),
        format!("400 Bad Request\n{USER_ID_MESSAGE}")
    );
}

#[then("the response body names the rejected date {date}")]
fn response_names_rejected_date(world: &Mutex<RecordWorld>, date: String) {
    let exchange = exchange(world);
    let body = exchange.text();
    assert!(body.starts_with("400 Bad Request\n"), "{body}");
    assert!(body.contains(&format!("{date:?}")), "{body}");
}

#[then("the response body hides the internal detail")]
fn response_hides_internal_detail(world: &Mutex<RecordWorld>) {
    let exchange = exchange(world);
    assert!(exchange.content_type.starts_with("text/plain"));
    assert_eq!(
        exchange.text(),
        "500 Internal Server Error\nInternal server error"
    );
}

#[scenario(
    path = "tests/features/record_enrichment.feature",
    name = "A valid record is enriched with its birth day and local creation time"
)]
fn valid_record_is_enriched(world: Mutex<RecordWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/record_enrichment.feature",
    name = "An empty batch yields an empty array"
)]
fn empty_batch_yields_empty_array(world: Mutex<RecordWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/record_enrichment.feature",
    name = "A record with a zero user id rejects the whole batch"
)]
fn zero_user_id_rejects_batch(world: Mutex<RecordWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/record_enrichment.feature",
    name = "A date of birth in the wrong layout is rejected"
)]
fn wrong_date_layout_is_rejected(world: Mutex<RecordWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/record_enrichment.feature",
    name = "An unavailable zone database is reported as an internal error"
)]
fn unavailable_zone_database_is_internal_error(world: Mutex<RecordWorld>) {
    drop(world);
}
