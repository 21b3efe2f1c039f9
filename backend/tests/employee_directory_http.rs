//! Wire-level tests for the reqwest employee directory adapter.
//!
//! A local `httpmock` server plays the upstream directory so request shape,
//! envelope decoding and error classification are checked over real HTTP.

use std::time::Duration;

use employee_facade::domain::ports::{EmployeeDirectory, EmployeeDirectoryError};
use employee_facade::domain::{Employee, EmployeeId, NewEmployee, NewEmployeeDraft};
use employee_facade::outbound::employee_directory::{HttpEmployeeDirectory, employee_to_wire};
use httpmock::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};
use url::Url;

const COLLECTION_PATH: &str = "/api/v1/employee";
const SUCCESS_STATUS: &str = "Successfully processed request.";

fn directory_for(server: &MockServer, read_timeout: Duration) -> HttpEmployeeDirectory {
    let base_url = Url::parse(&server.base_url()).expect("mock server url");
    HttpEmployeeDirectory::new(base_url, read_timeout).expect("client builds")
}

fn directory(server: &MockServer) -> HttpEmployeeDirectory {
    directory_for(server, Duration::from_secs(5))
}

fn employee(id: &str, name: &str, salary: u32) -> Employee {
    Employee {
        id: EmployeeId::new(id).expect("valid id"),
        name: name.to_owned(),
        salary,
        age: 32,
        title: "Dr".to_owned(),
        email: "richard@company.com".to_owned(),
    }
}

fn envelope(data: Value) -> Value {
    json!({ "data": data, "status": SUCCESS_STATUS })
}

#[tokio::test]
async fn list_all_decodes_prefixed_fields_in_upstream_order() {
    let server = MockServer::start();
    let first = employee("id-2", "Bob", 20);
    let second = employee("id-1", "Alice", 10);
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(COLLECTION_PATH)
            .header("accept", "application/json");
        then.status(200).json_body(envelope(json!([
            employee_to_wire(&first),
            employee_to_wire(&second),
        ])));
    });

    let employees = directory(&server).list_all().await.expect("list succeeds");

    mock.assert_calls(1);
    assert_eq!(employees, vec![first, second]);
}

#[tokio::test]
async fn list_all_accepts_an_empty_collection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COLLECTION_PATH);
        then.status(200).json_body(envelope(json!([])));
    });

    let employees = directory(&server).list_all().await.expect("list succeeds");
    assert!(employees.is_empty());
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/mock/api/v1/employee");
        then.status(200).json_body(envelope(json!([])));
    });
    let base_url = Url::parse(&server.url("/mock/")).expect("prefixed url");
    let prefixed =
        HttpEmployeeDirectory::new(base_url, Duration::from_secs(5)).expect("client builds");

    prefixed.list_all().await.expect("list succeeds");
    mock.assert_calls(1);
}

#[tokio::test]
async fn get_by_id_requests_the_record_path() {
    let server = MockServer::start();
    let record = employee("4a3a170b", "Richard Test", 12_345);
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/employee/4a3a170b");
        then.status(200)
            .json_body(envelope(employee_to_wire(&record)));
    });

    let found = directory(&server)
        .get_by_id(&EmployeeId::new("4a3a170b").expect("valid id"))
        .await
        .expect("lookup succeeds");

    mock.assert_calls(1);
    assert_eq!(found, record);
}

#[tokio::test]
async fn create_sends_plain_field_names() {
    let server = MockServer::start();
    let created = employee("new-id", "Richard Test", 12_345);
    let mock = server.mock(|when, then| {
        when.method(POST).path(COLLECTION_PATH).json_body(json!({
            "name": "Richard Test",
            "salary": 12_345,
            "age": 32,
            "title": "Dr",
        }));
        then.status(200)
            .json_body(envelope(employee_to_wire(&created)));
    });
    let request = NewEmployee::try_from(NewEmployeeDraft {
        name: Some("Richard Test".to_owned()),
        salary: Some(12_345),
        age: Some(32),
        title: Some("Dr".to_owned()),
    })
    .expect("valid draft");

    let stored = directory(&server)
        .create(&request)
        .await
        .expect("create succeeds");

    mock.assert_calls(1);
    assert_eq!(stored, created);
}

#[rstest]
#[case::deleted(json!({ "data": true, "status": SUCCESS_STATUS }), true)]
#[case::refused(json!({ "data": false, "status": SUCCESS_STATUS }), false)]
#[case::null_data(json!({ "data": null, "status": SUCCESS_STATUS }), false)]
#[tokio::test]
async fn delete_by_name_sends_name_body(#[case] response: Value, #[case] expected: bool) {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path(COLLECTION_PATH)
            .json_body(json!({ "name": "Richard Test" }));
        then.status(200).json_body(response);
    });

    let deleted = directory(&server)
        .delete_by_name("Richard Test")
        .await
        .expect("delete call succeeds");

    mock.assert_calls(1);
    assert_eq!(deleted, expected);
}

#[tokio::test]
async fn delete_by_name_rejects_non_boolean_result() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path(COLLECTION_PATH);
        then.status(200)
            .json_body(json!({ "data": "yes", "status": SUCCESS_STATUS }));
    });

    let err = directory(&server)
        .delete_by_name("Richard Test")
        .await
        .expect_err("non-boolean data");
    assert!(matches!(err, EmployeeDirectoryError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn directory_404_envelope_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employee/missing");
        then.status(404)
            .json_body(json!({ "data": null, "status": "Not found", "error": null }));
    });

    let err = directory(&server)
        .get_by_id(&EmployeeId::new("missing").expect("valid id"))
        .await
        .expect_err("record missing");
    assert!(matches!(err, EmployeeDirectoryError::NotFound { .. }), "{err:?}");
}

#[rstest]
#[case::gateway_page(404, "<html><body>Not Found</body></html>")]
#[case::error_envelope(404, r#"{"status":"Error","error":"no such route"}"#)]
#[case::server_error(500, r#"{"status":"Error","error":"boom"}"#)]
#[case::bad_request(400, "")]
#[tokio::test]
async fn unexpected_responses_name_the_status(#[case] status: u16, #[case] body: &str) {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COLLECTION_PATH);
        then.status(status).body(body);
    });

    let err = directory(&server).list_all().await.expect_err("unhandled status");
    match &err {
        EmployeeDirectoryError::UnhandledStatus { status: actual, .. } => {
            assert_eq!(*actual, status);
        }
        other => panic!("expected unhandled status, got {other:?}"),
    }
    assert!(
        err.to_string()
            .starts_with(&format!("cannot handle http code: {status}")),
        "{err}"
    );
}

#[tokio::test]
async fn status_429_is_rate_limited_regardless_of_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COLLECTION_PATH);
        then.status(429).body("<html>slow down</html>");
    });

    let err = directory(&server).list_all().await.expect_err("rate limited");
    assert!(matches!(err, EmployeeDirectoryError::RateLimited { .. }), "{err:?}");
}

#[rstest]
#[case::null_data(json!({ "data": null, "status": SUCCESS_STATUS }))]
#[case::absent_data(json!({ "status": SUCCESS_STATUS }))]
#[tokio::test]
async fn missing_payload_fails_list(#[case] response: Value) {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COLLECTION_PATH);
        then.status(200).json_body(response);
    });

    let err = directory(&server).list_all().await.expect_err("no payload");
    assert!(
        matches!(err, EmployeeDirectoryError::MissingPayload { .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COLLECTION_PATH);
        then.status(200).body("not json");
    });

    let err = directory(&server).list_all().await.expect_err("bad body");
    assert!(matches!(err, EmployeeDirectoryError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn mistyped_record_is_a_decode_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COLLECTION_PATH);
        then.status(200).json_body(envelope(json!([{
            "id": "id-1",
            "employee_name": "Richard Test",
            "employee_salary": "a lot",
            "employee_age": 32,
            "employee_title": "Dr",
            "employee_email": "richard@company.com",
        }])));
    });

    let err = directory(&server).list_all().await.expect_err("bad record");
    assert!(matches!(err, EmployeeDirectoryError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn slow_directory_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COLLECTION_PATH);
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(envelope(json!([])));
    });

    let err = directory_for(&server, Duration::from_millis(200))
        .list_all()
        .await
        .expect_err("timed out");
    assert!(matches!(err, EmployeeDirectoryError::Timeout { .. }), "{err:?}");
}
