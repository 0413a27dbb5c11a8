//! Leave module endpoint tests.
//!
//! This module tests the leave API adapters:
//! - Holidays for a date window, also served as leave data
//! - Leave types
//! - The leave usage report headers
//! - The indexed workweek
//!
//! # Invariants
//! - Every request carries the session cookie and a JSON content type
//! - Extracted columns stay aligned with the source array

mod common;

use common::*;
use hrm_client::Columnar;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};

#[tokio::test]
async fn test_get_holidays() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("leave/holidays.json");

    Mock::given(method("GET"))
        .and(path(api("/leave/holidays")))
        .and(query_param("fromDate", "2025-01-01"))
        .and(query_param("toDate", "2025-12-31"))
        .and(header("cookie", SESSION_HEADER))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = endpoints::get_holidays(&client, &session(), "2025-01-01", "2025-12-31").await;

    assert!(result.is_ok());
    let response = result.unwrap();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.status_line(), "HTTP/1.1 200 OK");

    let holidays = response.data;
    assert_eq!(holidays.len(), 3);
    assert!(holidays.is_aligned());
    assert_eq!(holidays.ids, vec![Some(1), Some(4), Some(7)]);
    assert_eq!(holidays.dates[1], json!("2025-07-04"));
    assert_eq!(holidays.length_names[2], json!("Half Day"));
}

#[tokio::test]
async fn test_get_leave_data_uses_holidays_resource() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api("/leave/holidays")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("leave/holidays.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = endpoints::get_leave_data(&client, &session(), "2025-01-01", "2025-12-31")
        .await
        .unwrap();

    assert_eq!(response.data.names.len(), 3);
    assert!(hrm_client::validate("GetLeaveData", &response.raw).passed);
}

#[tokio::test]
async fn test_get_leave_types() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api("/leave/leave-types")))
        .and(query_param("limit", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("leave/leave_types.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = endpoints::get_leave_types(&client, &session()).await.unwrap();

    let types = response.data;
    assert_eq!(types.ids, vec![Some(1), Some(2), Some(9)]);
    assert_eq!(types.names[2], json!("Maternity"));
    assert_eq!(types.situationals[2], json!(true));
}

#[tokio::test]
async fn test_get_usage_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api("/leave/reports")))
        .and(query_param("name", "leave_type_leave_entitlements_and_usage"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("leave/usage_report.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = endpoints::get_usage_report(
        &client,
        &session(),
        "leave_type_leave_entitlements_and_usage",
    )
    .await
    .unwrap();

    let report = response.data;
    assert_eq!(report.len(), 3);
    assert!(report.is_aligned());
    assert_eq!(report.props[0], json!("leaveType"));
    assert_eq!(report.pins[0], json!("colPinStart"));
    assert!(report.pins[1].is_null());
    assert!(report.cell_properties[0].is_some());
    assert!(report.cell_properties[2].is_none());
    assert!(hrm_client::validate("GetUsageReport", &response.raw).passed);
}

#[tokio::test]
async fn test_get_workweek() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api("/leave/workweek")))
        .and(query_param("model", "indexed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("leave/workweek.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = endpoints::get_workweek(&client, &session()).await.unwrap();

    let workweek = response.data;
    assert!(workweek.is_complete());
    assert_eq!(workweek.days.get("0"), Some(&json!(8)));
    assert_eq!(workweek.days.get("3"), Some(&json!(0)));
}

#[tokio::test]
async fn test_get_holidays_unauthorized_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api("/leave/holidays")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"status": "401", "message": "Session expired"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = endpoints::get_holidays(&client, &session(), "2025-01-01", "2025-12-31")
        .await
        .unwrap();

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.status_line(), "HTTP/1.1 401 Unauthorized");
    assert!(response.data.is_empty());
}
