//! Shared test utilities for hrm-api integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount a mock HRM server that answers every scenario's requests.
//!
//! Invariants / Assumptions:
//! - Wiremock answers over HTTP/1.1, so commands that check status lines are
//!   pointed at `HTTP/1.1 200 OK`.
//! - Authenticated mocks require the `orangehrm=test-session` cookie.

use assert_cmd::Command;
use hrm_client::testing::{load_fixture, load_text_fixture};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

#[allow(dead_code)]
pub const API: &str = "/web/index.php/api/v2";

#[allow(dead_code)]
pub const SESSION_HEADER: &str = "orangehrm=test-session";

#[allow(dead_code)]
pub const STATUS_LINE: &str = "HTTP/1.1 200 OK";

/// Returns a hermetic `hrm-api` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every `HRM_*` variable is cleared so nothing leaks from the host.
pub fn hrm_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("hrm-api");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("HRM_BASE_URL")
        .env_remove("HRM_USERNAME")
        .env_remove("HRM_PASSWORD")
        .env_remove("HRM_SESSION_COOKIE")
        .env_remove("HRM_SKIP_VERIFY")
        .env_remove("HRM_TIMEOUT")
        .env_remove("HRM_EXPECTED_STATUS_LINE")
        .env_remove("HRM_CONFIG_PATH");

    cmd
}

/// A hermetic command pointed at `server` with the test session cookie and
/// the wiremock status line.
#[allow(dead_code)]
pub fn hrm_cmd_for(server: &MockServer) -> Command {
    let mut cmd = hrm_cmd();
    cmd.env("HRM_BASE_URL", server.uri())
        .env("HRM_SESSION_COOKIE", "test-session")
        .env("HRM_EXPECTED_STATUS_LINE", STATUS_LINE);
    cmd
}

#[allow(dead_code)]
pub fn api(resource: &str) -> String {
    format!("{}{}", API, resource)
}

/// Answers with the request's JSON body wrapped in `data`, the way create
/// endpoints return the stored record.
#[allow(dead_code)]
pub struct EchoData;

impl Respond for EchoData {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut data: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        if let Some(record) = data.as_object_mut() {
            record.insert("id".to_string(), json!(101));
        }
        ResponseTemplate::new(200).set_body_json(json!({ "data": data, "meta": [], "rels": [] }))
    }
}

#[allow(dead_code)]
async fn mount_get(server: &MockServer, resource: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(api(resource)))
        .and(header("cookie", SESSION_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a response for every request the full suite sends.
#[allow(dead_code)]
pub async fn mount_suite(server: &MockServer) {
    mount_get(server, "/leave/holidays", load_fixture("leave/holidays.json")).await;
    mount_get(server, "/leave/leave-types", load_fixture("leave/leave_types.json")).await;
    mount_get(server, "/leave/reports", load_fixture("leave/usage_report.json")).await;
    mount_get(server, "/leave/workweek", load_fixture("leave/workweek.json")).await;
    mount_get(server, "/pim/employees/count", load_fixture("pim/employee_count.json")).await;
    mount_get(server, "/pim/employees", load_fixture("pim/employees.json")).await;

    let employees = load_fixture("pim/employees.json");
    mount_get(server, "/pim/employees/7", json!({ "data": employees["data"][0] })).await;
    mount_get(
        server,
        "/pim/employees/7/personal-details",
        load_fixture("pim/personal_details.json"),
    )
    .await;
    mount_get(server, "/recruitment/vacancies", load_fixture("recruitment/vacancies.json")).await;
    mount_get(server, "/recruitment/candidates", load_fixture("recruitment/candidates.json")).await;
    mount_get(server, "/admin/job-titles", load_fixture("admin/job_titles.json")).await;

    Mock::given(method("POST"))
        .and(path(api("/pim/employees")))
        .and(header("cookie", SESSION_HEADER))
        .respond_with(EchoData)
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path(api("/pim/employees/7/personal-details")))
        .and(header("cookie", SESSION_HEADER))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("pim/update_personal_details.json")),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(api("/pim/reports/defined")))
        .and(header("cookie", SESSION_HEADER))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("pim/report_definition.json")),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(api("/recruitment/candidates")))
        .and(header("cookie", SESSION_HEADER))
        .respond_with(EchoData)
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(api("/recruitment/candidates")))
        .and(header("cookie", SESSION_HEADER))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("recruitment/delete_candidates.json")),
        )
        .mount(server)
        .await;
}

/// Mount a login page that sets an initial cookie and carries a CSRF token.
#[allow(dead_code)]
pub async fn mount_login_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/web/index.php/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "orangehrm=initial-cookie; path=/; HttpOnly")
                .set_body_string(load_text_fixture("auth/login_page.html")),
        )
        .mount(server)
        .await;
}
