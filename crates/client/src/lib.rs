//! HRM REST API client.
//!
//! This crate provides the request/response mapping layer used by the HRM
//! API suite: an HTTP client adapter that returns raw responses without
//! judging their status, per-endpoint extractors that shape JSON payloads
//! into typed models, and a response shape validator.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod extract;
pub mod json_path;
pub mod models;
pub mod request;
pub mod response;
pub mod validate;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::SessionCookie;
pub use client::HrmClient;
pub use client::builder::HrmClientBuilder;
pub use error::{ClientError, Result};
pub use extract::{Extraction, Shape};
pub use models::{
    CandidateList, Columnar, CreatedRecord, DeletedIds, EmployeeCount, EmployeeList, EmployeeUpdate,
    HolidayList, JobTitleList, LeaveTypeList, PersonalDetails, UsageReport, VacancyList, Workweek,
};
pub use request::{HttpMethod, RequestBuilder, Transport};
pub use response::{ApiResponse, RawResponse};
pub use validate::{ValidatedEndpoint, ValidationOutcome, validate};
