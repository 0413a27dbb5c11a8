//! Typed models for HRM API payloads.
//!
//! One model per endpoint shape. Sequence models keep one entry per element
//! of the source array in every column, index-aligned; see [`Columnar`].
//! Models are produced by [`crate::extract`] and are never deserialized
//! directly from responses.

pub mod admin;
pub mod common;
pub mod leave;
pub mod pim;
pub mod recruitment;

pub use admin::JobTitleList;
pub use common::Columnar;
pub use leave::{HolidayList, LeaveTypeList, UsageReport, Workweek};
pub use pim::{CreatedRecord, EmployeeCount, EmployeeList, EmployeeUpdate, PersonalDetails};
pub use recruitment::{CandidateList, DeletedIds, VacancyList};
