//! Centralized constants for the HRM API suite workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// HRM Application Paths
// =============================================================================

/// Name of the session cookie issued by the HRM web application.
pub const SESSION_COOKIE_NAME: &str = "orangehrm";

/// Prefix shared by every REST endpoint of the HRM application.
pub const API_PREFIX: &str = "/web/index.php/api/v2";

/// Login page that issues the initial session cookie and CSRF token.
pub const LOGIN_PAGE_PATH: &str = "/web/index.php/auth/login";

/// Form target that validates submitted credentials.
pub const LOGIN_VALIDATE_PATH: &str = "/web/index.php/auth/validate";

// =============================================================================
// Suite Defaults
// =============================================================================

/// Status line the HRM deployment answers successful requests with.
pub const DEFAULT_EXPECTED_STATUS_LINE: &str = "HTTP/1.0 200 OK";

/// First day of the default holiday window.
pub const DEFAULT_HOLIDAY_FROM: &str = "2025-01-01";

/// Last day of the default holiday window.
pub const DEFAULT_HOLIDAY_TO: &str = "2025-12-31";

/// Report name queried by the leave usage report scenario.
pub const DEFAULT_USAGE_REPORT_NAME: &str = "my_leave_entitlements_and_usage";
