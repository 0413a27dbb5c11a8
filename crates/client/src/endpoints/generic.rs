//! Ad-hoc requests shaped by a caller-chosen [`Shape`].

use serde_json::Value;

use crate::auth::SessionCookie;
use crate::error::Result;
use crate::extract::{Extraction, Shape};
use crate::request::{HttpMethod, RequestBuilder, Transport};
use crate::response::ApiResponse;

/// Send one authenticated request to `path` (relative to the base URL) and
/// extract the response as `shape`.
pub async fn fetch<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    shape: Shape,
    method: HttpMethod,
    path: &str,
    body: Option<&Value>,
) -> Result<ApiResponse<Extraction>> {
    let mut request = transport
        .request(path)
        .cookie(session)
        .header("Content-Type", super::CONTENT_TYPE_JSON);
    if let Some(body) = body {
        request = request.json_body(body);
    }
    let raw = request.dispatch(method).await?;
    let data = shape.extract(&raw);
    Ok(ApiResponse::new(raw, data))
}
