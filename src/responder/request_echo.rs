use std::io::Read;

use tracing::debug;

use crate::config::ResponderConfig;
use crate::env::EnvironmentSnapshot;
use crate::error::Result;
use crate::json::to_json_string;
use crate::request::read_request;
use crate::response::HttpResponse;

use super::models::{RequestEchoDocument, STATUS_SUCCESS};

/// Echoes method, query and a preview of the body.
///
/// Unlike the environment echo, this response carries neither
/// `Content-Length` nor `Connection`; hosts have always relied on process
/// exit to delimit it.
pub fn respond<R: Read>(
    env: &EnvironmentSnapshot,
    input: R,
    config: &ResponderConfig,
) -> Result<HttpResponse> {
    let request = read_request(env, input)?;
    let document = RequestEchoDocument {
        status: STATUS_SUCCESS,
        method_used: &request.method,
        query: &request.query,
        message: &config.message,
        body_received: request.body_preview(config.body_preview_limit),
    };
    let json = to_json_string(&document)?;
    debug!(body_bytes = request.body.len(), "request echo");

    Ok(HttpResponse::ok()
        .header("Content-Type", "application/json")
        .body(json)
        .trailing_newline(true))
}
