use std::io::Read;

use tracing::debug;

use crate::config::ResponderConfig;
use crate::env::EnvironmentSnapshot;
use crate::error::Result;
use crate::request::{
    lenient_content_length, read_available, CONTENT_LENGTH, DEFAULT_METHOD, REQUEST_METHOD,
};
use crate::response::{HttpResponse, LineEnding};

pub const ECHO_PREFIX: &str = "echo: ";
pub const NO_BODY_MESSAGE: &str = "POST request received, but no body found.";
pub const GET_MESSAGE: &str =
    "Caffeine handler executed successfully! Instance: integration_test (Method: GET)";

/// Plain-text echo. Only a POST looks at `CONTENT_LENGTH` or stdin; the body
/// is echoed as raw bytes, including a short read.
pub fn respond<R: Read>(
    env: &EnvironmentSnapshot,
    input: R,
    config: &ResponderConfig,
) -> Result<HttpResponse> {
    let method = env.get_or(REQUEST_METHOD, DEFAULT_METHOD);

    let body: Vec<u8> = if method != "POST" {
        GET_MESSAGE.into()
    } else {
        let length = env.get(CONTENT_LENGTH).map_or(0, lenient_content_length);
        if length > 0 {
            let received = read_available(input, length)?;
            let mut echoed = Vec::with_capacity(ECHO_PREFIX.len() + received.len());
            echoed.extend_from_slice(ECHO_PREFIX.as_bytes());
            echoed.extend_from_slice(&received);
            echoed
        } else {
            NO_BODY_MESSAGE.into()
        }
    };
    debug!(%method, bytes = body.len(), "plain echo");

    Ok(HttpResponse::ok()
        .header("Content-Type", "text/plain")
        .body(body)
        .content_length()
        .header("Server", &config.server_name)
        .header("Connection", "close")
        .line_ending(LineEnding::CrLf))
}
