use std::io::{self, Read};

use tracing::debug;

use crate::env::EnvironmentSnapshot;
use crate::error::{ResponderError, Result};

use super::model::{RequestInfo, DEFAULT_METHOD};

pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
pub const QUERY_STRING: &str = "QUERY_STRING";
pub const CONTENT_LENGTH: &str = "CONTENT_LENGTH";

/// Resolves the CGI request variables from `env` and reads the body from
/// `input` when `CONTENT_LENGTH` is positive. `input` is left untouched
/// otherwise.
pub fn read_request<R: Read>(env: &EnvironmentSnapshot, input: R) -> Result<RequestInfo> {
    let method = env.get_or(REQUEST_METHOD, DEFAULT_METHOD).to_string();
    let query = env.get_or(QUERY_STRING, "").to_string();
    let content_length = match env.get(CONTENT_LENGTH) {
        Some(raw) => parse_content_length(raw)?,
        None => 0,
    };

    let body = if content_length > 0 {
        read_body(input, content_length)?
    } else {
        String::new()
    };

    debug!(%method, %query, content_length, "resolved request");

    Ok(RequestInfo {
        method,
        query,
        content_length,
        body,
    })
}

/// Parses an integer the way the CGI host hands it over. Surrounding
/// whitespace and a sign are accepted; negative lengths count as zero.
pub fn parse_content_length(raw: &str) -> Result<u64> {
    let parsed = raw
        .trim()
        .parse::<i64>()
        .map_err(|source| ResponderError::InvalidContentLength {
            value: raw.to_string(),
            source,
        })?;
    Ok(u64::try_from(parsed).unwrap_or(0))
}

/// Leading-integer parse: optional whitespace and sign, then digits up to the
/// first other character. Anything unparsable or negative is 0.
pub fn lenient_content_length(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if negative {
        return 0;
    }
    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse::<u64>().unwrap_or(0)
}

/// Reads up to `length` bytes and returns whatever arrived before end of
/// input. No decoding is applied.
pub fn read_available<R: Read>(input: R, length: u64) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    input.take(length).read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn read_body<R: Read>(input: R, length: u64) -> Result<String> {
    let mut buffer = Vec::new();
    input.take(length).read_to_end(&mut buffer)?;

    if (buffer.len() as u64) < length {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "stdin closed after {} of {} body bytes",
                buffer.len(),
                length
            ),
        )
        .into());
    }

    Ok(String::from_utf8(buffer)?)
}
