use std::io::Write;

use crate::error::Result;

use super::model::HttpResponse;

/// Renders the status line, headers, blank line and body.
pub fn render_response(response: &HttpResponse) -> Vec<u8> {
    let eol = response.line_ending.as_str();
    let mut head = format!("HTTP/1.1 {} {}{}", response.status, response.reason, eol);
    for (name, value) in &response.headers {
        head.push_str(&format!("{}: {}{}", name, value, eol));
    }
    head.push_str(eol);

    let mut out = Vec::with_capacity(head.len() + response.body.len() + eol.len());
    out.extend_from_slice(head.as_bytes());
    out.extend_from_slice(&response.body);
    if response.trailing_newline {
        out.extend_from_slice(eol.as_bytes());
    }
    out
}

/// Writes the whole response in one call and flushes, so a failure earlier in
/// the run never leaves a partial head on the output.
pub fn write_response<W: Write + ?Sized>(writer: &mut W, response: &HttpResponse) -> Result<()> {
    writer.write_all(&render_response(response))?;
    writer.flush()?;
    Ok(())
}
