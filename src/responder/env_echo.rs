use tracing::debug;

use crate::env::EnvironmentSnapshot;
use crate::error::Result;
use crate::json::to_json_string;
use crate::response::HttpResponse;

use super::models::{EnvEchoDocument, STATUS_SUCCESS};

/// Echoes the whole environment as `{"status": "success", "env": {...}}`,
/// framed with `Connection: close` and an exact `Content-Length`.
pub fn respond(env: &EnvironmentSnapshot) -> Result<HttpResponse> {
    let document = EnvEchoDocument {
        status: STATUS_SUCCESS,
        env,
    };
    let json = to_json_string(&document)?;
    debug!(variables = env.len(), bytes = json.len(), "env echo");

    Ok(HttpResponse::ok()
        .header("Content-Type", "application/json")
        .header("Connection", "close")
        .body(json)
        .content_length()
        .trailing_newline(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::render_response;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_environment_in_success_document() {
        let env = EnvironmentSnapshot::from_pairs([("USER", "alice")]);
        let response = respond(&env).unwrap();
        assert_eq!(
            response.body_text(),
            r#"{"status": "success", "env": {"USER": "alice"}}"#
        );
    }

    #[test]
    fn renders_full_response() {
        let env = EnvironmentSnapshot::from_pairs([("USER", "alice")]);
        let rendered = String::from_utf8(render_response(&respond(&env).unwrap())).unwrap();
        assert_eq!(
            rendered,
            "HTTP/1.1 200 OK\n\
             Content-Type: application/json\n\
             Connection: close\n\
             Content-Length: 47\n\
             \n\
             {\"status\": \"success\", \"env\": {\"USER\": \"alice\"}}\n"
        );
    }

    #[test]
    fn content_length_matches_body_bytes() {
        let env = EnvironmentSnapshot::from_pairs([
            ("PATH", "/usr/bin:/bin"),
            ("GREETING", "¡hola, café!"),
            ("EMPTY", ""),
        ]);
        let response = respond(&env).unwrap();
        let declared: usize = response
            .header_value("Content-Length")
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(declared, response.body.len());
    }

    #[test]
    fn env_field_round_trips_exactly() {
        let env = EnvironmentSnapshot::from_pairs([
            ("A", "1"),
            ("QUOTE", "say \"hi\""),
            ("UNICODE", "日本"),
        ]);
        let response = respond(&env).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(parsed["status"], "success");
        let echoed: EnvironmentSnapshot =
            serde_json::from_value::<std::collections::BTreeMap<String, String>>(
                parsed["env"].clone(),
            )
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(echoed, env);
    }

    #[test]
    fn empty_environment_yields_empty_object() {
        let response = respond(&EnvironmentSnapshot::default()).unwrap();
        assert_eq!(response.body_text(), r#"{"status": "success", "env": {}}"#);
    }
}
