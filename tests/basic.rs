use std::io::Cursor;

use anyhow::Result;
use cgi_echo::config::{load_config, ResponderConfig};
use cgi_echo::env::EnvironmentSnapshot;
use cgi_echo::request::{read_request, truncate_for_display};
use cgi_echo::responder::Responder;
use cgi_echo::response::render_response;
use tempfile::tempdir;

fn snapshot(pairs: &[(&str, &str)]) -> EnvironmentSnapshot {
    EnvironmentSnapshot::from_pairs(pairs.iter().copied())
}

#[test]
fn env_field_equals_snapshot_for_varied_inputs() -> Result<()> {
    let cases: Vec<Vec<(&str, &str)>> = vec![
        vec![],
        vec![("USER", "alice")],
        vec![("A", "1"), ("B", "two words"), ("C", "tab\there")],
        vec![("JSONISH", "{\"x\": [1, 2]}"), ("BACKSLASH", "C:\\tmp")],
        vec![("EMOJI", "☕🦀"), ("LATIN", "Ünïcødé")],
    ];

    for pairs in cases {
        let env = snapshot(&pairs);
        let response = Responder::Env.respond(&env, Cursor::new(""), &ResponderConfig::default())?;
        let parsed: serde_json::Value = serde_json::from_slice(&response.body)?;

        let echoed = parsed["env"].as_object().expect("env object");
        assert_eq!(echoed.len(), env.len());
        for (key, value) in &env {
            assert_eq!(echoed[key.as_str()], value.as_str());
        }

        let declared: usize = response.header_value("Content-Length").unwrap().parse()?;
        assert_eq!(declared, response.body.len());
    }
    Ok(())
}

#[test]
fn body_preview_boundaries() {
    for length in [0usize, 1, 49, 50] {
        let body = "b".repeat(length);
        assert_eq!(truncate_for_display(&body, 50), body);
    }
    for length in [51usize, 60, 500] {
        let body = "b".repeat(length);
        assert_eq!(
            truncate_for_display(&body, 50),
            format!("{}...", "b".repeat(50))
        );
    }
}

#[test]
fn request_scenario_matches_expected_fields() -> Result<()> {
    let env = snapshot(&[
        ("REQUEST_METHOD", "POST"),
        ("QUERY_STRING", "id=5"),
        ("CONTENT_LENGTH", "3"),
    ]);
    let info = read_request(&env, Cursor::new("abc"))?;
    assert_eq!(info.body, "abc");

    let response =
        Responder::Request.respond(&env, Cursor::new("abc"), &ResponderConfig::default())?;
    let parsed: serde_json::Value = serde_json::from_slice(&response.body)?;
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["method_used"], "POST");
    assert_eq!(parsed["query"], "id=5");
    assert_eq!(parsed["message"], "Hello from Python!");
    assert_eq!(parsed["body_received"], "abc");
    Ok(())
}

#[test]
fn request_header_set_differs_from_env_echo() -> Result<()> {
    let env = EnvironmentSnapshot::default();
    let config = ResponderConfig::default();

    let env_echo = String::from_utf8(render_response(&Responder::Env.respond(
        &env,
        Cursor::new(""),
        &config,
    )?))?;
    let request_echo = String::from_utf8(render_response(&Responder::Request.respond(
        &env,
        Cursor::new(""),
        &config,
    )?))?;

    assert!(env_echo.contains("\nConnection: close\n"));
    assert!(env_echo.contains("\nContent-Length: "));
    assert!(!request_echo.contains("Connection:"));
    assert!(!request_echo.contains("Content-Length:"));
    Ok(())
}

#[test]
fn config_file_changes_plain_echo_server_header() -> Result<()> {
    let temp = tempdir()?;
    std::fs::write(
        temp.path().join("cgi-echo.json"),
        r#"{"serverName": "caffeine/1.0"}"#,
    )?;

    let loaded = load_config(temp.path())?.expect("config should load");
    let response = Responder::Plain.respond(
        &EnvironmentSnapshot::default(),
        Cursor::new(""),
        &loaded.config,
    )?;
    assert_eq!(response.header_value("Server"), Some("caffeine/1.0"));
    Ok(())
}
