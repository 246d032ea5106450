use serde::Serialize;

use crate::env::EnvironmentSnapshot;

pub const STATUS_SUCCESS: &str = "success";

/// Body of the environment echo. Field order is the wire order.
#[derive(Debug, Serialize)]
pub struct EnvEchoDocument<'a> {
    pub status: &'static str,
    pub env: &'a EnvironmentSnapshot,
}

/// Body of the request echo. Field order is the wire order.
#[derive(Debug, Serialize)]
pub struct RequestEchoDocument<'a> {
    pub status: &'static str,
    pub method_used: &'a str,
    pub query: &'a str,
    pub message: &'a str,
    pub body_received: String,
}
