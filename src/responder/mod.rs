mod env_echo;
mod models;
mod plain_echo;
mod request_echo;

use std::io::Read;

use clap::ValueEnum;

use crate::config::ResponderConfig;
use crate::env::EnvironmentSnapshot;
use crate::error::Result;
use crate::response::HttpResponse;

pub use models::{EnvEchoDocument, RequestEchoDocument, STATUS_SUCCESS};
pub use plain_echo::{GET_MESSAGE, NO_BODY_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Responder {
    /// Echo every environment variable as JSON
    Env,
    /// Echo method, query string and body preview as JSON
    Request,
    /// Echo the POST body as plain text
    Plain,
}

impl Responder {
    pub fn name(self) -> &'static str {
        match self {
            Responder::Env => "env",
            Responder::Request => "request",
            Responder::Plain => "plain",
        }
    }

    /// Builds the complete response for one invocation. The environment
    /// echo never touches `input`.
    pub fn respond<R: Read>(
        self,
        env: &EnvironmentSnapshot,
        input: R,
        config: &ResponderConfig,
    ) -> Result<HttpResponse> {
        match self {
            Responder::Env => env_echo::respond(env),
            Responder::Request => request_echo::respond(env, input, config),
            Responder::Plain => plain_echo::respond(env, input, config),
        }
    }
}
