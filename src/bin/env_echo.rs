use anyhow::Result;
use cgi_echo::{cli, responder::Responder};

// Arguments are ignored; stdout carries only the response.
fn main() -> Result<()> {
    cli::run(Responder::Env)
}
