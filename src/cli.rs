use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::{resolve_config, CONFIG_ENV_VAR};
use crate::env::EnvironmentSnapshot;
use crate::logging::{self, LOG_ENV_VAR};
use crate::responder::Responder;
use crate::response::write_response;

/// Runs one CGI invocation against the real process: environment snapshot,
/// stdin, stdout and the current directory for config lookup.
pub fn run(responder: Responder) -> Result<()> {
    let env = EnvironmentSnapshot::capture();
    let cwd = std::env::current_dir().context("resolving current directory")?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(responder, &env, &cwd, stdin.lock(), &mut stdout.lock())
}

/// Same as [`run`] with every input made explicit. Nothing reaches `output`
/// unless the full response was built.
pub fn run_with<R, W>(
    responder: Responder,
    env: &EnvironmentSnapshot,
    cwd: &Path,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: Read,
    W: Write + ?Sized,
{
    let config = resolve_config(env.get(CONFIG_ENV_VAR), cwd).context("loading configuration")?;
    logging::init(logging::filter_directive(
        env.get(LOG_ENV_VAR),
        &config.log_level,
    ));

    let response = match responder.respond(env, input, &config) {
        Ok(response) => response,
        Err(err) => {
            error!(responder = responder.name(), "{err}");
            return Err(err).with_context(|| format!("{} responder failed", responder.name()));
        }
    };

    write_response(output, &response).context("writing response")?;
    info!(
        responder = responder.name(),
        status = response.status,
        "response written"
    );
    Ok(())
}
