use anyhow::Result;
use cgi_echo::cli;
use cgi_echo::responder::Responder;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cgi-echo",
    version,
    about = "CGI-style echo responders printing raw HTTP/1.1 responses",
    disable_help_subcommand = true
)]
struct Cli {
    /// Responder to run for this invocation
    #[arg(value_enum, value_name = "RESPONDER")]
    responder: Responder,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    cli::run(args.responder)
}
