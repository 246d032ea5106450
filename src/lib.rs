pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod json;
pub mod logging;
pub mod request;
pub mod responder;
pub mod response;
