//! Echo Server Library
//!
//! A small JSON echo service: `POST` a JSON object, get it back with
//! `"echoed": true` added, unless it already said so.

pub mod config;
pub mod echo;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use echo::{process, EchoError, Payload};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
