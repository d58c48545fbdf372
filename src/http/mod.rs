//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, echo handler)
//!     → request.rs (request ID assigned and propagated)
//!     → echo::process
//!     → response.rs (JSON body, content type, metrics)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRequestUuid, X_REQUEST_ID};
pub use response::respond_with_json;
pub use server::{AppState, HttpServer};
