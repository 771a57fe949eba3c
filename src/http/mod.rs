//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers, routes)
//!     → request.rs (request ID)
//!     → dispatch.rs (validate word, call upstream, classify)
//!     → response.rs (status + HTML body, written once)
//!     → Send to client
//! ```

pub mod dispatch;
pub mod request;
pub mod response;
pub mod server;

pub use dispatch::{Dispatcher, InputError, LookupRequest};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::Reply;
pub use server::HttpServer;
