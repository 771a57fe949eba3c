//! Response interpretation subsystem.
//!
//! # Data Flow
//! ```text
//! UpstreamOutcome
//!     → interpreter.rs (status classification)
//!     → payload.rs (first headword from a 2xx body)
//!     → LookupResult (Success | NotFound | UpstreamTimeout | UpstreamError | MalformedPayload)
//! ```

pub mod interpreter;
pub mod payload;
pub mod result;

pub use interpreter::interpret;
pub use result::LookupResult;
