//! Upstream dictionary API subsystem.
//!
//! # Data Flow
//! ```text
//! word
//!     → encoding.rs (percent-encode into the base path)
//!     → client.rs (GET, one deadline over headers and body)
//!     → UpstreamOutcome (Responded | TimedOut | TransportError)
//! ```
//!
//! # Design Decisions
//! - Single attempt per lookup, no retries
//! - The deadline only covers connect + headers; the body is read to completion
//! - A timed-out exchange is dropped, never observed again

pub mod client;
pub mod encoding;
pub mod outcome;

pub use client::{DictionaryUpstream, UpstreamClient};
pub use outcome::{UpstreamError, UpstreamOutcome};
