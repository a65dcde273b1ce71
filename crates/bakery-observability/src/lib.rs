//! Observability for the bakery storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier of one storefront session
//! - `StructuredLogger` - Structured logging with session context
//! - `LogSink` - Where entries go (stderr, or memory for tests)

mod logging;
mod session;

pub use logging::*;
pub use session::SessionId;
