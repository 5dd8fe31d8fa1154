//! Session authentication for Daybook.
//!
//! This crate provides:
//! - Session token issuance and resolution (signed JWTs)
//! - The claims carried by a session
//!
//! Login itself is handled by the external identity integration; this crate
//! only deals with the session tokens the server accepts.

mod error;
mod session;

pub use error::*;
pub use session::*;

/// Default session expiration time in hours.
pub const DEFAULT_SESSION_EXPIRATION_HOURS: u64 = 24;

/// Default session token issuer.
pub const DEFAULT_SESSION_ISSUER: &str = "daybook";
