//! Authentication, sessions, and identity management.
//!
//! JWT-based authentication with Argon2 password hashing. The game layer
//! only ever consumes the authenticated [`Member`] id; everything else in
//! this crate exists to produce it.
//!
//! ## Identity Types
//!
//! - [`Member`] — Registered user with credentials
//! - [`Session`] — Login bound to one member and one issued token
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`Claims`] — JWT payload structure
//! - [`password`] — Argon2 hashing and verification
//! - `authenticate` — Bearer header to the claims of a live session
mod claims;
mod crypto;
mod dto;
mod member;
pub mod password;
mod session;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use member::*;
pub use session::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
