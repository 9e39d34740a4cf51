//! Game and ledger persistence, and the game service built on it.
//!
//! ## Storage
//!
//! - [`Arena`] — Repository trait for games, players, and the ledger
//! - `Arc<tokio_postgres::Client>` — Production arena
//! - [`Memory`] — In-process arena with the same write checks
//!
//! ## Service
//!
//! - [`Table`] — Start, view, cancel, counter, and list games
//! - [`Refusal`] — Why a request changed nothing
mod arena;
mod memory;
mod postgres;
mod refusal;
mod table;

pub use arena::*;
pub use memory::*;
pub use refusal::*;
pub use table::*;
