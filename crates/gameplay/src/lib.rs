//! Wager game rules.
//!
//! An attacker commits a card against a chosen defender; the defender
//! answers with a card of their own; a winning condition decides the
//! game and the loser pays the winner.
//!
//! ## Cards
//!
//! - [`Card`] — A value in `1..=10`
//! - [`Hand`] — Five distinct cards offered for selection
//!
//! ## Resolution
//!
//! - [`Rule`] — How two cards compare
//! - [`Conditions`] — The configured table of named rules
//! - [`determine()`] — Pure outcome of two cards under a rule
//! - [`Outcome`] — Pending, attacker win, defender win, or draw
//!
//! ## Lifecycle
//!
//! - [`Game`] — The wager and its state machine
//! - [`Phase`], [`Status`], [`Verdict`] — Lifecycle and per-viewer views
//!
//! ## Settlement
//!
//! - [`Settlement`] — The zero-sum transfer owed by a finished game
//! - [`Entry`] — One member's ledger row for one game
//! - [`Player`] — A member and their ledger balance
mod card;
mod condition;
mod error;
mod game;
mod hand;
mod outcome;
mod phase;
mod player;
mod resolver;
mod rule;
mod settlement;

pub use card::*;
pub use condition::*;
pub use error::*;
pub use game::*;
pub use hand::*;
pub use outcome::*;
pub use phase::*;
pub use player::*;
pub use resolver::*;
pub use rule::*;
pub use settlement::*;
