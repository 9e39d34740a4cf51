//! Game routes.
//!
//! Thin adapters from HTTP onto [`wgr_records::Table`]. Every handler
//! authenticates, forwards to one service call, and maps the outcome.
mod dto;
pub mod handlers;

pub use dto::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// The service as served: backed by the shared Postgres client.
pub type Games = wgr_records::Table<Arc<Client>>;
