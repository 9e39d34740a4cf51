//! Wager Game Backend Binary
//!
//! Runs the HTTP server on BIND_ADDR (e.g. 0.0.0.0:8888) against DB_URL.

#[tokio::main]
async fn main() {
    wgr_core::log();
    wgr_core::kys();
    if let Err(e) = wgr_server::run().await {
        log::error!("server exited: {:#}", e);
        std::process::exit(1);
    }
}
