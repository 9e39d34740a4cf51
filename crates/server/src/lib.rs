//! Wager Game Backend
//!
//! Serves authentication and game routes from a single actix-web server
//! backed by PostgreSQL.
//!
//! ## Submodules
//!
//! - [`games`] — Start, view, cancel, counter, and list games

pub mod games;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;
use wgr_auth::Member;
use wgr_auth::Session;
use wgr_database::migrate;
use wgr_gameplay::Conditions;
use wgr_gameplay::Entry;
use wgr_gameplay::Game;
use wgr_records::Table;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Creates every table the server reads or writes, in dependency order.
async fn tables(client: &Client) -> Result<(), wgr_database::PgErr> {
    migrate::<Member>(client).await?;
    migrate::<Session>(client).await?;
    migrate::<Game>(client).await?;
    migrate::<Entry>(client).await
}

#[rustfmt::skip]
pub async fn run() -> anyhow::Result<()> {
    let crypto = web::Data::new(wgr_auth::Crypto::from_env()?);
    let client = wgr_database::db().await;
    tables(&client).await?;
    let conditions = Conditions::from_env()?;
    log::info!("{} winning conditions loaded", conditions.clauses().len());
    let table = web::Data::new(Table::new(client.clone(), conditions));
    let client = web::Data::new(client);
    let bind = std::env::var("BIND_ADDR")?;
    log::info!("starting server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(table.clone())
            .app_data(crypto.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(wgr_auth::register))
                    .route("/logout", web::post().to(wgr_auth::logout))
                    .route("/login", web::post().to(wgr_auth::login))
                    .route("/me", web::get().to(games::handlers::me)),
            )
            .service(
                web::scope("/game")
                    .route("/", web::get().to(games::handlers::options))
                    .route("/", web::post().to(games::handlers::start))
                    .route("/list", web::get().to(games::handlers::list))
                    .route("/{game_id}", web::get().to(games::handlers::detail))
                    .route("/{game_id}/cancel", web::post().to(games::handlers::cancel))
                    .route("/{game_id}/counterattack", web::get().to(games::handlers::prepare))
                    .route("/{game_id}/counterattack", web::post().to(games::handlers::counter)),
            )
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}
