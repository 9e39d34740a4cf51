use super::*;
use actix_web::Either;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header;
use actix_web::web;
use wgr_auth::Auth;
use wgr_core::ID;
use wgr_core::Unique;
use wgr_records::Refusal;

type Body<T> = Either<web::Json<T>, web::Form<T>>;

fn body<T>(body: Body<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Maps a refused request onto its HTTP response.
pub fn refuse(refusal: Refusal) -> HttpResponse {
    match refusal {
        Refusal::BadInput(reason) => HttpResponse::BadRequest().body(reason),
        Refusal::NotFound(_) => HttpResponse::NotFound().body(refusal.to_string()),
        Refusal::Forbidden => HttpResponse::Forbidden().body(refusal.to_string()),
        Refusal::Conflict => HttpResponse::Conflict().body(refusal.to_string()),
        Refusal::Retired(_) => HttpResponse::UnprocessableEntity().body(refusal.to_string()),
        Refusal::Redirect(id) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("/game/{}", id)))
            .finish(),
        Refusal::Internal(e) => {
            log::error!("game request failed: {:#}", e);
            HttpResponse::InternalServerError().body("internal error")
        }
    }
}

pub async fn me(games: web::Data<Games>, auth: Auth) -> impl Responder {
    match games.player(auth.user()).await {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(refusal) => refuse(refusal),
    }
}

pub async fn options(games: web::Data<Games>, auth: Auth) -> impl Responder {
    match games.options(auth.user()).await {
        Ok((cards, users)) => HttpResponse::Ok().json(OptionsResponse {
            cards,
            users,
            conditions: games.conditions().clauses().to_vec(),
        }),
        Err(refusal) => refuse(refusal),
    }
}

pub async fn start(
    games: web::Data<Games>,
    auth: Auth,
    form: Body<StartForm>,
) -> impl Responder {
    let form = body(form);
    let card = form.selected_card.map(|f| f.text());
    let defender = form.defender_id.map(|f| f.text());
    match games
        .start(
            auth.user(),
            card.as_deref(),
            defender.as_deref(),
            form.condition.as_deref(),
        )
        .await
    {
        Ok(game) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/game/{}", game.id())))
            .json(GameView::new(&game, auth.user())),
        Err(refusal) => refuse(refusal),
    }
}

pub async fn list(games: web::Data<Games>, auth: Auth) -> impl Responder {
    match games.games(auth.user()).await {
        Ok(list) => HttpResponse::Ok().json(
            list.iter()
                .map(|(game, result)| ListEntry {
                    game: GameView::new(game, auth.user()),
                    result: *result,
                })
                .collect::<Vec<_>>(),
        ),
        Err(refusal) => refuse(refusal),
    }
}

pub async fn detail(
    games: web::Data<Games>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    match games.detail(auth.user(), ID::from(path.into_inner())).await {
        Ok((game, status)) => HttpResponse::Ok().json(DetailResponse {
            game: GameView::new(&game, auth.user()),
            status,
        }),
        Err(refusal) => refuse(refusal),
    }
}

pub async fn cancel(
    games: web::Data<Games>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    let id = ID::from(path.into_inner());
    match games.cancel(auth.user(), id).await {
        Ok(()) => {
            HttpResponse::Ok().json(serde_json::json!({ "status": "cancelled", "game_id": id }))
        }
        Err(refusal) => refuse(refusal),
    }
}

pub async fn prepare(
    games: web::Data<Games>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    match games.prepare(auth.user(), ID::from(path.into_inner())).await {
        Ok((game, cards)) => HttpResponse::Ok().json(CounterResponse {
            game: GameView::new(&game, auth.user()),
            cards,
        }),
        Err(refusal) => refuse(refusal),
    }
}

pub async fn counter(
    games: web::Data<Games>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
    form: Body<CounterForm>,
) -> impl Responder {
    let card = body(form).selected_card.map(|f| f.text());
    match games
        .counter(auth.user(), ID::from(path.into_inner()), card.as_deref())
        .await
    {
        Ok(game) => HttpResponse::Ok().json(GameView::new(&game, auth.user())),
        Err(refusal) => refuse(refusal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn refusals_map_to_statuses() {
        assert!(refuse(Refusal::BadInput("x".into())).status() == StatusCode::BAD_REQUEST);
        assert!(refuse(Refusal::NotFound("game")).status() == StatusCode::NOT_FOUND);
        assert!(refuse(Refusal::Forbidden).status() == StatusCode::FORBIDDEN);
        assert!(refuse(Refusal::Conflict).status() == StatusCode::CONFLICT);
        assert!(
            refuse(Refusal::Retired("NEAR_5".into())).status()
                == StatusCode::UNPROCESSABLE_ENTITY
        );
        assert!(
            refuse(Refusal::Internal(anyhow::anyhow!("boom"))).status()
                == StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn redirects_point_at_the_game() {
        let id = ID::<wgr_gameplay::Game>::default();
        let response = refuse(Refusal::Redirect(id));
        assert!(response.status() == StatusCode::SEE_OTHER);
        let location = response.headers().get(header::LOCATION).unwrap();
        assert!(location.to_str().unwrap() == format!("/game/{}", id));
    }
}
