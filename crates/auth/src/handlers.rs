use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;
use wgr_core::ID;
use wgr_core::Unique;

/// Signs a token for `member` and records it as a live session.
async fn issue(db: &Arc<Client>, tokens: &Crypto, member: &Member) -> HttpResponse {
    let claims = Claims::new(member.id(), ID::default());
    let token = match tokens.encode(&claims) {
        Ok(token) => token,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    if let Err(e) = db.signin(&Session::issued(&claims, &token)).await {
        log::error!("signin failed: {}", e);
        return HttpResponse::InternalServerError().body(e.to_string());
    }
    HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserInfo {
            id: member.id(),
            username: member.username().to_string(),
        },
    })
}

pub async fn register(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Err(reason) = req.validate() {
        return HttpResponse::BadRequest().body(reason);
    }
    match db.exists(&req.username, &req.email).await {
        Ok(false) => {}
        Ok(true) => return HttpResponse::Conflict().body("username or email already exists"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    let member = Member::new(ID::default(), req.username.clone(), req.email.clone());
    if let Err(e) = db.create(&member, &hashword).await {
        return HttpResponse::InternalServerError().body(e.to_string());
    }
    log::info!("registered member {} ({})", member.username(), member.id());
    issue(&db, &tokens, &member).await
}

pub async fn login(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    let (member, hashword) = match db.lookup(&req.username).await {
        Ok(Some(row)) => row,
        Ok(None) => return HttpResponse::Unauthorized().body("invalid credentials"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    if !password::verify(&req.password, &hashword) {
        return HttpResponse::Unauthorized().body("invalid credentials");
    }
    issue(&db, &tokens, &member).await
}

pub async fn logout(db: web::Data<Arc<Client>>, auth: Auth) -> impl Responder {
    match db.revoke(auth.claims()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({"status": "logged_out"})),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
