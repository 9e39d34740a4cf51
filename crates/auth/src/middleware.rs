use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::error::ErrorInternalServerError;
use actix_web::error::ErrorUnauthorized;
use actix_web::web;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio_postgres::Client;
use wgr_core::ID;

/// Extractor for authenticated requests.
/// The bearer token must verify and be the one its session was issued.
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn user(&self) -> ID<Member> {
        self.0.user()
    }
}

/// Resolves an `Authorization` header to the claims of a live session.
pub async fn authenticate<R: AuthRepository>(
    repo: &R,
    crypto: &Crypto,
    header: Option<&str>,
) -> Result<Claims, actix_web::Error> {
    let header = header.ok_or_else(|| ErrorUnauthorized("missing authorization header"))?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ErrorUnauthorized("invalid authorization format"))?;
    let claims = crypto
        .decode(token)
        .map_err(|_| ErrorUnauthorized("invalid token"))?;
    if claims.expired() {
        return Err(ErrorUnauthorized("token expired"));
    }
    match repo
        .vouches(&claims, token)
        .await
        .inspect_err(|e| log::error!("session lookup failed: {}", e))
        .map_err(|_| ErrorInternalServerError("database error"))?
    {
        true => Ok(claims),
        false => {
            log::debug!("no live session {} for {}", claims.session(), claims.user());
            Err(ErrorUnauthorized("session not valid"))
        }
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let crypto = req.app_data::<web::Data<Crypto>>().cloned();
        let db = req.app_data::<web::Data<Arc<Client>>>().cloned();
        let header = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_owned());
        Box::pin(async move {
            let crypto =
                crypto.ok_or_else(|| ErrorInternalServerError("token service not configured"))?;
            let db = db.ok_or_else(|| ErrorInternalServerError("database not configured"))?;
            authenticate(db.get_ref(), crypto.get_ref(), header.as_deref())
                .await
                .map(Auth)
        })
    }
}
