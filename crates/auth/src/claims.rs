use super::*;
use wgr_core::ID;

/// JWT payload identifying a member and the session that issued the token.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub sid: uuid::Uuid,
    pub iat: i64,
    pub exp: i64,
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

impl Claims {
    pub fn new(user: ID<Member>, session: ID<Session>) -> Self {
        let now = now();
        Self {
            sub: user.inner(),
            sid: session.inner(),
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp < now()
    }
    pub fn user(&self) -> ID<Member> {
        ID::from(self.sub)
    }
    pub fn session(&self) -> ID<Session> {
        ID::from(self.sid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_claims_are_live() {
        let claims = Claims::new(ID::default(), ID::default());
        assert!(!claims.expired());
        assert!(claims.exp - claims.iat == Crypto::duration().as_secs() as i64);
    }

    #[test]
    fn stale_claims_are_expired() {
        let mut claims = Claims::new(ID::default(), ID::default());
        claims.exp = claims.iat - 1;
        assert!(claims.expired());
    }

    #[test]
    fn ids_survive_the_payload() {
        let user = ID::default();
        let session = ID::default();
        let claims = Claims::new(user, session);
        assert!(claims.user() == user);
        assert!(claims.session() == session);
    }
}
