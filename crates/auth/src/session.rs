use super::*;
use wgr_core::ID;
use wgr_core::Unique;

/// A login, bound to one member and to the one token issued for it.
///
/// Only the SHA-256 of the token is kept. A request is honored when its
/// token hashes to this value, names this member, and the session is
/// neither expired nor revoked.
#[derive(Debug, Clone)]
pub struct Session {
    id: ID<Self>,
    member: ID<Member>,
    hash: Vec<u8>,
    expires: std::time::SystemTime,
}

impl Unique for Session {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Session {
    /// Records `token`, already signed for `claims`, as a live session.
    pub fn issued(claims: &Claims, token: &str) -> Self {
        Self {
            id: claims.session(),
            member: claims.user(),
            hash: Crypto::hash(token),
            expires: std::time::UNIX_EPOCH + std::time::Duration::from_secs(claims.exp as u64),
        }
    }
    pub fn member(&self) -> ID<Member> {
        self.member
    }
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }
    pub fn expires_at(&self) -> std::time::SystemTime {
        self.expires
    }
    /// Whether this session stands behind `token` carrying `claims`.
    pub fn vouches(&self, claims: &Claims, token: &str) -> bool {
        self.id == claims.session()
            && self.member == claims.user()
            && self.hash == Crypto::hash(token)
            && self.expires > std::time::SystemTime::now()
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use wgr_database::*;

    impl Schema for Session {
        fn name() -> &'static str {
            SESSIONS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                SESSIONS,
                " (
                    id          UUID PRIMARY KEY,
                    user_id     UUID NOT NULL REFERENCES ",
                USERS,
                "(id) ON DELETE CASCADE,
                    token_hash  BYTEA NOT NULL,
                    expires_at  TIMESTAMPTZ NOT NULL,
                    revoked     BOOLEAN NOT NULL DEFAULT FALSE
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_sessions_user ON ",
                SESSIONS,
                " (user_id);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed(user: ID<Member>) -> (Claims, String) {
        let claims = Claims::new(user, ID::default());
        let token = Crypto::new(b"key").encode(&claims).unwrap();
        (claims, token)
    }

    #[test]
    fn vouches_for_its_own_token() {
        let (claims, token) = signed(ID::default());
        let session = Session::issued(&claims, &token);
        assert!(session.vouches(&claims, &token));
        assert!(session.member() == claims.user());
    }

    #[test]
    fn refuses_tokens_naming_another_member() {
        let (claims, token) = signed(ID::default());
        let session = Session::issued(&claims, &token);
        let stolen = Claims::new(ID::default(), claims.session());
        let forged = Crypto::new(b"key").encode(&stolen).unwrap();
        assert!(!session.vouches(&stolen, &forged));
        assert!(!session.vouches(&stolen, &token));
    }

    #[test]
    fn refuses_other_tokens_for_the_same_member() {
        let (claims, token) = signed(ID::default());
        let session = Session::issued(&claims, &token);
        let (_, other) = signed(claims.user());
        assert!(!session.vouches(&claims, &other));
    }
}
