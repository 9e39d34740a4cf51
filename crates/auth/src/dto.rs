use super::*;
use serde::Deserialize;
use serde::Serialize;
use wgr_core::ID;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    /// Rejects credentials that could never be stored.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.len() < 3 || self.username.len() > 32 {
            return Err("username must be 3-32 characters");
        }
        if self.password.len() < 8 {
            return Err("password must be at least 8 characters");
        }
        if !self.email.contains('@') {
            return Err("email must contain @");
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Serialize)]
pub struct UserInfo {
    pub id: ID<Member>,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_reasonable_credentials() {
        assert!(request("alice", "alice@example.com", "hunter22").validate().is_ok());
    }

    #[test]
    fn rejects_short_usernames() {
        assert!(request("al", "al@example.com", "hunter22").validate().is_err());
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(request("alice", "alice@example.com", "short").validate().is_err());
    }

    #[test]
    fn rejects_bare_emails() {
        assert!(request("alice", "alice", "hunter22").validate().is_err());
    }
}
