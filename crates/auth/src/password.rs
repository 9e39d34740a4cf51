use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))
        .map(|h| h.to_string())
}

pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_the_right_password() {
        let hashword = hash("correct horse").unwrap();
        assert!(verify("correct horse", &hashword));
        assert!(!verify("battery staple", &hashword));
    }

    #[test]
    fn salts_every_hash() {
        assert!(hash("same").unwrap() != hash("same").unwrap());
    }

    #[test]
    fn garbage_hashes_never_verify() {
        assert!(!verify("anything", "not-a-phc-string"));
    }
}
