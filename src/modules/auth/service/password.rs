use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

#[derive(Debug)]
pub enum Error {
    FailedToHash,
}

pub fn hash(plain_text: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain_text.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::FailedToHash
        })
}

/// A malformed stored hash never matches.
pub fn verify(plain_text: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok(),
        Err(err) => {
            tracing::error!("Found an invalid password hash: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_the_right_password_only() {
        let hashed = hash("12341234").unwrap();
        assert!(verify("12341234", &hashed));
        assert!(!verify("43214321", &hashed));
    }

    #[test]
    fn salts_every_hash() {
        assert_ne!(hash("12341234").unwrap(), hash("12341234").unwrap());
    }

    #[test]
    fn malformed_hash_does_not_match() {
        assert!(!verify("12341234", "plain-text"));
    }
}
