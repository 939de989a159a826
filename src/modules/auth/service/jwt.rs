use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::types::JwtContext;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug)]
pub enum Error {
    FailedToSign,
    InvalidToken,
}

pub fn sign(jwt: &JwtContext, user_id: String) -> Result<String, Error> {
    let now = Utc::now();
    let claims = Claims {
        id: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::hours(jwt.expiration_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt.private_key.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign token: {}", err);
        Error::FailedToSign
    })
}

pub fn verify(jwt: &JwtContext, token: &str) -> Result<Claims, Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt.private_key.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| {
        tracing::debug!("Rejected token: {}", err);
        Error::InvalidToken
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt() -> JwtContext {
        JwtContext {
            private_key: String::from("secret"),
            expiration_hours: 1,
        }
    }

    #[test]
    fn signs_and_verifies_user_id() {
        let token = sign(&jwt(), String::from("01HZUSER")).unwrap();
        let claims = verify(&jwt(), &token).unwrap();
        assert_eq!(claims.id, "01HZUSER");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_tokens_signed_with_another_key() {
        let other = JwtContext {
            private_key: String::from("other"),
            expiration_hours: 1,
        };
        let token = sign(&other, String::from("01HZUSER")).unwrap();
        assert!(verify(&jwt(), &token).is_err());
    }

    #[test]
    fn rejects_expired_tokens() {
        let expired = JwtContext {
            private_key: String::from("secret"),
            expiration_hours: -2,
        };
        let token = sign(&expired, String::from("01HZUSER")).unwrap();
        assert!(verify(&jwt(), &token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(verify(&jwt(), "not-a-token").is_err());
    }
}
