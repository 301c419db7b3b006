use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind as JwtError,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{abstract_trait::JwtServiceTrait, utils::AppError};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn new(user_id: Uuid, exp: usize, iat: usize) -> Self {
        Claims { user_id, exp, iat }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::minutes(60)).timestamp() as usize;

        let claims = Claims::new(user_id, exp, iat);

        match encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        ) {
            Ok(token) => Ok(token),
            Err(err) => Err(AppError::TokenGenerationError(err)),
        }
    }

    fn verify_token(&self, token: &str) -> Result<Uuid, AppError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());

        match decode::<Claims>(token, &decoding_key, &Validation::default()) {
            Ok(token_data) => Ok(token_data.claims.user_id),
            Err(err) => {
                if let JwtError::ExpiredSignature = err.kind() {
                    Err(AppError::TokenExpiredError)
                } else {
                    error!("Error decoding token: {err:?}");
                    Err(AppError::TokenValidationError)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip_returns_original_user_id() {
        let jwt = JwtConfig::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = jwt.generate_token(user_id).unwrap();
        let verified = jwt.verify_token(&token).unwrap();

        assert_eq!(verified, user_id);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let jwt = JwtConfig::new("test-secret");
        let other = JwtConfig::new("other-secret");

        let token = jwt.generate_token(Uuid::new_v4()).unwrap();

        assert!(matches!(
            other.verify_token(&token),
            Err(AppError::TokenValidationError)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret");

        assert!(matches!(
            jwt.verify_token("not-a-token"),
            Err(AppError::TokenValidationError)
        ));
    }
}
