use crate::config::Config;
use crate::domain::models::{auth::Claims, user::User};
use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, SaltString},
    Argon2, PasswordVerifier,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use uuid::Uuid;

const TOKEN_TTL_HOURS: i64 = 24;

pub struct AuthService {
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            issuer: config.auth_issuer.clone(),
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string())
    }

    pub fn verify_password(&self, password: &str, password_hash: &str) -> Result<(), AppError> {
        let parsed_hash = PasswordHash::new(password_hash).map_err(|_| AppError::Internal)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized)
    }

    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = Claims {
            iss: self.issuer.clone(),
            sub: user.id.clone(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
            iat: now.timestamp() as usize,
            jti: Uuid::new_v4().to_string(),
            email: user.email.clone(),
            role: user.role.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::Internal
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::ROLE_USER;

    fn service() -> AuthService {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
            auth_issuer: "test-issuer".to_string(),
            timezone: "UTC".to_string(),
            admin_email: "admin@test".to_string(),
            admin_password: "admin".to_string(),
        };
        AuthService::new(&config)
    }

    fn sample_user(service: &AuthService) -> User {
        let hash = service.hash_password("hunter2").unwrap();
        User::new("alice@example.com".to_string(), hash, "Alice".to_string(), None)
    }

    #[test]
    fn password_round_trip() {
        let service = service();
        let user = sample_user(&service);

        assert!(service.verify_password("hunter2", &user.password_hash).is_ok());
        assert!(matches!(
            service.verify_password("wrong", &user.password_hash),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn token_round_trip_carries_identity() {
        let service = service();
        let user = sample_user(&service);

        let token = service.issue_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, ROLE_USER);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = service();
        let user = sample_user(&service);

        let mut token = service.issue_token(&user).unwrap();
        token.push('x');
        assert!(matches!(service.verify_token(&token), Err(AppError::Unauthorized)));
    }
}
