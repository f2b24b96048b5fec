//! Bearer-token authentication for API handlers.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, web};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;
use crate::routes::problem::ApiError;

/// Claims carried by the JWT presented in the `Authorization` header.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Decodes and verifies an HS256 token.
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;
        Ok(data.claims)
    }

    /// Signs these claims as an HS256 token.
    pub fn to_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    fn from_http_request(req: &HttpRequest) -> Result<Self, ApiError> {
        let config = req
            .app_data::<web::Data<ServerConfig>>()
            .ok_or_else(|| ApiError::Internal("server configuration is not registered".into()))?;

        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".into()))?;

        Self::from_token(token, &config.secret).map_err(|e| {
            log::warn!("Rejected bearer token: {e}");
            ApiError::Unauthorized("invalid or expired token".into())
        })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_http_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp: usize) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "agent@example.com".to_string(),
            name: "Agent".to_string(),
            exp,
        }
    }

    fn far_future() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    #[test]
    fn token_round_trips_with_matching_secret() {
        let user = claims(far_future());
        let token = user.to_token("secret").unwrap();
        assert_eq!(AuthenticatedUser::from_token(&token, "secret").unwrap(), user);
    }

    #[test]
    fn token_is_rejected_with_other_secret() {
        let token = claims(far_future()).to_token("secret").unwrap();
        assert!(AuthenticatedUser::from_token(&token, "other").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = claims(1).to_token("secret").unwrap();
        assert!(AuthenticatedUser::from_token(&token, "secret").is_err());
    }
}
