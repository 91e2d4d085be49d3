//! # Bearer-token identity
//!
//! Resolves the acting user from an HS256 JWT. Issuing tokens belongs to
//! the authentication service; this side only verifies them.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Claims carried by an access token. `id` is the user id recorded as
/// owner on everything that user creates.
///
/// A token expires at `exp` when it carries one; otherwise it must carry
/// `iat` and is accepted for the verifier's maximum age after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}

pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
    max_age_secs: u64,
}

impl TokenVerifier {
    pub fn new(access_token_key: &[u8], max_age_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is still checked whenever present.
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(access_token_key),
            validation,
            max_age_secs,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let claims = decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::warn!("rejected access token: {e}");
                ApiError::Unauthenticated
            })?;

        if claims.exp.is_none() {
            let now = chrono::Utc::now().timestamp().max(0) as u64;
            match claims.iat {
                Some(iat) if iat.saturating_add(self.max_age_secs) >= now => {}
                _ => {
                    log::warn!("rejected access token for {}: older than {}s", claims.id, self.max_age_secs);
                    return Err(ApiError::Unauthenticated);
                }
            }
        }
        Ok(claims)
    }
}

/// The authenticated caller of a protected route.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let verifier = req.app_data::<web::Data<TokenVerifier>>().ok_or_else(|| {
        log::error!("TokenVerifier is not registered as app data");
        ApiError::Unauthenticated
    })?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthenticated)?;

    let claims = verifier.verify(token)?;
    Ok(AuthUser { id: claims.id })
}
