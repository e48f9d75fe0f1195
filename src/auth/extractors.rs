use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use tracing::{debug, warn};

use super::claims::Claims;
use crate::{error::AppError, state::AppState};

/// Verification half of the token setup; signing belongs to the auth provider.
#[derive(Clone)]
pub struct AuthKeys {
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
}

impl FromRef<AppState> for AuthKeys {
    fn from_ref(state: &AppState) -> Self {
        let cfg = &state.config.auth;
        Self {
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
        }
    }
}

impl AuthKeys {
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        anyhow::ensure!(!data.claims.sub.is_empty(), "token has an empty subject");
        debug!(user_id = %data.claims.sub, "token verified");
        Ok(data.claims)
    }
}

/// Authenticated caller; holds the token subject.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let claims = AuthKeys::from_ref(state).verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            AppError::Unauthorized("Invalid or expired token".into())
        })?;

        Ok(AuthUser(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fake_state, sign_token};

    #[test]
    fn verifies_token_from_provider() {
        let state = fake_state(vec![]);
        let token = sign_token(&state.config.auth, "user-1");
        let claims = AuthKeys::from_ref(&state).verify(&token).expect("valid token");
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.iss, state.config.auth.issuer);
    }

    #[test]
    fn rejects_wrong_audience() {
        let state = fake_state(vec![]);
        let mut other = state.config.auth.clone();
        other.audience = "someone-else".into();
        let token = sign_token(&other, "user-1");
        assert!(AuthKeys::from_ref(&state).verify(&token).is_err());
    }

    #[test]
    fn rejects_wrong_secret() {
        let state = fake_state(vec![]);
        let mut other = state.config.auth.clone();
        other.secret = "not-the-secret".into();
        let token = sign_token(&other, "user-1");
        assert!(AuthKeys::from_ref(&state).verify(&token).is_err());
    }

    #[test]
    fn rejects_empty_subject() {
        let state = fake_state(vec![]);
        let token = sign_token(&state.config.auth, "");
        let err = AuthKeys::from_ref(&state).verify(&token).unwrap_err();
        assert!(err.to_string().contains("empty subject"));
    }
}
