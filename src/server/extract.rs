//! Request extractors.

use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::auth;
use crate::store::User;

use super::{error::ApiError, state::AppState};

/// Extractor for the authenticated user behind a bearer token.
///
/// Pulls the token from the `Authorization` header, verifies it against the
/// configured secret, and loads the user record the token was issued for.
/// Missing, invalid, and expired tokens all reject with the same 401.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::token_invalid())?;

        let claims = auth::verify_token(&state.auth().secret, bearer.token())
            .map_err(|_| ApiError::token_invalid())?;

        let user = state
            .store()
            .get_user(&claims.sub)?
            .ok_or_else(ApiError::token_invalid)?;

        Ok(AuthUser(user))
    }
}
