// src/presentation/http/extractors.rs
use crate::{
    application::{dto::SiteContextDto, error::ApplicationError},
    domain::blog::UserId,
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

pub const ACTOR_HEADER: &str = "x-actor-id";

/// Acting user id taken from the `X-Actor-Id` header, when the caller sent one.
#[derive(Debug, Clone, Copy)]
pub struct Actor(pub Option<UserId>);

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(ACTOR_HEADER) else {
            return Ok(Self(None));
        };

        let id = value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::validation(
                    "X-Actor-Id must be a numeric user id",
                ))
            })?;
        let user = UserId::new(id).map_err(|err| HttpError::from_error(err.into()))?;
        Ok(Self(Some(user)))
    }
}

/// Site setup and menu the current request renders with, resolved once.
#[derive(Debug, Clone)]
pub struct SiteContext(pub SiteContextDto);

impl<S> FromRequestParts<S> for SiteContext
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let context = app_state
            .services
            .site_queries
            .current_context()
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(context))
    }
}
