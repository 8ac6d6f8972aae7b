use crate::{static_routes, store::StoreError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Admin session required")]
    AnonymousAdmin,

    #[error("Entry not found")]
    EntryNotFound,

    #[error("Store error")]
    StoreError(#[from] StoreError),

    #[error("Failed to render page")]
    TemplateError(#[from] tera::Error),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::AnonymousAdmin => tracing::warn!("{}", self),
            Self::EntryNotFound => tracing::info!("{}", self),
            Self::StoreError(e) => tracing::error!("{}: {}", self, e),
            Self::TemplateError(e) => tracing::error!("{}: {:?}", self, e),
            Self::UnexpectedError(e) => tracing::error!("{}: {:?}", self, e),
        }

        match self {
            Self::AnonymousAdmin => Redirect::to(static_routes::ADMIN).into_response(),
            Self::EntryNotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            Self::StoreError(_) | Self::TemplateError(_) | Self::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
