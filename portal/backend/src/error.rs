//! Portal errors

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use medicare_forms::FormKind;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("no page registered for {0}")]
    UnknownPage(FormKind),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal Server Error</h1>"),
        )
            .into_response()
    }
}
