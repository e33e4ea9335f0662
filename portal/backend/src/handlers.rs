//! HTTP Handlers

use axum::{
    extract::{Form, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use medicare_forms::{FormKind, FormsError, Notification, Route};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::PortalError;
use crate::render::{INTENT_FIELD, INTENT_REFRESH, INTENT_SUBMIT};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Notifications not yet shown by any page, oldest first. Read-only.
pub async fn notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.snapshot())
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    Ok(Html(state.renderer.home(&[])?))
}

pub async fn show_form(State(state): State<AppState>, kind: FormKind) -> Result<Html<String>, PortalError> {
    let workflow = state.mount(kind)?;
    Ok(Html(state.renderer.form(&workflow, &[])?))
}

/// Replay the posted values into a fresh workflow, then submit or just re-render
pub async fn submit_form(
    State(state): State<AppState>,
    kind: FormKind,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, PortalError> {
    let mut workflow = state.mount(kind)?;

    let names: Vec<String> = workflow
        .page()
        .schema()
        .fields()
        .iter()
        .map(|f| f.name.clone())
        .collect();
    for name in names {
        if let Some(value) = fields.get(&name) {
            if let Err(e) = workflow.update_field(&name, value.as_str()) {
                warn!(form = %kind, field = %name, error = %e, "field update rejected");
            }
        }
    }

    // only the notice this submission published is shown on its response
    let mut toasts = Vec::new();
    let intent = fields.get(INTENT_FIELD).map(String::as_str).unwrap_or(INTENT_SUBMIT);
    if intent == INTENT_REFRESH {
        debug!(form = %kind, "form refreshed");
    } else {
        match workflow.submit(state.handler.as_ref(), state.notifications.as_ref()).await {
            Ok(outcome) => {
                let id = outcome.notification_id();
                debug!(form = %kind, notification = id, "submission settled");
                match state.notifications.take(id) {
                    Some(notification) => toasts.push(notification),
                    None => warn!(form = %kind, notification = id, "notification evicted before render"),
                }
            }
            // already reported by the workflow and attached to the record
            Err(FormsError::Validation(_)) => {}
            Err(e) => warn!(form = %kind, error = %e, "submission not settled"),
        }
    }

    for event in workflow.take_events() {
        debug!(form = %kind, ?event, "form event");
    }

    Ok(Html(state.renderer.form(&workflow, &toasts)?))
}

/// Anything the router does not match directly, including trailing slashes
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let result = match Route::resolve(uri.path()) {
        Route::Home => home(State(state)).await.map(IntoResponse::into_response),
        Route::Form(kind) => show_form(State(state), kind).await.map(IntoResponse::into_response),
        Route::NotFound(path) => not_found(&state, &path),
    };

    result.unwrap_or_else(IntoResponse::into_response)
}

fn not_found(state: &AppState, path: &str) -> Result<Response, PortalError> {
    warn!(path = %path, "no route");
    let html = state.renderer.not_found(path, &[])?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
