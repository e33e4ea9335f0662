//! MediCare Portal
//!
//! Server-rendered front end for the form workflows: one GET/POST pair
//! per form page, a home page, a 404 fallback and a small JSON API.

use axum::{extract::State, routing::get, Form, Router};
use medicare_forms::{
    FormKind, FormWorkflow, NotificationCenter, PageCatalog, Route, SimulatedSubmission,
    SubmissionError, SubmissionHandler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;

use config::PortalConfig;
use error::PortalError;
use render::Renderer;

#[derive(Clone)]
pub struct AppState {
    pub pages: PageCatalog,
    pub notifications: Arc<NotificationCenter>,
    pub handler: Arc<dyn SubmissionHandler>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(config: &PortalConfig) -> Result<Self, PortalError> {
        let mut backend = SimulatedSubmission::new(config.submission_delay());
        if config.simulate_failure {
            backend = backend.failing(SubmissionError::Unavailable("simulated outage".into()));
        }
        Self::with_handler(config, Arc::new(backend))
    }

    pub fn with_handler(config: &PortalConfig, handler: Arc<dyn SubmissionHandler>) -> Result<Self, PortalError> {
        Ok(Self {
            pages: PageCatalog::standard(),
            notifications: Arc::new(NotificationCenter::new(config.notification_capacity)),
            handler,
            renderer: Arc::new(Renderer::new()?),
        })
    }

    /// Fresh workflow for one request
    pub fn mount(&self, kind: FormKind) -> Result<FormWorkflow, PortalError> {
        self.pages
            .get(kind)
            .map(FormWorkflow::mount)
            .ok_or(PortalError::UnknownPage(kind))
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/api/notifications", get(handlers::notifications));

    for kind in FormKind::ALL {
        let path = Route::Form(kind).path().to_string();
        router = router.route(
            &path,
            get(move |state: State<AppState>| handlers::show_form(state, kind)).post(
                move |state: State<AppState>, form: Form<HashMap<String, String>>| {
                    handlers::submit_form(state, kind, form)
                },
            ),
        );
    }

    router
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
