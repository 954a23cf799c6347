mod handlers;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::kb::KnowledgeBase;

pub fn create_router(kb: KnowledgeBase) -> Router {
    let api = Router::new()
        // Selection lists
        .route("/catalog", get(handlers::get_catalog))
        .route("/symptoms", get(handlers::list_symptoms))
        .route("/diseases", get(handlers::list_diseases))
        .route("/treatments", get(handlers::list_treatments))
        // Symptoms (by symptom name)
        .route("/symptoms/{symptom}/diseases", get(handlers::diseases_with))
        .route("/symptoms/{symptom}/treatments", get(handlers::treatments_for))
        // Diseases (by disease name)
        .route("/diseases/{disease}/symptoms", get(handlers::symptoms_of))
        .route("/diseases/{disease}/treatments", get(handlers::treatments_of))
        // Views
        .route("/diagnosis", get(handlers::diagnose))
        .route("/profile", get(handlers::get_profile))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(kb)
}
