use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::kb::KnowledgeBase;
use crate::models::*;

// Unknown names are not errors: every lookup answers 200 with an empty list.
// A missing `symptom`/`disease` query parameter is rejected by the `Query`
// extractor with 400.

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Selection lists
// ============================================================

pub async fn get_catalog(State(kb): State<KnowledgeBase>) -> Json<Catalog> {
    Json(kb.catalog())
}

pub async fn list_symptoms(State(kb): State<KnowledgeBase>) -> Json<Vec<String>> {
    Json(kb.symptoms().to_vec())
}

pub async fn list_diseases(State(kb): State<KnowledgeBase>) -> Json<Vec<String>> {
    Json(kb.diseases().to_vec())
}

pub async fn list_treatments(State(kb): State<KnowledgeBase>) -> Json<Vec<String>> {
    Json(kb.treatments().to_vec())
}

// ============================================================
// Symptoms
// ============================================================

pub async fn diseases_with(
    State(kb): State<KnowledgeBase>,
    Path(symptom): Path<String>,
) -> Json<Vec<String>> {
    Json(kb.diseases_with(&symptom))
}

pub async fn treatments_for(
    State(kb): State<KnowledgeBase>,
    Path(symptom): Path<String>,
) -> Json<Vec<String>> {
    Json(kb.treatments_for(&symptom))
}

// ============================================================
// Diseases
// ============================================================

pub async fn symptoms_of(
    State(kb): State<KnowledgeBase>,
    Path(disease): Path<String>,
) -> Json<Vec<String>> {
    Json(kb.symptoms_of(&disease))
}

pub async fn treatments_of(
    State(kb): State<KnowledgeBase>,
    Path(disease): Path<String>,
) -> Json<Vec<String>> {
    Json(kb.treatments_of(&disease))
}

// ============================================================
// Views
// ============================================================

pub async fn diagnose(
    State(kb): State<KnowledgeBase>,
    Query(query): Query<DiagnosisQuery>,
) -> Json<Diagnosis> {
    Json(kb.diagnose(&query.symptom))
}

pub async fn get_profile(
    State(kb): State<KnowledgeBase>,
    Query(query): Query<ProfileQuery>,
) -> Json<DiseaseProfile> {
    Json(kb.profile(&query.disease))
}
