use serde::{Deserialize, Serialize};

/// Result of the Symptom Checker: what might cause a symptom and what treats it.
///
/// `treatments` is the union of the treatments of every disease in
/// `diseases`, so it is always empty when `diseases` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub symptom: String,
    /// Diseases presenting this symptom, sorted.
    pub diseases: Vec<String>,
    /// Treatments acting on any of those diseases, sorted and deduplicated.
    pub treatments: Vec<String>,
}

impl Diagnosis {
    /// Whether any disease in the knowledge base presents the symptom.
    pub fn is_known(&self) -> bool {
        !self.diseases.is_empty()
    }
}

/// Query string for the diagnosis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisQuery {
    pub symptom: String,
}
