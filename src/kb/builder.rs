use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::literal::normalize_name;
use super::{KnowledgeBase, Relations};
use crate::models::LoadSummary;

/// Accumulates the two source relations while the table is read.
///
/// Everything derived from them (reverse indexes, sorted name lists) is
/// computed once in [`KnowledgeBaseBuilder::build`].
#[derive(Debug, Default)]
pub struct KnowledgeBaseBuilder {
    symptoms_by_disease: HashMap<String, BTreeSet<String>>,
    diseases_by_treatment: HashMap<String, BTreeSet<String>>,
    skipped_cells: usize,
}

impl KnowledgeBaseBuilder {
    /// Register a disease, even if it ends up with no symptoms or treatments.
    pub fn add_disease(&mut self, disease: &str) {
        let disease = normalize_name(disease);
        if disease.is_empty() {
            return;
        }
        self.symptoms_by_disease
            .entry(disease.to_string())
            .or_default();
    }

    /// Record that `disease` presents `symptom`.
    pub fn add_symptom(&mut self, disease: &str, symptom: &str) {
        let (disease, symptom) = (normalize_name(disease), normalize_name(symptom));
        if disease.is_empty() || symptom.is_empty() {
            return;
        }
        self.symptoms_by_disease
            .entry(disease.to_string())
            .or_default()
            .insert(symptom.to_string());
    }

    /// Record that `treatment` treats `disease`.
    pub fn add_treatment(&mut self, treatment: &str, disease: &str) {
        let (treatment, disease) = (normalize_name(treatment), normalize_name(disease));
        if treatment.is_empty() || disease.is_empty() {
            return;
        }
        self.add_disease(disease);
        self.diseases_by_treatment
            .entry(treatment.to_string())
            .or_default()
            .insert(disease.to_string());
    }

    pub(super) fn skip_cell(&mut self) {
        self.skipped_cells += 1;
    }

    pub fn build(self) -> KnowledgeBase {
        let mut diseases_by_symptom: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (disease, symptoms) in &self.symptoms_by_disease {
            for symptom in symptoms {
                diseases_by_symptom
                    .entry(symptom.clone())
                    .or_default()
                    .insert(disease.clone());
            }
        }

        let mut treatments_by_disease: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (treatment, diseases) in &self.diseases_by_treatment {
            for disease in diseases {
                treatments_by_disease
                    .entry(disease.clone())
                    .or_default()
                    .insert(treatment.clone());
            }
        }

        let diseases = sorted_keys(&self.symptoms_by_disease);
        let symptoms = sorted_keys(&diseases_by_symptom);
        let treatments = sorted_keys(&self.diseases_by_treatment);

        let summary = LoadSummary {
            diseases: diseases.len(),
            symptoms: symptoms.len(),
            treatments: treatments.len(),
            skipped_cells: self.skipped_cells,
        };

        KnowledgeBase {
            inner: Arc::new(Relations {
                symptoms_by_disease: self.symptoms_by_disease,
                diseases_by_symptom,
                treatments_by_disease,
                diseases,
                symptoms,
                treatments,
                summary,
            }),
        }
    }
}

fn sorted_keys(map: &HashMap<String, BTreeSet<String>>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}
