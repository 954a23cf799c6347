//! The in-memory knowledge base and its query engine.
//!
//! Two relations are read from the source table: disease → symptoms and
//! treatment → diseases. Every query is a lookup or a single join over
//! those, keyed directly by name. Nothing is mutated after load, so a
//! [`KnowledgeBase`] is cheap to clone and safe to share across handlers.

mod builder;
mod error;
mod literal;
mod loader;

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

pub use builder::KnowledgeBaseBuilder;
pub use error::{LoadError, Result};
pub use literal::{normalize_name, parse_list};

use crate::models::{Catalog, Diagnosis, DiseaseProfile, LoadSummary};

/// Immutable disease, symptom and treatment relations loaded from the source table.
#[derive(Clone)]
pub struct KnowledgeBase {
    inner: Arc<Relations>,
}

#[derive(Debug)]
struct Relations {
    symptoms_by_disease: HashMap<String, BTreeSet<String>>,
    diseases_by_symptom: HashMap<String, BTreeSet<String>>,
    treatments_by_disease: HashMap<String, BTreeSet<String>>,
    diseases: Vec<String>,
    symptoms: Vec<String>,
    treatments: Vec<String>,
    summary: LoadSummary,
}

impl KnowledgeBase {
    /// Load the knowledge base from a CSV file.
    ///
    /// Returns [`LoadError::NotFound`] when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let kb = loader::load_path(path.as_ref())?;
        let summary = kb.summary();
        tracing::info!(
            diseases = summary.diseases,
            symptoms = summary.symptoms,
            treatments = summary.treatments,
            skipped_cells = summary.skipped_cells,
            "Loaded knowledge base from {}",
            path.as_ref().display()
        );
        Ok(kb)
    }

    /// Load the knowledge base from any reader yielding CSV text.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        loader::load_reader(reader)
    }

    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::default()
    }

    pub fn summary(&self) -> LoadSummary {
        self.inner.summary
    }

    // ============================================================
    // Catalog
    // ============================================================

    /// All distinct symptom names, sorted.
    pub fn symptoms(&self) -> &[String] {
        &self.inner.symptoms
    }

    /// All disease names, sorted.
    pub fn diseases(&self) -> &[String] {
        &self.inner.diseases
    }

    /// All distinct treatment names, sorted.
    pub fn treatments(&self) -> &[String] {
        &self.inner.treatments
    }

    pub fn catalog(&self) -> Catalog {
        Catalog {
            symptoms: self.inner.symptoms.clone(),
            diseases: self.inner.diseases.clone(),
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn symptoms_of(&self, disease: &str) -> Vec<String> {
        lookup(&self.inner.symptoms_by_disease, disease)
    }

    pub fn treatments_of(&self, disease: &str) -> Vec<String> {
        lookup(&self.inner.treatments_by_disease, disease)
    }

    pub fn diseases_with(&self, symptom: &str) -> Vec<String> {
        lookup(&self.inner.diseases_by_symptom, symptom)
    }

    /// Treatments for any disease presenting `symptom`.
    pub fn treatments_for(&self, symptom: &str) -> Vec<String> {
        let Some(diseases) = self.inner.diseases_by_symptom.get(normalize_name(symptom)) else {
            return Vec::new();
        };

        let treatments: BTreeSet<&String> = diseases
            .iter()
            .filter_map(|d| self.inner.treatments_by_disease.get(d))
            .flatten()
            .collect();

        treatments.into_iter().cloned().collect()
    }

    /// Symptom Checker: possible causes of a symptom and what treats them.
    pub fn diagnose(&self, symptom: &str) -> Diagnosis {
        let diseases = self.diseases_with(symptom);
        let treatments = if diseases.is_empty() {
            Vec::new()
        } else {
            self.treatments_for(symptom)
        };
        tracing::debug!(symptom, causes = diseases.len(), "Diagnosed symptom");

        Diagnosis {
            symptom: normalize_name(symptom).to_string(),
            diseases,
            treatments,
        }
    }

    /// Disease Lookup: symptoms and treatments of a disease.
    pub fn profile(&self, disease: &str) -> DiseaseProfile {
        DiseaseProfile {
            disease: normalize_name(disease).to_string(),
            symptoms: self.symptoms_of(disease),
            treatments: self.treatments_of(disease),
        }
    }
}

impl std::fmt::Debug for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeBase")
            .field("summary", &self.inner.summary)
            .finish()
    }
}

fn lookup(index: &HashMap<String, BTreeSet<String>>, key: &str) -> Vec<String> {
    index
        .get(normalize_name(key))
        .map(|names| names.iter().cloned().collect())
        .unwrap_or_default()
}
