use serde::{Deserialize, Serialize};

/// The selection lists offered to the user: every known symptom and disease.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub symptoms: Vec<String>,
    pub diseases: Vec<String>,
}

/// Counts reported once the knowledge base has been loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub diseases: usize,
    pub symptoms: usize,
    pub treatments: usize,
    /// List cells that could not be parsed and were treated as empty.
    pub skipped_cells: usize,
}
